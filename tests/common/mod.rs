#![allow(dead_code)]

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tempfile::TempDir;
use todo_api::db;
use todo_api::models::{CategoryInput, TodoInput};

/// In-memory database with the schema applied. One connection, so every
/// query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse database url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create database");

    db::migrate(&pool).await.expect("Failed to run migrations");
    pool
}

/// File-backed database shared by several connections, so queries really run
/// side by side. Keep the `TempDir` alive for as long as the pool is used.
pub async fn file_pool(connections: u32) -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("todos.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(connections)
        .min_connections(connections)
        .connect_with(options)
        .await
        .expect("Failed to create database");

    db::migrate(&pool).await.expect("Failed to run migrations");
    (dir, pool)
}

pub fn todo(title: &str) -> TodoInput {
    TodoInput {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn category(name: &str, color: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        color: color.to_string(),
    }
}

pub mod category_repository;
pub mod repository;
pub mod todo_repository;

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;

pub use category_repository::SqliteCategoryRepository;
pub use repository::{CategoryRepository, TodoRepository};
pub use todo_repository::SqliteTodoRepository;

pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    info!(
        "connected to {} (max {} connections)",
        config.database_url, config.db_max_connections
    );
    Ok(pool)
}

pub async fn migrate(db: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(db).await?;
    info!("database migrations applied");
    Ok(())
}

/// Fixed-width RFC 3339 so that stored timestamps sort lexically in time order.
pub(crate) fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Executor, FromRow, QueryBuilder, Sqlite, SqlitePool};

use super::repository::TodoRepository;
use super::timestamp;
use crate::models::{Category, NewTodo, Priority, Todo, TodoQuery};

const SELECT_TODOS: &str = r#"
    SELECT
        t.id, t.title, t.description, t.completed, t.category_id, t.priority,
        t.due_date, t.created_at, t.updated_at,
        c.name AS category_name,
        c.color AS category_color,
        c.created_at AS category_created_at
    FROM todos t
    LEFT JOIN categories c ON c.id = t.category_id
"#;

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: Option<String>,
    completed: bool,
    category_id: Option<i64>,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_color: Option<String>,
    category_created_at: Option<DateTime<Utc>>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        let category = match (
            row.category_id,
            row.category_name,
            row.category_color,
            row.category_created_at,
        ) {
            (Some(id), Some(name), Some(color), Some(created_at)) => Some(Category {
                id,
                name,
                color,
                created_at,
            }),
            _ => None,
        };

        Todo {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            category_id: row.category_id,
            priority: row.priority,
            due_date: row.due_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category,
        }
    }
}

pub struct SqliteTodoRepository {
    db: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, todo: &NewTodo) -> Result<Todo, sqlx::Error> {
        let now = timestamp(&Utc::now());

        let result = sqlx::query(
            r#"
            INSERT INTO todos
                (title, description, completed, category_id, priority, due_date,
                created_at, updated_at, search_text)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7, ?8)
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.category_id)
        .bind(todo.priority.as_str())
        .bind(todo.due_date.as_ref().map(timestamp))
        .bind(&now)
        .bind(search_text(todo))
        .execute(&self.db)
        .await?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        fetch_todo(&self.db, id).await
    }

    async fn list(&self, query: &TodoQuery) -> Result<(Vec<Todo>, i64), sqlx::Error> {
        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM todos t");
        push_filters(&mut count, query);
        let total: i64 = count.build_query_scalar::<i64>().fetch_one(&self.db).await?;

        let mut select = QueryBuilder::<Sqlite>::new(SELECT_TODOS);
        push_filters(&mut select, query);
        let order = query.sort_order.keyword();
        select
            .push(format!(
                " ORDER BY {} {order}, t.id {order}",
                query.sort_by.column()
            ))
            .push(" LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(query.offset());

        let rows = select.build_query_as::<TodoRow>().fetch_all(&self.db).await?;
        Ok((rows.into_iter().map(Todo::from).collect(), total))
    }

    async fn update(&self, id: i64, todo: &NewTodo) -> Result<Option<Todo>, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?1,
                description = ?2,
                completed = ?3,
                category_id = ?4,
                priority = ?5,
                due_date = ?6,
                updated_at = ?7,
                search_text = ?8
            WHERE id = ?9
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.category_id)
        .bind(todo.priority.as_str())
        .bind(todo.due_date.as_ref().map(timestamp))
        .bind(timestamp(&Utc::now()))
        .bind(search_text(todo))
        .bind(id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_complete(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        // The write lock taken by the UPDATE is held until commit, so the read
        // below sees this toggle and no other.
        let mut tx = self.db.begin().await?;

        let result =
            sqlx::query("UPDATE todos SET completed = NOT completed, updated_at = ? WHERE id = ?")
                .bind(timestamp(&Utc::now()))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let todo = fetch_todo(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(todo)
    }
}

async fn fetch_todo<'e, E>(executor: E, id: i64) -> Result<Option<Todo>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, TodoRow>(&format!("{SELECT_TODOS} WHERE t.id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.map(Todo::from))
}

/// Lowercased title and description, matched by search.
fn search_text(todo: &NewTodo) -> String {
    let mut text = todo.title.to_lowercase();
    if let Some(description) = &todo.description {
        text.push('\n');
        text.push_str(&description.to_lowercase());
    }
    text
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, query: &TodoQuery) {
    builder.push(" WHERE 1 = 1");

    if let Some(term) = &query.search {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        builder
            .push(" AND t.search_text LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\'");
    }
    if let Some(completed) = query.filter.completed {
        builder.push(" AND t.completed = ").push_bind(completed);
    }
    if let Some(category_id) = query.filter.category_id {
        builder.push(" AND t.category_id = ").push_bind(category_id);
    }
    if let Some(priority) = query.filter.priority {
        builder.push(" AND t.priority = ").push_bind(priority.as_str());
    }
}

/// Escapes LIKE wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

//! `SqliteTodoStore`: the `TodoStore` over a `SQLite` file.

use crate::schema::CREATE_TODOS;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use todo_list_core::store::StoreFuture;
use todo_list_core::{StoreError, Title, Todo, TodoId, TodoStore};

/// Pool size for file-backed stores.
const MAX_CONNECTIONS: u32 = 5;

/// `SQLite`-based todo store.
///
/// Cloning is cheap: clones share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use todo_list_core::{TodoId, TodoStore};
/// use todo_list_sqlite::SqliteTodoStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SqliteTodoStore::in_memory().await?;
///
/// // Toggling an unknown id is a silent no-op
/// store.toggle(TodoId::new(42)).await?;
/// assert!(store.list().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Open (creating if missing) the database file at `path` and ensure the
    /// `todos` table exists.
    ///
    /// Safe to call against an already-initialized file. The parent directory
    /// must already exist.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Open`] if the file cannot be opened or created
    /// - [`StoreError::Schema`] if the table cannot be created
    pub async fn initialize(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        tracing::info!(path = %path.display(), "Opened todo database");

        Self::from_pool(pool).await
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds a single connection that never expires, since an
    /// in-memory database lives exactly as long as its connection.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Open`] if `SQLite` cannot allocate the database
    /// - [`StoreError::Schema`] if the table cannot be created
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StoreError::Open(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, ensuring the `todos` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Schema`] if the table cannot be created. The pool
    /// is closed in that case.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        if let Err(e) = sqlx::query(CREATE_TODOS).execute(&pool).await {
            pool.close().await;
            return Err(StoreError::Schema(e.to_string()));
        }

        Ok(Self { pool })
    }

    /// Get the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn list_rows(&self) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter().map(Self::row_to_todo).collect()
    }

    async fn insert(&self, title: &Title) -> Result<(), StoreError> {
        let result = sqlx::query("INSERT INTO todos (title) VALUES (?1)")
            .bind(title.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(todo_id = result.last_insert_rowid(), "Todo created");

        Ok(())
    }

    async fn flip_completed(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE todos SET completed = NOT completed WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(todo_id = %id, rows = result.rows_affected(), "Todo toggled");

        Ok(())
    }

    async fn remove(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(todo_id = %id, rows = result.rows_affected(), "Todo deleted");

        Ok(())
    }

    async fn select_one(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    /// Convert a database row to a `Todo`.
    ///
    /// `CURRENT_TIMESTAMP` is stored as naive UTC text.
    fn row_to_todo(row: &SqliteRow) -> Result<Todo, StoreError> {
        let decode = |e: sqlx::Error| StoreError::Query(e.to_string());

        let id: i64 = row.try_get("id").map_err(decode)?;
        let title: String = row.try_get("title").map_err(decode)?;
        let completed: bool = row.try_get("completed").map_err(decode)?;
        let created_at: NaiveDateTime = row.try_get("created_at").map_err(decode)?;

        Ok(Todo::new(TodoId::new(id), title, completed, created_at.and_utc()))
    }
}

impl TodoStore for SqliteTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        Box::pin(self.list_rows())
    }

    fn create<'a>(&'a self, title: &'a Title) -> StoreFuture<'a, ()> {
        Box::pin(self.insert(title))
    }

    fn toggle(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(self.flip_completed(id))
    }

    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(self.remove(id))
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(self.select_one())
    }
}

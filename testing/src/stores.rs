//! In-memory store implementations for handler and integration tests.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use todo_list_core::environment::{Clock, SystemClock};
use todo_list_core::store::StoreFuture;
use todo_list_core::{StoreError, Title, Todo, TodoId, TodoStore, MAX_TITLE_LEN};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Todo>,
    last_id: i64,
}

/// In-memory todo store for fast, deterministic testing.
///
/// Mirrors the `SQLite` store: ids start at 1, increase strictly and are never
/// reused, rows come back in id order, and titles longer than
/// [`MAX_TITLE_LEN`] characters are rejected as write failures.
///
/// # Example
///
/// ```
/// use todo_list_core::{Title, TodoId, TodoStore};
/// use todo_list_testing::{test_clock, InMemoryTodoStore};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryTodoStore::with_clock(Arc::new(test_clock()));
/// store.create(&Title::new("First")?).await?;
/// store.toggle(TodoId::new(1)).await?;
/// assert!(store.snapshot()[0].completed());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryTodoStore {
    table: Arc<RwLock<Table>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTodoStore {
    /// Create an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store whose `created_at` values come from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
            clock,
        }
    }

    /// Current rows in id order, read synchronously.
    ///
    /// Useful for assertions in tests.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        self.table.read().unwrap().rows.clone()
    }

    /// Number of stored todos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().unwrap().rows.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().unwrap().rows.is_empty()
    }

    fn insert(&self, title: &Title) -> Result<(), StoreError> {
        if title.as_str().chars().count() > MAX_TITLE_LEN {
            return Err(StoreError::Write(
                "CHECK constraint failed: length(title) BETWEEN 1 AND 500".to_string(),
            ));
        }

        let created_at = self.clock.now();
        let mut table = self.table.write().unwrap();
        table.last_id += 1;
        let id = TodoId::new(table.last_id);
        table
            .rows
            .push(Todo::new(id, title.as_str().to_string(), false, created_at));
        Ok(())
    }

    fn flip(&self, id: TodoId) {
        let mut table = self.table.write().unwrap();
        if let Some(row) = table.rows.iter_mut().find(|t| t.id() == id) {
            *row = Todo::new(
                row.id(),
                row.title().to_string(),
                !row.completed(),
                row.created_at(),
            );
        }
    }

    fn remove(&self, id: TodoId) {
        self.table.write().unwrap().rows.retain(|t| t.id() != id);
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryTodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTodoStore")
            .field("rows", &self.len())
            .finish_non_exhaustive()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        let rows = self.snapshot();
        Box::pin(async move { Ok(rows) })
    }

    fn create<'a>(&'a self, title: &'a Title) -> StoreFuture<'a, ()> {
        let result = self.insert(title);
        Box::pin(async move { result })
    }

    fn toggle(&self, id: TodoId) -> StoreFuture<'_, ()> {
        self.flip(id);
        Box::pin(async { Ok(()) })
    }

    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        self.remove(id);
        Box::pin(async { Ok(()) })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }
}

/// A store whose every operation fails with the same error.
///
/// Counts calls so tests can assert that a handler never reached the store.
///
/// # Example
///
/// ```
/// use todo_list_core::{StoreError, TodoStore};
/// use todo_list_testing::FailingTodoStore;
///
/// # async fn example() {
/// let store = FailingTodoStore::new(StoreError::Query("database is locked".into()));
/// assert!(store.list().await.is_err());
/// assert_eq!(store.calls(), 1);
/// # }
/// ```
#[derive(Debug)]
pub struct FailingTodoStore {
    error: StoreError,
    calls: AtomicUsize,
}

impl FailingTodoStore {
    /// Create a store that fails with `error`.
    #[must_use]
    pub const fn new(error: StoreError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of operations attempted so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T: Send + 'static>(&self) -> StoreFuture<'_, T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

impl TodoStore for FailingTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        self.fail()
    }

    fn create<'a>(&'a self, _title: &'a Title) -> StoreFuture<'a, ()> {
        self.fail()
    }

    fn toggle(&self, _id: TodoId) -> StoreFuture<'_, ()> {
        self.fail()
    }

    fn delete(&self, _id: TodoId) -> StoreFuture<'_, ()> {
        self.fail()
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        self.fail()
    }
}

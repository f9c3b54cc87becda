//! Store trait and error type for todo persistence.
//!
//! This module defines the core abstraction for the `todos` table: five
//! single-statement operations and nothing else.
//!
//! # Design
//!
//! Each operation maps to exactly one SQL statement. There are no
//! transactions, no locking and no optimistic concurrency: two concurrent
//! toggles of the same row are last-write-wins.
//!
//! # Implementations
//!
//! - `SqliteTodoStore` (in `todo-list-sqlite` crate): File-backed production store
//! - `InMemoryTodoStore` (in `todo-list-testing` crate): Fast, deterministic testing
//!
//! # Example
//!
//! ```no_run
//! use todo_list_core::{StoreError, TodoId, TodoStore};
//!
//! async fn check_off_first<S: TodoStore>(store: &S) -> Result<(), StoreError> {
//!     if let Some(first) = store.list().await?.first() {
//!         store.toggle(first.id()).await?;
//!     }
//!     // Unknown ids are a no-op, not an error
//!     store.delete(TodoId::new(9_999)).await?;
//!     Ok(())
//! }
//! ```

use crate::todo::{Title, Todo, TodoId};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by [`TodoStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
///
/// The message carried by each variant is the driver's own text. The HTTP
/// layer forwards it verbatim in 500 responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing database could not be opened.
    #[error("opening database: {0}")]
    Open(String),

    /// The `todos` table could not be created.
    #[error("creating table: {0}")]
    Schema(String),

    /// A read failed or returned undecodable rows.
    #[error("{0}")]
    Query(String),

    /// An insert, update or delete failed.
    #[error("{0}")]
    Write(String),
}

/// CRUD contract over the `todos` table.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: a single handle is shared by every
/// request handler.
///
/// # Dyn Compatibility
///
/// This trait uses explicit `Pin<Box<dyn Future>>` returns instead of `async fn`
/// so handlers can hold an `Arc<dyn TodoStore>`.
pub trait TodoStore: Send + Sync {
    /// Return every todo ordered by ascending id.
    ///
    /// An empty vector means "no todos yet".
    ///
    /// # Errors
    ///
    /// - `Query`: The select failed or a row could not be decoded
    fn list(&self) -> StoreFuture<'_, Vec<Todo>>;

    /// Insert a new todo with `completed = false` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// - `Write`: The insert failed (including titles longer than the column allows)
    fn create<'a>(&'a self, title: &'a Title) -> StoreFuture<'a, ()>;

    /// Flip `completed` for the row with the given id.
    ///
    /// Succeeds without effect when no row matches.
    ///
    /// # Errors
    ///
    /// - `Write`: The update failed
    fn toggle(&self, id: TodoId) -> StoreFuture<'_, ()>;

    /// Remove the row with the given id.
    ///
    /// Succeeds without effect when no row matches.
    ///
    /// # Errors
    ///
    /// - `Write`: The delete failed
    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()>;

    /// Check that the store can still serve queries.
    ///
    /// # Errors
    ///
    /// - `Query`: The store is unreachable
    fn ping(&self) -> StoreFuture<'_, ()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_keeps_driver_message() {
        let error = StoreError::Write("disk I/O error".to_string());
        assert_eq!(error.to_string(), "disk I/O error");
    }

    #[test]
    fn open_error_display() {
        let error = StoreError::Open("unable to open database file".to_string());
        let display = format!("{error}");
        assert!(display.starts_with("opening database"));
        assert!(display.contains("unable to open"));
    }

    #[test]
    fn trait_is_dyn_compatible() {
        fn assert_dyn(_: Option<&dyn TodoStore>) {}
        assert_dyn(None);
    }
}

//! `SQLite` todo store for the todo list.
//!
//! This crate provides the file-backed implementation of the `TodoStore`
//! trait from `todo-list-core`. It uses sqlx with runtime-checked queries and
//! supports:
//!
//! - Idempotent schema creation on open
//! - Connection pooling
//! - Isolated in-memory databases for tests
//!
//! # Example
//!
//! ```no_run
//! use todo_list_core::{Title, TodoStore};
//! use todo_list_sqlite::SqliteTodoStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteTodoStore::initialize("./todos.db").await?;
//!     store.create(&Title::new("Buy milk")?).await?;
//!     assert_eq!(store.list().await?.len(), 1);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod schema;
mod store;

pub use store::SqliteTodoStore;

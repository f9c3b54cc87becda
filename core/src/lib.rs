//! # Todo List Core
//!
//! Domain types and the persistence abstraction shared by every crate in the
//! workspace.
//!
//! ## Core Concepts
//!
//! - **Todo**: An immutable snapshot of one row (`id`, `title`, `completed`, `created_at`)
//! - **`TodoStore`**: The CRUD contract over the `todos` table
//! - **Errors**: `StoreError` for persistence failures, `ValidationError` for bad input
//! - **Environment**: Injected dependencies (the `Clock`)
//!
//! ## Example
//!
//! ```no_run
//! use todo_list_core::{Title, TodoStore};
//!
//! async fn add_and_list<S: TodoStore>(store: &S) -> Result<(), Box<dyn std::error::Error>> {
//!     store.create(&Title::new("Buy milk")?).await?;
//!
//!     for todo in store.list().await? {
//!         println!("[{}] {}", if todo.completed() { "x" } else { " " }, todo.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod store;
pub mod todo;

// Re-export commonly used types
pub use store::{StoreError, TodoStore};
pub use todo::{Title, Todo, TodoId, ValidationError, MAX_TITLE_LEN};

/// Environment module - Dependency injection traits
///
/// All time-dependent code takes a `Clock` so tests can pin the current
/// instant.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_list_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

//! Axum front end for the todo list.
//!
//! This crate turns HTML form submissions into `TodoStore` calls and renders
//! the list back as a server-side HTML page.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract form values** from the query string and url-encoded body
//! 3. **Validate** the `id` / `title` field
//! 4. **Call the store** (one SQL statement)
//! 5. **Redirect** to `/` with 303 (mutations), or **render** the page (index)
//!
//! # Routes
//!
//! ```text
//! /             list page (any method; 404 for every unknown path)
//! /create       POST title  → 303 /
//! /toggle       POST id     → 303 /   (400 invalid id)
//! /delete       POST id     → 303 /   (400 invalid id)
//! /favicon.ico  SVG icon
//! /health       liveness
//! /ready        store readiness
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_list_sqlite::SqliteTodoStore;
//! use todo_list_web::{build_router, AppState, Renderer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteTodoStore::initialize("todos.db").await?;
//! let state = AppState::new(Arc::new(store), Renderer::new("Todo List")?);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:9004").await?;
//! axum::serve(listener, build_router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::FormValues;
pub use middleware::{request_id_layer, RequestId, REQUEST_ID_HEADER};
pub use render::{html_escape, PageContext, Renderer};
pub use router::build_router;
pub use state::AppState;

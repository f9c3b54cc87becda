//! Application state for Axum handlers.
//!
//! The store handle and the page renderer are injected here once and cloned
//! (cheaply, via `Arc`) into every request. There is no other shared state.

use crate::render::Renderer;
use std::sync::Arc;
use todo_list_core::TodoStore;

/// Application state shared across all HTTP handlers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use todo_list_testing::InMemoryTodoStore;
/// use todo_list_web::{AppState, Renderer};
///
/// # fn example() -> Result<(), tera::Error> {
/// let state = AppState::new(Arc::new(InMemoryTodoStore::new()), Renderer::new("Todo List")?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
    renderer: Arc<Renderer>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>, renderer: Renderer) -> Self {
        Self {
            store,
            renderer: Arc::new(renderer),
        }
    }

    /// The todo store.
    #[must_use]
    pub fn store(&self) -> &dyn TodoStore {
        self.store.as_ref()
    }

    /// The page renderer.
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("renderer", &self.renderer.app_name())
            .finish_non_exhaustive()
    }
}

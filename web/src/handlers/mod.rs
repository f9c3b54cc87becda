//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by concern.

pub mod assets;
pub mod health;
pub mod todos;

// Re-export common handler utilities
pub use assets::{favicon, not_found};
pub use health::{health_check, readiness_check};
pub use todos::{create, delete, index, toggle};

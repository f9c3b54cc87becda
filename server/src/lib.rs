//! Todo list HTTP server.
//!
//! Wires the `SQLite` store and the web router together. The binary in
//! `main.rs` adds tracing, configuration and signal handling on top.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod config;

use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use todo_list_sqlite::SqliteTodoStore;
use todo_list_web::{build_router, AppState, Renderer};

pub use config::{Args, Config};

/// Page title shown in the browser tab and heading.
pub const APP_NAME: &str = "Todo List";

/// Open the store at the configured path and build the router around it.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or its schema created,
/// or if the page template fails to compile.
pub async fn build_app(config: &Config) -> anyhow::Result<(Router, SqliteTodoStore)> {
    let db_path = config.db_path();
    let store = SqliteTodoStore::initialize(&db_path)
        .await
        .with_context(|| format!("initializing database at {}", db_path.display()))?;

    let renderer = Renderer::new(APP_NAME).context("compiling page template")?;
    let state = AppState::new(Arc::new(store.clone()), renderer);

    Ok((build_router(state), store))
}

/// Bind the configured address and serve until `shutdown` resolves.
///
/// The store's connections are closed once in-flight requests finish.
///
/// # Errors
///
/// Returns an error if startup fails or the listener cannot be bound.
pub async fn run<F>(config: &Config, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (app, store) = build_app(config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("serving HTTP")?;

    store.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

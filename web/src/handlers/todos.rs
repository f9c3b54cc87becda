//! List page and the three mutating form endpoints.
//!
//! Every mutation is redirect-after-post: success answers 303 to `/`. A
//! non-POST request to a mutating route gets the same redirect and touches
//! nothing.

use crate::error::AppError;
use crate::extractors::FormValues;
use crate::render::PageContext;
use crate::state::AppState;
use axum::{
    extract::State,
    http::Method,
    response::{Html, Redirect},
};
use todo_list_core::{Title, TodoId};

/// Where every mutation sends the browser afterwards.
const HOME: &str = "/";

/// Render the list page.
///
/// A failing `list()` is logged and rendered as an error notice above the
/// create form; the page itself still answers 200.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Errors
///
/// Returns a 500 [`AppError`] if the page template fails to render.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let name = state.renderer().app_name();
    let page = match state.store().list().await {
        Ok(todos) => PageContext::for_list(name, &todos),
        Err(e) => {
            tracing::error!(error = %e, "Error listing todos");
            PageContext::for_error(name, &e.to_string())
        }
    };

    Ok(Html(state.renderer().render(&page)?))
}

/// Create a todo from the `title` field.
///
/// A missing or empty title is skipped silently.
///
/// # Endpoint
///
/// ```text
/// POST /create   title=<text>
/// ```
///
/// # Errors
///
/// Returns a 500 [`AppError`] carrying the store's message if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    method: Method,
    form: FormValues,
) -> Result<Redirect, AppError> {
    if method != Method::POST {
        return Ok(Redirect::to(HOME));
    }

    if let Some(title) = form.get("title").and_then(|t| Title::new(t).ok()) {
        state.store().create(&title).await?;
        tracing::info!(title_len = title.as_str().chars().count(), "Todo created");
    }

    Ok(Redirect::to(HOME))
}

/// Flip the completion flag of the todo named by `id`.
///
/// # Endpoint
///
/// ```text
/// POST /toggle   id=<integer>
/// ```
///
/// # Errors
///
/// - 400 `invalid id` if `id` is missing or not an integer
/// - 500 with the store's message if the update fails
pub async fn toggle(
    State(state): State<AppState>,
    method: Method,
    form: FormValues,
) -> Result<Redirect, AppError> {
    if method != Method::POST {
        return Ok(Redirect::to(HOME));
    }

    let id = form_id(&form)?;
    state.store().toggle(id).await?;
    tracing::info!(todo_id = %id, "Todo toggled");

    Ok(Redirect::to(HOME))
}

/// Delete the todo named by `id`.
///
/// # Endpoint
///
/// ```text
/// POST /delete   id=<integer>
/// ```
///
/// # Errors
///
/// - 400 `invalid id` if `id` is missing or not an integer
/// - 500 with the store's message if the delete fails
pub async fn delete(
    State(state): State<AppState>,
    method: Method,
    form: FormValues,
) -> Result<Redirect, AppError> {
    if method != Method::POST {
        return Ok(Redirect::to(HOME));
    }

    let id = form_id(&form)?;
    state.store().delete(id).await?;
    tracing::info!(todo_id = %id, "Todo deleted");

    Ok(Redirect::to(HOME))
}

/// Missing and malformed ids are the same 400.
fn form_id(form: &FormValues) -> Result<TodoId, AppError> {
    Ok(TodoId::parse(form.get("id").unwrap_or_default())?)
}

//! Static assets served from the binary.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><rect width="32" height="32" rx="6" fill="#00d1b2"/><path d="M8 17l5 5 11-12" fill="none" stroke="#fff" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// `GET /favicon.ico`: a checkmark icon.
#[allow(clippy::unused_async)]
pub async fn favicon() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        FAVICON_SVG,
    )
}

/// Fallback for every unrouted path.
#[allow(clippy::unused_async)]
pub async fn not_found() -> crate::error::AppError {
    crate::error::AppError::not_found()
}

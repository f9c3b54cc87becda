//! Custom Axum extractors.
//!
//! - `FormValues`: Lenient form parsing that merges the request body with the
//!   query string
//!
//! Axum's `Form<T>` rejects requests with the wrong content type or a missing
//! field. The todo handlers need the opposite: a missing `title` is simply
//! skipped, and a missing `id` is reported as `invalid id` by the handler.
//!
//! Bodies are decoded when their media type (compared case-insensitively) is
//! `application/x-www-form-urlencoded` or `multipart/form-data`. Any other
//! body contributes no fields.
//!
//! # Examples
//!
//! ```ignore
//! use todo_list_web::extractors::FormValues;
//!
//! async fn handler(form: FormValues) -> String {
//!     form.get("title").unwrap_or_default().to_string()
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Decoded form fields from a request.
///
/// Body fields come first, then query-string fields, so [`FormValues::get`]
/// prefers the body when a key appears in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Merge decoded url-encoded `body` fields ahead of decoded `query` fields.
    ///
    /// Input that cannot be decoded contributes no fields.
    #[must_use]
    pub fn parse(query: Option<&str>, body: Option<&[u8]>) -> Self {
        let fields = body
            .and_then(|b| serde_urlencoded::from_bytes(b).ok())
            .unwrap_or_default();
        Self::merge(fields, query)
    }

    fn merge(mut fields: Vec<(String, String)>, query: Option<&str>) -> Self {
        let query_fields: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();
        fields.extend(query_fields);
        Self(fields)
    }

    /// First value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when no fields were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowercased media type of the body, without parameters.
fn media_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next().unwrap_or_default().trim();
    (!essence.is_empty()).then(|| essence.to_ascii_lowercase())
}

/// Text parts of a multipart body, in order. File parts are skipped and a
/// malformed body ends the read with whatever was decoded so far.
async fn multipart_fields<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unreadable multipart body");
            return Vec::new();
        }
    };

    let mut fields = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Stopped reading multipart body");
                break;
            }
        };

        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(e) => {
                tracing::debug!(error = %e, field = %name, "Stopped reading multipart body");
                break;
            }
        }
    }
    fields
}

#[async_trait]
impl<S> FromRequest<S> for FormValues
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);

        let body: Vec<(String, String)> = match media_type(req.headers()).as_deref() {
            Some(FORM_CONTENT_TYPE) => {
                let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                    AppError::new(rejection.status(), rejection.body_text())
                })?;
                serde_urlencoded::from_bytes(&bytes).unwrap_or_default()
            }
            Some(MULTIPART_CONTENT_TYPE) => multipart_fields(req, state).await,
            _ => Vec::new(),
        };

        Ok(Self::merge(body, query.as_deref()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    async fn extract(req: HttpRequest<Body>) -> FormValues {
        FormValues::from_request(req, &()).await.expect("Should extract")
    }

    #[tokio::test]
    async fn test_body_fields_are_decoded() {
        let req = HttpRequest::builder()
            .method("POST")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from("title=Buy+milk+%26+eggs"))
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("title"), Some("Buy milk & eggs"));
    }

    #[tokio::test]
    async fn test_body_wins_over_query() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/toggle?id=9")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
            .body(Body::from("id=3"))
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("id"), Some("3"));
    }

    #[tokio::test]
    async fn test_query_is_used_without_body() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/delete?id=5")
            .body(Body::empty())
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("id"), Some("5"));
    }

    #[tokio::test]
    async fn test_non_form_body_is_ignored() {
        let req = HttpRequest::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"x"}"#))
            .unwrap();

        let form = extract(req).await;

        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_media_type_is_case_insensitive() {
        let req = HttpRequest::builder()
            .method("POST")
            .header(CONTENT_TYPE, "Application/X-WWW-Form-Urlencoded; Charset=UTF-8")
            .body(Body::from("id=1"))
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("id"), Some("1"));
    }

    #[tokio::test]
    async fn test_multipart_text_fields_are_decoded() {
        let body = "--XyZ\r\n\
                    Content-Disposition: form-data; name=\"title\"\r\n\r\n\
                    Tom & Jerry\r\n\
                    --XyZ\r\n\
                    Content-Disposition: form-data; name=\"upload\"; filename=\"a.txt\"\r\n\
                    Content-Type: text/plain\r\n\r\n\
                    ignored\r\n\
                    --XyZ--\r\n";
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/create?title=from-query")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XyZ")
            .body(Body::from(body))
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("title"), Some("Tom & Jerry"));
        assert_eq!(form.get("upload"), None);
    }

    #[tokio::test]
    async fn test_multipart_without_boundary_falls_back_to_query() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/delete?id=4")
            .header(CONTENT_TYPE, "multipart/form-data")
            .body(Body::from("garbage"))
            .unwrap();

        let form = extract(req).await;

        assert_eq!(form.get("id"), Some("4"));
    }

    #[test]
    fn test_media_type_strips_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "Multipart/Form-Data ; boundary=x".parse().unwrap());
        assert_eq!(media_type(&headers).as_deref(), Some(MULTIPART_CONTENT_TYPE));
        assert_eq!(media_type(&HeaderMap::new()), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let form = FormValues::parse(None, Some(&b"id=1&id=2"[..]));
        assert_eq!(form.get("id"), Some("1"));
    }

    #[test]
    fn test_missing_key() {
        let form = FormValues::parse(Some("other=1"), None);
        assert_eq!(form.get("id"), None);
    }
}

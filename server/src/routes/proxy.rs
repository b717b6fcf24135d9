//! Same-origin forwarding of `/api/*` to the backend API.
//!
//! DESIGN
//! ======
//! The browser client calls the fixed base `/api`; this handler replays each
//! request against `NOTENEST_API_URL` with the same method, raw path, query,
//! body and end-to-end headers, and returns the upstream status and body
//! untouched. Hop-by-hop headers are dropped in both directions.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out upstream maps to `502 Bad Gateway`. Upstream
//! error statuses (404, 409, ...) are not errors here and pass through.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const API_PREFIX: &str = "/api";
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(error = %self, %status, "api proxy failed");
        (status, self.to_string()).into_response()
    }
}

/// Upstream URL for an incoming raw path (with the `/api` prefix already
/// removed) and optional query string.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{path}?{query}"),
        None => format!("{base}{path}"),
    }
}

/// Copy of `headers` without hop-by-hop, `host`, `content-length`, and any
/// header named in `Connection`.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    headers
        .iter()
        .filter(|(name, _)| is_forwardable(name, &listed))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn is_forwardable(name: &HeaderName, listed: &[String]) -> bool {
    let name = name.as_str();
    !HOP_BY_HOP.contains(&name) && name != "host" && name != "content-length" && !listed.iter().any(|l| l == name)
}

/// `ANY /api/{*path}` handler.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    // Raw path keeps percent-encoded slugs intact.
    let raw_path = parts.uri.path();
    let path = raw_path.strip_prefix(API_PREFIX).unwrap_or(raw_path);
    let url = upstream_url(&state.config.api_upstream, path, parts.uri.query());

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, "api proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

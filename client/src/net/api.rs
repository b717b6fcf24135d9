//! REST helpers for the NoteNest API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since pages
//! only fetch once hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper issues exactly one request. Transport, status and decode
//! failures come back as `ApiError` untouched; there is no retry, timeout or
//! cache at this layer. Pages decide how a failure renders.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::ApiError;
use super::types::{Page, PageCreate, PageList, PageUpdate, Plugin, SearchQuery, Tag};

/// Fixed API root. The host binary forwards this prefix to the backend.
pub const API_BASE_URL: &str = "/api";

/// Page size used by the page list when none is given.
pub const DEFAULT_LIMIT: u32 = 50;

#[cfg(any(test, feature = "hydrate"))]
fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn pages_endpoint() -> String {
    format!("{API_BASE_URL}/pages")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_pages_endpoint(limit: u32, offset: u32) -> String {
    format!("{API_BASE_URL}/pages?limit={limit}&offset={offset}")
}

#[cfg(any(test, feature = "hydrate"))]
fn page_endpoint(slug: &str) -> String {
    format!("{API_BASE_URL}/pages/{}", encode_segment(slug))
}

#[cfg(any(test, feature = "hydrate"))]
fn backlinks_endpoint(slug: &str) -> String {
    format!("{API_BASE_URL}/pages/{}/backlinks", encode_segment(slug))
}

#[cfg(any(test, feature = "hydrate"))]
fn tags_endpoint() -> String {
    format!("{API_BASE_URL}/tags")
}

#[cfg(any(test, feature = "hydrate"))]
fn tag_pages_endpoint(tag: &str) -> String {
    format!("{API_BASE_URL}/tags/{}/pages", encode_segment(tag))
}

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint() -> String {
    format!("{API_BASE_URL}/search")
}

#[cfg(any(test, feature = "hydrate"))]
fn plugins_endpoint() -> String {
    format!("{API_BASE_URL}/plugins")
}

#[cfg(any(test, feature = "hydrate"))]
fn plugin_schema_endpoint(metadata_type: &str) -> String {
    format!("{API_BASE_URL}/plugins/metadata/{}/schema", encode_segment(metadata_type))
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request, url: &str) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status(), url: url.to_owned() });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::Request,
    url: &str,
) -> Result<T, ApiError> {
    let resp = send(request, url).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let request = gloo_net::http::Request::get(url)
        .build()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    send_json(request, url).await
}

/// List pages via `GET /pages?limit&offset`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn list_pages(limit: u32, offset: u32) -> Result<PageList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&list_pages_endpoint(limit, offset)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (limit, offset);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page via `GET /pages/{slug}`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 404 when the slug is unknown.
pub async fn get_page(slug: &str) -> Result<Page, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&page_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(ApiError::Unavailable)
    }
}

/// Create a page via `POST /pages`. The returned page carries the slug the
/// server actually assigned.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails; 409 when the slug is taken.
pub async fn create_page(data: &PageCreate) -> Result<Page, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = pages_endpoint();
        let request = gloo_net::http::Request::post(&url)
            .json(data)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send_json(request, &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::Unavailable)
    }
}

/// Update a page via `PUT /pages/{slug}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the page does not exist.
pub async fn update_page(slug: &str, data: &PageUpdate) -> Result<Page, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = page_endpoint(slug);
        let request = gloo_net::http::Request::put(&url)
            .json(data)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send_json(request, &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slug, data);
        Err(ApiError::Unavailable)
    }
}

/// Delete a page via `DELETE /pages/{slug}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the page does not exist.
pub async fn delete_page(slug: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = page_endpoint(slug);
        let request = gloo_net::http::Request::delete(&url)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send(request, &url).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(ApiError::Unavailable)
    }
}

/// Fetch pages linking to `slug` via `GET /pages/{slug}/backlinks`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the page does not exist.
pub async fn get_backlinks(slug: &str) -> Result<PageList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&backlinks_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(ApiError::Unavailable)
    }
}

/// List all tags with page counts via `GET /tags`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn list_tags() -> Result<Vec<Tag>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&tags_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List pages carrying `tag` via `GET /tags/{tag}/pages`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn get_pages_by_tag(tag: &str) -> Result<PageList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&tag_pages_endpoint(tag)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tag;
        Err(ApiError::Unavailable)
    }
}

/// Keyword / tag / metadata-type search via `POST /search`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn search(query: &SearchQuery) -> Result<PageList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_endpoint();
        let request = gloo_net::http::Request::post(&url)
            .json(query)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        send_json(request, &url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// List installed server plugins via `GET /plugins`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn list_plugins() -> Result<Vec<Plugin>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&plugins_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a metadata plugin's field schema via
/// `GET /plugins/metadata/{type}/schema`. Unknown types yield `{}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not JSON.
pub async fn get_plugin_schema(metadata_type: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&plugin_schema_endpoint(metadata_type)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = metadata_type;
        Err(ApiError::Unavailable)
    }
}

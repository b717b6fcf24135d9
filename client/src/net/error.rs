//! Error type shared by every REST helper in `net::api`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call, surfaced to the caller unmodified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, encoding).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (SSR), where no request is issued.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

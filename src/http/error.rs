//! Client-visible error types and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Each variant carries its own status mapping instead of funneling through
/// one untyped error channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Requested count label was never seeded.
    #[error("Count id not found: {0}")]
    CountNotFound(String),

    /// No flip matches the requested id. Kept as the raw path input so the
    /// message names exactly what the client sent, numeric or not.
    #[error("Flip id not found: {0}")]
    FlipNotFound(String),

    /// No route matched the request path.
    #[error("Not found: {0}")]
    RouteNotFound(String),

    /// POST body carried no usable `data.result`.
    #[error("missing or empty result")]
    MissingResult,

    /// `data.result` names a label outside the seeded count set.
    #[error("Result not a seeded count label: {0}")]
    UnseededResult(String),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Not-found cases answer 404. The original service leaked these with
    /// the default 200; that is a defect we deliberately do not reproduce.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CountNotFound(_)
            | ApiError::FlipNotFound(_)
            | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingResult | ApiError::UnseededResult(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request failed");

        // A missing result answers with a bare 400; everything else carries
        // its plain-text message as the body.
        match self {
            ApiError::MissingResult => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

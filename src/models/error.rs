use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

/// Response error returned by every handler. The body is always `{"message": ...}`.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }

    pub fn internal(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

/// Failure of a single call to one of the upstream providers.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed payload from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the aggregation services to the request layer.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No completed (or upcoming) session could be located, even after the
    /// previous-year fallback.
    #[error("no completed race session found")]
    NoSessionFound,

    #[error(transparent)]
    UpstreamFetch(#[from] UpstreamError),

    #[error("request throttle closed: {0}")]
    Throttle(#[from] tokio::sync::AcquireError),
}

/// One session dropped from a season-wide aggregation. Logged, never returned.
#[derive(Error, Debug)]
#[error("skipping session {session_key}: {source}")]
pub struct PartialDataWarning {
    pub session_key: i64,
    #[source]
    pub source: UpstreamError,
}

//! What the collaborator clients hand back besides the domain record.
//!
//! Every collaborator call yields either the record together with an
//! [`ApiResponse`] describing the HTTP exchange, or an [`ApiError`]. The
//! response metadata is for the transport layer only; stores drop it.

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

/// Result of a single collaborator call.
pub type ApiResult<T> = Result<(T, ApiResponse), ApiError>;

/// Transport metadata of a completed request.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    /// HTTP status returned by the remote API.
    pub status: StatusCode,
    /// Raw response headers.
    pub headers: HeaderMap,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
        }
    }
}

/// Error body returned by the management APIs.
///
/// Mirrors the JSON error document both APIs emit (`error`, `errorCode`,
/// `reason`, `detail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{status} {reason} ({error_code}): {detail}")]
pub struct ApiError {
    /// HTTP status code.
    #[serde(rename = "error")]
    pub status: u16,
    /// Machine-readable error code, e.g. `CLUSTER_NOT_FOUND`.
    #[serde(default)]
    pub error_code: String,
    /// HTTP reason phrase.
    #[serde(default)]
    pub reason: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub detail: String,
}

impl ApiError {
    #[must_use]
    pub fn new(
        status: u16,
        error_code: impl Into<String>,
        reason: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            reason: reason.into(),
            detail: detail.into(),
        }
    }
}

use opsctl_core::ApiError;

use crate::capability::BackendKind;

/// Result type returned by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configured service matched no recognized mode, or the mode's
    /// backend does not offer the requested operation.
    #[error("unsupported service: {service}")]
    UnsupportedService { service: String },

    /// The management API call failed. Carries the client's error unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A recognized service was paired with the other API's client.
    #[error("service {service} cannot be served by a {backend} client")]
    BackendMismatch {
        service: String,
        backend: BackendKind,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The client factory could not build the client for the configured service.
    #[error("failed to create {backend} client: {source}")]
    Connect {
        backend: BackendKind,
        #[source]
        source: anyhow::Error,
    },
}

impl StoreError {
    pub(crate) fn unsupported(service: impl Into<String>) -> Self {
        Self::UnsupportedService {
            service: service.into(),
        }
    }

    /// The underlying API error, if this error came from a management API call.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

use crate::access::RejectReason;
use crate::logs::LogQueryError;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Every error response body: a stable `error` and free-form `details`.
///
/// `details` may carry raw process output and is not sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{error}: {details}")]
    Validation { error: &'static str, details: String },

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("{error}: {details}")]
    NotFound { error: String, details: String },

    #[error("unauthorized: {0}")]
    Unauthorized(RejectReason),

    /// An external tool failed or produced output that could not be used.
    #[error("{error}: {details}")]
    Upstream { error: String, details: String },

    #[error("{error}: {details}")]
    Internal { error: String, details: String },
}

impl ApiError {
    pub fn not_found(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::NotFound {
            error: error.into(),
            details: details.into(),
        }
    }

    pub fn upstream(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Upstream {
            error: error.into(),
            details: details.into(),
        }
    }

    pub fn internal(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Internal {
            error: error.into(),
            details: details.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            ApiError::Validation { error, details } => ((*error).to_owned(), details.clone()),
            ApiError::MethodNotAllowed => (
                "Method not allowed".to_owned(),
                "Only GET requests are supported".to_owned(),
            ),
            ApiError::Unauthorized(reason) => ("Unauthorized".to_owned(), reason.to_string()),
            ApiError::NotFound { error, details }
            | ApiError::Upstream { error, details }
            | ApiError::Internal { error, details } => (error.clone(), details.clone()),
        };
        ErrorBody { error, details }
    }
}

impl From<LogQueryError> for ApiError {
    fn from(e: LogQueryError) -> Self {
        match &e {
            LogQueryError::NotFound { .. } | LogQueryError::OutOfRange { .. } => {
                ApiError::not_found("Log source not found", e.to_string())
            }
            LogQueryError::ContainersDisabled => {
                ApiError::not_found("Container logs unavailable", e.to_string())
            }
            LogQueryError::Upstream(_) => ApiError::upstream("Failed to fetch logs", e.to_string()),
        }
    }
}

//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, abstracting over the transport error of the HTTP ports.

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request failed before the server could answer
    Transport(ApiError),
    /// Server rejected the request
    ServerError { status: u16, message: String },
    /// Failed to parse response data
    ParseError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(e) => write!(f, "Request error: {}", e),
            ServiceError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ServiceError::ParseError(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { status, message } => ServiceError::ServerError { status, message },
            ApiError::Parse(msg) => ServiceError::ParseError(msg),
            other => ServiceError::Transport(other),
        }
    }
}

impl ServiceError {
    /// Check if this is a "not found" error - the record no longer exists
    /// server-side (the stale-record path after a failed update).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::ServerError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_become_server_errors() {
        let err: ServiceError = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        }
        .into();

        assert!(matches!(err, ServiceError::ServerError { status: 404, .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn network_errors_stay_transport() {
        let err: ServiceError = ApiError::Network("connection refused".to_string()).into();
        assert!(matches!(err, ServiceError::Transport(_)));
        assert!(!err.is_not_found());
    }
}

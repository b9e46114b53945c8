//! Typed API port and the transport error shared by both API ports.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Transport-level error for the remote phonebook store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// The response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Check if this is an HTTP 404 - the record no longer exists server-side
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Typed HTTP boundary used by application services.
///
/// The generic methods make this trait not object-safe; the composition
/// root stores an object-safe [`RawApiPort`](super::RawApiPort) instead and
/// the application layer provides a typed wrapper implementing this trait.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_recognized() {
        let err = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(!ApiError::Network("timeout".to_string()).is_not_found());
    }
}

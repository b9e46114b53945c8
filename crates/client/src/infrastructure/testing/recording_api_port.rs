//! Recording mock of `RawApiPort`.
//!
//! Lets tests queue canned responses and assert the outbound requests a
//! service produced: method, path, and JSON body.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// One outbound request as the port saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<Result<Value, ApiError>>,
}

/// Recording `RawApiPort` for tests.
///
/// Responses are consumed in FIFO order; with nothing queued, a request
/// resolves to JSON `null` so delete-style calls succeed by default.
#[derive(Clone, Default)]
pub struct RecordingApiPort {
    state: Arc<Mutex<State>>,
}

impl RecordingApiPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_ok(&self, value: Value) {
        self.lock().responses.push_back(Ok(value));
    }

    pub fn enqueue_err(&self, err: ApiError) {
        self.lock().responses.push_back(Err(err));
    }

    /// Every request recorded so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock only happens in a failing test;
        // the recorded state is still worth reading then.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn roundtrip(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        state.responses.pop_front().unwrap_or(Ok(Value::Null))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for RecordingApiPort {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.roundtrip("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.roundtrip("POST", path, Some(body))
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.roundtrip("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.roundtrip("DELETE", path, None).map(|_| ())
    }
}

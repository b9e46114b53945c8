//! Typed API wrapper for application services.
//!
//! Application services are generic over an `ApiPort` trait that is not
//! object-safe (generic methods). The composition root stores an object-safe
//! port implementation (so UI and services don't depend on adapter types).
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and implements the typed `ApiPort`
//! interface via serde_json conversions.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let value = self.raw.put_json(path, &body_value).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.raw.delete(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::RecordingApiPort;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        name: String,
        number: String,
    }

    #[tokio::test]
    async fn get_decodes_typed_response() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!({ "name": "Arto Hellas", "number": "040-123456" }));
        let api = Api::new(Arc::new(raw.clone()));

        let pair: Pair = api.get("/persons/1").await.expect("get");
        assert_eq!(
            pair,
            Pair {
                name: "Arto Hellas".to_string(),
                number: "040-123456".to_string(),
            }
        );

        let requests = raw.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/persons/1");
    }

    #[tokio::test]
    async fn get_surfaces_parse_failures() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!({ "unexpected": true }));
        let api = Api::new(Arc::new(raw));

        let result: Result<Pair, ApiError> = api.get("/persons/1").await;
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn post_sends_serialized_body() {
        let raw = RecordingApiPort::new();
        raw.enqueue_ok(json!({ "name": "Ada", "number": "1" }));
        let api = Api::new(Arc::new(raw.clone()));

        let _: Pair = api
            .post("/persons", &json!({ "name": "Ada", "number": "1" }))
            .await
            .expect("post");

        let requests = raw.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].body,
            Some(json!({ "name": "Ada", "number": "1" }))
        );
    }
}

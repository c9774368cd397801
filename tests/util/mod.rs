//! Helpers for calling controllers directly from integration tests.

use axum::{body::to_bytes, response::Response};
use larder::server::model::app::AppState;
use larder_test_utils::{prelude::TEST_PUBLIC_URL, TestContext};
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to build the AppState handed to controllers
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            public_url: TEST_PUBLIC_URL.to_string(),
        }
    }
}

/// Reads a response body as raw bytes
pub async fn body_bytes(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

/// Reads a JSON response body into `T`
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    serde_json::from_slice(&body_bytes(resp).await).expect("Response body is not valid JSON")
}

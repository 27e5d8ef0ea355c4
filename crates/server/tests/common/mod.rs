//! Common test utilities for in-process API testing.
//!
//! Builds the router with a seeded static metadata provider so requests can
//! be sent with `tower::ServiceExt::oneshot`, no socket required.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bookseek_core::testing::seeded_provider;
use bookseek_core::{default_simplifier, Config, SearchConfig};
use bookseek_server::api::create_router;
use bookseek_server::state::AppState;

/// Re-export fixtures for test convenience
#[allow(unused_imports)]
pub use bookseek_core::testing::fixtures;

/// Test fixture wrapping an in-process router.
pub struct TestFixture {
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Router with `["en", "hu"]` default languages and the fixture catalog.
    pub async fn new() -> Self {
        let config = Config {
            search: SearchConfig {
                default_languages: vec!["en".to_string(), "hu".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        Self::with_config(config).await
    }

    pub async fn with_config(config: Config) -> Self {
        let provider = seeded_provider().await;
        let state = Arc::new(AppState::new(
            config,
            default_simplifier().clone(),
            Arc::new(provider),
        ));
        Self {
            router: create_router(state),
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let request_builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => request_builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => request_builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

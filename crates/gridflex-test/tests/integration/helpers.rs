#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Creating a test Salvo service over fresh in-memory stores
//! - Making HTTP requests with JSON bodies
//! - Asserting on responses
//!
//! ## Isolation
//! Every call to `create_test_service` builds new schedule and plan books,
//! so tests can run in parallel without sharing state.

use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt, TestClient};
use serde::Serialize;
use serde_json::Value;

use gridflex_test::app::state::{AppState, StateHandler};
use gridflex_test::component::config::{ConfigHandler, Settings};

pub const ICP_A: &str = "0000012345AB123";
pub const ICP_B: &str = "0000067890CD456";

/// Test configuration - static struct instead of loading from file.
fn test_config() -> Settings {
    let mut settings = Settings::defaults();
    settings.server.port = 5800;
    settings
}

/// Creates a test service with the full API and empty stores.
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_with(test_config())
}

/// Creates a test service with custom settings (matching main.rs setup).
#[must_use]
pub fn create_test_service_with(settings: Settings) -> Service {
    let router = Router::new()
        .hoop(StateHandler {
            state: AppState::default(),
        })
        .hoop(ConfigHandler::new(settings))
        .push(gridflex_test::app::api::routes());
    Service::new(router)
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets a JSON request body.
    ///
    /// ## Panics
    /// Panics if `value` cannot be serialised.
    #[must_use]
    pub fn json(mut self, value: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(value).expect("serialisable body"));
        self
    }

    /// Sets a raw request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "GET" => TestClient::get(&url),
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            _ => RequestBuilder::new(&url, self.method.clone()),
        };

        if let Some(body_bytes) = self.body {
            client = client
                .add_header("content-type", "application/json", true)
                .body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that the response body is empty.
    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body but got {} bytes",
            self.body.len()
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Expected JSON body ({e}) but got:\n{}", self.body_string()))
    }

    /// Returns the `error` message of a JSON error body.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("error body has an error string")
            .to_string()
    }
}

/// Schedule JSON as the API accepts it.
#[must_use]
pub fn schedule_json(der_type: &str, from: &str, to: &str, cron: &str) -> Value {
    serde_json::json!({ "derType": der_type, "from": from, "to": to, "cron": cron })
}

/// Plan JSON with an empty id, so the server assigns one.
#[must_use]
pub fn plan_json(name: &str, der_type: &str, cron: &str) -> Value {
    serde_json::json!({
        "name": name,
        "description": "",
        "derType": der_type,
        "schedule": { "from": "2026-01-01", "to": "2026-12-31", "cron": cron },
    })
}

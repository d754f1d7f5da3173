//! In-memory transport for exercising the client without a server.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{ApiError, Result};
use crate::transport::{RawResponse, Transport};

/// Answers by URL path (query string ignored) and records every requested URL.
/// Paths with no canned response fail with a network error.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, RawResponse>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, response: RawResponse) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.requests.borrow_mut().push(url.to_string());
        let path = url.split('?').next().unwrap_or(url);
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::Network(format!("connection refused: {}", path)))
    }
}

/// Canned responses for the four dashboard endpoints under `/api`.
pub fn dashboard_transport() -> MockTransport {
    MockTransport::new()
        .respond(
            "/api/kpis",
            RawResponse::ok(
                r#"{"total_visits": 1234, "unique_members": 310, "avg_duration_min": 47.3,
                    "total_spend_cad": 5821.5, "busiest_hour": 18}"#,
            ),
        )
        .respond(
            "/api/trend/checkins",
            RawResponse::ok(
                r#"{"data": [{"bucket": "2024-06-28", "checkins": 51},
                             {"bucket": "2024-06-29", "checkins": 64}]}"#,
            ),
        )
        .respond(
            "/api/top/classes",
            RawResponse::ok(r#"{"data": [{"class_name": "Spin", "sessions": 42}]}"#),
        )
        .respond(
            "/api/top/equipment",
            RawResponse::ok(r#"{"data": [{"equipment": "Treadmill", "uses": 97}]}"#),
        )
}

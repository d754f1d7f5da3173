//! Fake analytics API for end-to-end tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use serde_json::json;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::CliSettings;

type RequestLog = Arc<Mutex<Vec<String>>>;

/// A running fake backend. The server task lives until the test runtime ends.
pub struct FakeBackend {
    pub base_url: String,
    requests: RequestLog,
}

impl FakeBackend {
    /// Path and query of every request received so far, sorted.
    pub fn requests(&self) -> Vec<String> {
        let mut requests = self.requests.lock().unwrap().clone();
        requests.sort();
        requests
    }

    pub fn settings(&self) -> CliSettings {
        CliSettings {
            api_base: self.base_url.clone(),
            api_prefix: String::new(),
            rank_limit: 8,
            request_timeout_secs: 5,
        }
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// Honours RUST_LOG and defaults to WARN. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Serve `routes` on an ephemeral local port, logging every request.
pub async fn spawn_backend(routes: Router) -> FakeBackend {
    init_test_tracing();

    let requests = RequestLog::default();
    let app = routes.layer(middleware::from_fn_with_state(requests.clone(), record_request));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Fake backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backend stopped");
    });

    FakeBackend {
        base_url: format!("http://{}", addr),
        requests,
    }
}

async fn record_request(State(requests): State<RequestLog>, request: Request, next: Next) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    requests.lock().unwrap().push(target);
    next.run(request).await
}

/// The four dashboard endpoints plus `/health`, with canned payloads.
///
/// The endpoint named by `failing` answers 502 instead.
pub fn dashboard_routes(failing: Option<&str>) -> Router {
    let endpoint = |path: &str, ok: MethodRouter| {
        if failing == Some(path) {
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response() })
        } else {
            ok
        }
    };

    Router::new()
        .route(
            "/kpis",
            endpoint(
                "/kpis",
                get(|| async {
                    axum::Json(json!({
                        "total_visits": 1234,
                        "unique_members": 310,
                        "avg_duration_min": 47.26,
                        "total_spend_cad": 12000.0,
                        "busiest_hour": 18
                    }))
                }),
            ),
        )
        .route(
            "/trend/checkins",
            endpoint(
                "/trend/checkins",
                get(|| async {
                    axum::Json(json!({
                        "data": [
                            { "bucket": "2024-06-01", "checkins": 40 },
                            { "bucket": "2024-06-02", "checkins": 20 }
                        ]
                    }))
                }),
            ),
        )
        .route(
            "/top/classes",
            endpoint(
                "/top/classes",
                get(|| async {
                    axum::Json(json!({
                        "data": [
                            { "class_name": "Spin", "sessions": 42 },
                            { "class_name": "Yoga", "sessions": 31 }
                        ]
                    }))
                }),
            ),
        )
        .route(
            "/top/equipment",
            endpoint(
                "/top/equipment",
                get(|| async { axum::Json(json!({ "data": [{ "equipment": "Treadmill", "uses": 1097 }] })) }),
            ),
        )
        .route(
            "/health",
            endpoint("/health", get(|| async { axum::Json(json!({ "status": "ok" })) })),
        )
}

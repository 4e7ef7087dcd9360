//! Mock auth server for exercising the client without the real routes.
//!
//! Captures every request and answers from a queue, so tests can script
//! arbitrary status/body combinations.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("captured body is not JSON")
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::message(200, "Login successful")
    }
}

impl MockResponse {
    /// A `{message}` body with the given status.
    pub fn message(status: u16, message: &str) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: format!(r#"{{"message": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::message(401, message)
    }

    pub fn server_error(message: &str) -> Self {
        Self::message(500, message)
    }

    /// A success response whose body is not the expected shape.
    pub fn garbage() -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: b"not json".to_vec(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock auth server for testing.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    /// Start a new mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a response to be returned for the next request.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Clear captured requests and queued responses.
    pub async fn clear(&self) {
        self.state.requests.lock().await.clear();
        self.state.responses.lock().await.clear();
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method,
        path,
        headers,
        body: body_bytes,
    });

    let mock_resp = state.responses.lock().await.pop_front().unwrap_or_default();

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    let mut builder = Response::builder().status(StatusCode::from_u16(mock_resp.status).unwrap());

    for (name, value) in mock_resp.headers {
        builder = builder.header(name, value);
    }

    builder.body(Body::from(mock_resp.body)).unwrap()
}

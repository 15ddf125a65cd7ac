//! Integration tests for the receipt points server.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p receipt-points-integration-tests
//! ```
//!
//! Each test boots its own server on an ephemeral localhost port with a fresh
//! in-memory store, so tests never share receipts and can run in parallel.

use std::net::SocketAddr;

use receipt_points_server::{app, config::ServerConfig, state::AppState};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running server plus an HTTP client pointed at it.
pub struct TestServer {
    pub client: reqwest::Client,
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Bind to `127.0.0.1:0` and serve the full application router.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Test listener has no local address");

        let state = AppState::in_memory(ServerConfig::default());
        let router = app(state);

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            client: reqwest::Client::new(),
            addr,
            handle,
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The Target receipt from the API examples; it scores 28 points.
pub const TARGET_RECEIPT: &str = r#"{
    "retailer": "Target",
    "purchaseDate": "2022-01-01",
    "purchaseTime": "13:01",
    "items": [
        {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
        {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
        {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
        {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
        {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
    ],
    "total": "35.35"
}"#;

/// The M&M Corner Market receipt from the API examples; it scores 109 points.
pub const CORNER_MARKET_RECEIPT: &str = r#"{
    "retailer": "M&M Corner Market",
    "purchaseDate": "2022-03-20",
    "purchaseTime": "14:33",
    "items": [
        {"shortDescription": "Gatorade", "price": "2.25"},
        {"shortDescription": "Gatorade", "price": "2.25"},
        {"shortDescription": "Gatorade", "price": "2.25"},
        {"shortDescription": "Gatorade", "price": "2.25"}
    ],
    "total": "9.00"
}"#;

//! HTTP route handlers for the receipt points server.
//!
//! # Route Structure
//!
//! ```text
//! POST /receipts/process       - Score a receipt, returns {"id": "..."}
//! GET  /receipts/{id}/points   - Points for a processed receipt, returns {"points": N}
//! ```

pub mod receipts;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the receipt routes router.
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/process", post(receipts::process))
        .route("/{id}/points", get(receipts::points))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/receipts", receipt_routes())
}

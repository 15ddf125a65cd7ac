//! HTTP middleware stack for the receipt points server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, only when a DSN is configured)
//! 2. `TraceLayer` (one `http_request` span per request)
//! 3. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

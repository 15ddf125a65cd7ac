//! Receipt Points Core - Receipt types and the points scoring engine.
//!
//! This crate provides the domain pieces shared by the server and its tests:
//! - `server` - HTTP service that scores and stores receipts
//! - `integration-tests` - Black-box tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP. Scoring a receipt never fails: a field that does not parse simply
//! earns nothing under the rule that reads it.
//!
//! # Modules
//!
//! - [`types`] - Receipt wire models, receipt IDs, and amount parsing
//! - [`scoring`] - The seven points rules and their breakdown

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod scoring;
pub mod types;

pub use scoring::{PointsBreakdown, breakdown, score};
pub use types::*;

//! Core types for receipt scoring.
//!
//! This module provides the receipt wire model and type-safe wrappers for
//! receipt identifiers and monetary amounts.

pub mod amount;
pub mod id;
pub mod receipt;

pub use amount::parse_amount;
pub use id::ReceiptId;
pub use receipt::{Item, Points, Receipt, ScoredReceipt};

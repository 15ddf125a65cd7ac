//! Newtype ID for stored receipts.
//!
//! Receipt IDs are random v4 UUIDs. They carry no ordering and are only ever
//! compared for equality, so the wrapper exposes generation, parsing, and
//! display and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier handed back when a receipt is processed.
///
/// Serializes transparently as the hyphenated UUID string, e.g.
/// `"7fb1377b-b223-49d9-a31a-5a02701dd310"`.
///
/// # Example
///
/// ```rust
/// # use receipt_points_core::ReceiptId;
/// let id = ReceiptId::new();
/// let parsed: ReceiptId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for ReceiptId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ReceiptId> for Uuid {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

//! Receipt wire model.
//!
//! Every scalar field is kept as the string the client sent. Scoring decides
//! per rule whether a field parses; decoding only rejects malformed JSON or a
//! field of the wrong JSON type. Missing and `null` fields decode to empty
//! values, and a `null` entry in `items` decodes to an empty item.

use serde::{Deserialize, Deserializer, Serialize};

use super::id::ReceiptId;

/// Loyalty points awarded to a receipt.
pub type Points = u64;

/// A purchased item as printed on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short product description, e.g. `"Mountain Dew 12PK"`.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    /// Price as a decimal string, e.g. `"6.49"`.
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    /// Create an item from a description and a price string.
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted receipt.
///
/// Receipts are transient: they are scored and dropped, only the
/// resulting [`ScoredReceipt`] is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    /// Purchase date as `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    /// Purchase time as 24-hour `HH:MM`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    /// Items in the order they appear on the receipt.
    #[serde(deserialize_with = "nullable_items")]
    pub items: Vec<Item>,
    /// Total amount paid as a decimal string.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<Item>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// A receipt's points, fixed at the moment it was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub points: Points,
}

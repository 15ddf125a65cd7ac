//! Decimal parsing for receipt amounts.
//!
//! Receipt totals and item prices arrive as strings. They are parsed into
//! [`Decimal`] rather than `f64` so that checks like "is a multiple of 0.25"
//! are exact for every amount a receipt can print.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parse a receipt amount such as `"35.35"`, `"-1.5"` or `"1e2"`.
///
/// Returns `None` when the string is not a finite decimal number. Surrounding
/// whitespace is not accepted, nor are digit separators, `NaN` or infinities.
///
/// Amounts beyond [`Decimal`]'s range (about `7.9e28`) saturate to
/// [`Decimal::MAX`] or [`Decimal::MIN`]. At that magnitude every amount is a
/// whole number, so the saturated value scores the same.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.contains('_') {
        return None;
    }

    if let Ok(amount) = Decimal::from_str(raw) {
        return Some(amount);
    }

    if raw.contains(['e', 'E'])
        && let Ok(amount) = Decimal::from_scientific(raw)
    {
        return Some(amount);
    }

    saturate_out_of_range(raw)
}

/// Clamp a finite number too large for [`Decimal`] to its bounds.
fn saturate_out_of_range(raw: &str) -> Option<Decimal> {
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let limit = Decimal::MAX.to_f64()?;

    if value.abs() < limit {
        return None;
    }

    Some(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

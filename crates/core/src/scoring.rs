//! Loyalty points scoring.
//!
//! A receipt earns points under seven independent rules; its score is their
//! sum. Scoring is a pure function and never fails: a total, price, date or
//! time that does not parse just earns zero under the rules that read it.
//!
//! | Rule | Points |
//! |------|--------|
//! | Retailer name | 1 per ASCII letter or digit |
//! | Round-dollar total | 50 if the total has no cents |
//! | Quarter-multiple total | 25 if the total is a multiple of `0.25` |
//! | Item pairs | 5 per two items |
//! | Item descriptions | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | Odd purchase day | 6 if the day of the month is odd |
//! | Afternoon purchase | 10 if the purchase hour is 14 |
//!
//! Amounts use fixed-point decimal arithmetic, so `35.00` is exactly a
//! multiple of `0.25` and earns both the round-dollar and quarter bonuses.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::types::{Item, Points, Receipt, parse_amount};

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const ITEM_PAIR_POINTS: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

/// Description lengths divisible by this earn the price bonus.
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
/// Purchases in `[14:00, 15:00)` earn the afternoon bonus.
const AFTERNOON_HOUR: u32 = 14;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Points earned under each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar_total: Points,
    pub quarter_multiple_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_purchase_day: Points,
    pub afternoon_purchase: Points,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution.
    #[must_use]
    pub const fn total(&self) -> Points {
        self.retailer_name
            .saturating_add(self.round_dollar_total)
            .saturating_add(self.quarter_multiple_total)
            .saturating_add(self.item_pairs)
            .saturating_add(self.item_descriptions)
            .saturating_add(self.odd_purchase_day)
            .saturating_add(self.afternoon_purchase)
    }
}

/// Score a receipt.
///
/// # Example
///
/// ```rust
/// # use receipt_points_core::{Item, Receipt, score};
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     items: vec![Item::new("Gatorade", "2.25"); 4],
///     total: "9.00".to_string(),
/// };
/// assert_eq!(score(&receipt), 109);
/// ```
#[must_use]
pub fn score(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

/// Score a receipt rule by rule.
#[must_use]
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: total.map_or(0, round_dollar_points),
        quarter_multiple_total: total.map_or(0, quarter_multiple_points),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, Points::saturating_add),
        odd_purchase_day: odd_day_points(&receipt.purchase_date),
        afternoon_purchase: afternoon_points(&receipt.purchase_time),
    }
}

fn retailer_name_points(retailer: &str) -> Points {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    Points::try_from(count).unwrap_or(Points::MAX)
}

fn round_dollar_points(total: Decimal) -> Points {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> Points {
    let quarter = Decimal::new(25, 2);
    let is_multiple = total.fract().is_zero()
        || total.checked_rem(quarter).is_some_and(|rem| rem.is_zero());
    if is_multiple {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> Points {
    let pairs = Points::try_from(item_count / 2).unwrap_or(Points::MAX);
    pairs.saturating_mul(ITEM_PAIR_POINTS)
}

/// An empty (or all-whitespace) description has length 0, which counts as a
/// multiple of 3.
fn item_description_points(item: &Item) -> Points {
    let trimmed_len = item.short_description.trim().len();
    if trimmed_len % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        return 0;
    };

    let bonus = price
        .checked_mul(Decimal::new(2, 1))
        .map_or(Decimal::ZERO, |b| b.ceil());

    if bonus.is_sign_negative() {
        return 0;
    }
    bonus.to_u64().unwrap_or(Points::MAX)
}

fn odd_day_points(purchase_date: &str) -> Points {
    if !has_date_shape(purchase_date) {
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Only the 14:xx hour qualifies; 15:00 and later earn nothing.
fn afternoon_points(purchase_time: &str) -> Points {
    if !has_time_shape(purchase_time) {
        return 0;
    }

    match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) if time.hour() == AFTERNOON_HOUR => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// Exactly `YYYY-MM-DD`. chrono alone would also take short fields, a sign
/// or leading whitespace.
fn has_date_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `H:MM` or `HH:MM` with nothing around it.
fn has_time_shape(raw: &str) -> bool {
    let Some((hour, minute)) = raw.split_once(':') else {
        return false;
    };

    (1..=2).contains(&hour.len())
        && minute.len() == 2
        && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
}

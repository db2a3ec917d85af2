//! Daily headcount record model.
//!
//! # Responsibility
//! - Define the canonical per-day change record persisted to storage.
//! - Keep the wire shape stable for the JSON record array.
//!
//! # Invariants
//! - `date` identifies the record; at most one record exists per date.
//! - `change` accumulates every delta applied on that date.
//! - `count` is the headcount snapshot after the day's changes so far.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's accumulated headcount change.
///
/// Serialized inside the `company-headcount-records` storage key as a JSON
/// array element; `date` uses the `YYYY-MM-DD` calendar form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountRecord {
    /// Calendar day this record covers.
    pub date: NaiveDate,
    /// Headcount snapshot after all changes applied on `date`.
    pub count: u32,
    /// Signed delta accumulated across the day.
    pub change: i64,
    /// Last-update instant, epoch milliseconds.
    pub timestamp: i64,
}

impl HeadcountRecord {
    /// Creates a record for a single applied delta.
    pub fn new(date: NaiveDate, count: u32, change: i64, timestamp: i64) -> Self {
        Self {
            date,
            count,
            change,
            timestamp,
        }
    }
}

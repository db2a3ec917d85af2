//! Derived headcount statistics.
//!
//! # Responsibility
//! - Aggregate the record history into display-ready numbers.
//!
//! # Invariants
//! - Statistics are derived on demand and never persisted.
//! - `max_count`/`min_count` always include the current count, so an empty
//!   history yields `current == max == min`.

use crate::model::history::RecordHistory;
use serde::Serialize;

/// Aggregates over the record history plus the live count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadcountStatistics {
    /// Number of days with at least one recorded change.
    pub total_days: u32,
    /// Sum of positive daily deltas.
    pub total_increase: i64,
    /// Absolute sum of negative daily deltas.
    pub total_decrease: i64,
    /// Mean signed daily delta; `0.0` with no records.
    pub average_change: f64,
    /// Largest snapshot across records and the current count.
    pub max_count: u32,
    /// Smallest snapshot across records and the current count.
    pub min_count: u32,
}

impl HeadcountStatistics {
    /// Computes statistics for `history` with `current_count` live.
    pub fn compute(history: &RecordHistory, current_count: u32) -> Self {
        if history.is_empty() {
            return Self {
                total_days: 0,
                total_increase: 0,
                total_decrease: 0,
                average_change: 0.0,
                max_count: current_count,
                min_count: current_count,
            };
        }

        let mut total_increase = 0i64;
        let mut total_decrease = 0i64;
        let mut total_change = 0i64;
        let mut max_count = current_count;
        let mut min_count = current_count;

        for record in history.records() {
            if record.change > 0 {
                total_increase += record.change;
            } else {
                total_decrease += record.change.abs();
            }
            total_change += record.change;
            max_count = max_count.max(record.count);
            min_count = min_count.min(record.count);
        }

        Self {
            total_days: history.len() as u32,
            total_increase,
            total_decrease,
            average_change: total_change as f64 / history.len() as f64,
            max_count,
            min_count,
        }
    }
}

//! Capped, date-keyed record history.
//!
//! # Responsibility
//! - Own the ordering/uniqueness/cap invariants of the record list.
//! - Re-establish those invariants for data coming back from storage.
//!
//! # Invariants
//! - Records are ordered descending by date.
//! - Each date appears at most once.
//! - At most `MAX_RECORDS` entries are retained (most-recent dates win).

use crate::model::record::HeadcountRecord;
use chrono::NaiveDate;

/// Maximum number of daily records kept in the history.
pub const MAX_RECORDS: usize = 30;

/// Ordered, capped collection of daily headcount records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordHistory {
    records: Vec<HeadcountRecord>,
}

impl RecordHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from persisted records, restoring invariants.
    ///
    /// Storage content is not trusted: records are sorted descending by
    /// date, duplicate dates keep the entry with the newest `timestamp`,
    /// and the result is truncated to `MAX_RECORDS`.
    pub fn from_records(mut records: Vec<HeadcountRecord>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.timestamp.cmp(&a.timestamp)));
        records.dedup_by_key(|record| record.date);
        records.truncate(MAX_RECORDS);
        Self { records }
    }

    /// Merges an applied delta into the record for `date`.
    ///
    /// Updates the existing record for that date (accumulating `change`,
    /// overwriting `count` and `timestamp`) or inserts a new one, then
    /// restores ordering and the cap. A zero delta is ignored.
    pub fn merge(&mut self, date: NaiveDate, change: i64, count_after: u32, timestamp: i64) {
        if change == 0 {
            return;
        }

        match self.records.iter_mut().find(|record| record.date == date) {
            Some(existing) => {
                existing.change += change;
                existing.count = count_after;
                existing.timestamp = timestamp;
            }
            None => {
                self.records
                    .push(HeadcountRecord::new(date, count_after, change, timestamp));
            }
        }

        self.records.sort_by(|a, b| b.date.cmp(&a.date));
        self.records.truncate(MAX_RECORDS);
    }

    /// All records, newest date first.
    pub fn records(&self) -> &[HeadcountRecord] {
        &self.records
    }

    /// The newest-first prefix covering at most `days` records.
    pub fn recent(&self, days: usize) -> &[HeadcountRecord] {
        &self.records[..days.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordHistory, MAX_RECORDS};
    use crate::model::record::HeadcountRecord;
    use chrono::{Days, NaiveDate};

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap() + Days::new(u64::from(n))
    }

    #[test]
    fn merge_accumulates_change_for_same_date() {
        let mut history = RecordHistory::new();
        history.merge(day(1), 3, 3, 100);
        history.merge(day(1), -1, 2, 200);

        assert_eq!(history.len(), 1);
        let record = history.records()[0];
        assert_eq!(record.change, 2);
        assert_eq!(record.count, 2);
        assert_eq!(record.timestamp, 200);
    }

    #[test]
    fn merge_ignores_zero_change() {
        let mut history = RecordHistory::new();
        history.merge(day(1), 0, 5, 100);
        assert!(history.is_empty());
    }

    #[test]
    fn merge_keeps_descending_date_order() {
        let mut history = RecordHistory::new();
        history.merge(day(2), 1, 1, 100);
        history.merge(day(5), 1, 2, 200);
        history.merge(day(3), 1, 3, 300);

        let dates: Vec<_> = history.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(5), day(3), day(2)]);
    }

    #[test]
    fn merge_caps_history_at_max_records() {
        let mut history = RecordHistory::new();
        for n in 1..=(MAX_RECORDS as u32 + 5) {
            history.merge(day(n), 1, n, i64::from(n));
        }

        assert_eq!(history.len(), MAX_RECORDS);
        // Oldest dates fall off; newest survives.
        assert_eq!(history.records()[0].date, day(MAX_RECORDS as u32 + 5));
    }

    #[test]
    fn from_records_restores_invariants() {
        let records = vec![
            HeadcountRecord::new(day(1), 4, 1, 100),
            HeadcountRecord::new(day(3), 6, 2, 300),
            HeadcountRecord::new(day(1), 5, 2, 400),
        ];
        let history = RecordHistory::from_records(records);

        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].date, day(3));
        // Duplicate date keeps the newer timestamp.
        assert_eq!(history.records()[1].timestamp, 400);
        assert_eq!(history.records()[1].count, 5);
    }

    #[test]
    fn recent_returns_newest_prefix() {
        let mut history = RecordHistory::new();
        for n in 1..=10 {
            history.merge(day(n), 1, n, n as i64);
        }

        let recent = history.recent(7);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].date, day(10));

        assert_eq!(history.recent(99).len(), 10);
    }
}

//! Headcount state container.
//!
//! # Responsibility
//! - Own the current count and record history, and apply mutations.
//! - Merge every applied delta into today's record.
//! - Persist after each mutation and fall back to defaults on load.
//!
//! # Invariants
//! - The count never goes below zero (decrements are floored).
//! - Today's record reflects the accumulated delta for the calendar day.
//! - Persistence failures never corrupt or roll back in-memory state.

use crate::model::history::RecordHistory;
use crate::model::record::HeadcountRecord;
use crate::model::stats::HeadcountStatistics;
use crate::repo::headcount_repo::{HeadcountRepository, COUNT_KEY, RECORDS_KEY};
use chrono::Local;
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected store input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Increment/decrement amounts must be positive.
    ZeroAmount,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "amount must be a positive integer"),
        }
    }
}

impl Error for StoreError {}

/// Use-case store for headcount tracking.
///
/// Holds authoritative in-memory state and writes through to the
/// repository after each mutation. Writes are fire-and-forget: a storage
/// failure is logged and the in-memory state stays authoritative,
/// matching the event-driven UI model where callers never await saves.
pub struct HeadcountStore<R: HeadcountRepository> {
    repo: R,
    current_count: u32,
    history: RecordHistory,
}

impl<R: HeadcountRepository> HeadcountStore<R> {
    /// Loads a store from persisted state.
    ///
    /// Each storage key falls back independently to its default (zero
    /// count, empty history) when missing or malformed; malformed data is
    /// logged as a warning and never aborts startup.
    pub fn load(repo: R) -> Self {
        let mut store = Self {
            repo,
            current_count: 0,
            history: RecordHistory::new(),
        };
        store.reload();
        store
    }

    /// Re-reads both storage keys in place, with the same fallback
    /// semantics as [`HeadcountStore::load`].
    pub fn reload(&mut self) {
        self.current_count = match self.repo.load_count() {
            Ok(Some(count)) => count,
            Ok(None) => 0,
            Err(err) => {
                warn!(
                    "event=load module=store status=fallback key={COUNT_KEY} error={err}"
                );
                0
            }
        };

        self.history = match self.repo.load_records() {
            Ok(Some(records)) => RecordHistory::from_records(records),
            Ok(None) => RecordHistory::new(),
            Err(err) => {
                warn!(
                    "event=load module=store status=fallback key={RECORDS_KEY} error={err}"
                );
                RecordHistory::new()
            }
        };
    }

    /// Increases the count by `amount` and records the delta for today.
    ///
    /// # Errors
    /// - `StoreError::ZeroAmount` when `amount == 0`; state is unchanged.
    pub fn increment(&mut self, amount: u32) -> Result<(), StoreError> {
        self.checked_amount(amount, "increment")?;

        let old_count = self.current_count;
        self.current_count = self.current_count.saturating_add(amount);
        self.record_change(i64::from(self.current_count) - i64::from(old_count));
        self.persist();
        Ok(())
    }

    /// Decreases the count by `amount`, floored at zero.
    ///
    /// Only the ACTUALLY APPLIED delta is recorded, so decrementing 5 from
    /// a count of 3 records -3. A decrement that applies nothing records
    /// nothing.
    ///
    /// # Errors
    /// - `StoreError::ZeroAmount` when `amount == 0`; state is unchanged.
    pub fn decrement(&mut self, amount: u32) -> Result<(), StoreError> {
        self.checked_amount(amount, "decrement")?;

        let old_count = self.current_count;
        self.current_count = self.current_count.saturating_sub(amount);
        self.record_change(i64::from(self.current_count) - i64::from(old_count));
        self.persist();
        Ok(())
    }

    /// Sets the count directly, recording the delta from the prior value.
    ///
    /// A no-op (no record, no save) when `value` equals the current count.
    /// Non-negativity is enforced by the parameter type.
    pub fn set_count(&mut self, value: u32) {
        let change = i64::from(value) - i64::from(self.current_count);
        if change == 0 {
            return;
        }

        self.current_count = value;
        self.record_change(change);
        self.persist();
    }

    /// Current headcount.
    pub fn current_count(&self) -> u32 {
        self.current_count
    }

    /// All records, newest date first.
    pub fn records(&self) -> &[HeadcountRecord] {
        self.history.records()
    }

    /// The newest-first prefix covering at most `days` records.
    pub fn recent_records(&self, days: usize) -> &[HeadcountRecord] {
        self.history.recent(days)
    }

    /// Derived statistics over the history and the current count.
    pub fn statistics(&self) -> HeadcountStatistics {
        HeadcountStatistics::compute(&self.history, self.current_count)
    }

    fn checked_amount(&self, amount: u32, op: &str) -> Result<(), StoreError> {
        if amount == 0 {
            warn!("event={op} module=store status=rejected reason=zero_amount");
            return Err(StoreError::ZeroAmount);
        }
        Ok(())
    }

    fn record_change(&mut self, change: i64) {
        if change == 0 {
            return;
        }

        let now = Local::now();
        self.history
            .merge(now.date_naive(), change, self.current_count, now.timestamp_millis());
    }

    fn persist(&self) {
        if let Err(err) = self.repo.save_count(self.current_count) {
            error!("event=persist module=store status=error key={COUNT_KEY} error={err}");
        }
        if let Err(err) = self.repo.save_records(self.history.records()) {
            error!("event=persist module=store status=error key={RECORDS_KEY} error={err}");
        }
    }
}

//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level headcount operations to the UI via FRB.
//! - Keep error semantics simple for event-driven UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Mutation responses always carry the resulting count on success.

use headcount_core::db::open_db;
use headcount_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    HeadcountStore, SqliteHeadcountRepository,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const RECENT_DEFAULT_DAYS: u32 = 7;
const RECENT_DAYS_MAX: u32 = 30;
const DB_FILE_NAME: &str = "headcount.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One daily record as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    /// Calendar day in `YYYY-MM-DD` form.
    pub date: String,
    /// Headcount snapshot after the day's changes.
    pub count: u32,
    /// Signed delta accumulated across the day.
    pub change: i64,
    /// Last-update instant, epoch milliseconds.
    pub timestamp: i64,
}

/// Derived statistics as rendered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
    pub total_days: u32,
    pub total_increase: i64,
    pub total_decrease: i64,
    pub average_change: f64,
    pub max_count: u32,
    pub min_count: u32,
}

/// Mutation response envelope for headcount operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadcountActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Resulting count after the operation, when it succeeded.
    pub count: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl HeadcountActionResponse {
    fn success(message: impl Into<String>, count: u32) -> Self {
        Self {
            ok: true,
            count: Some(count),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            count: None,
            message: message.into(),
        }
    }
}

/// Read response envelope combining count, statistics and recent records.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadcountOverviewResponse {
    /// Whether the read succeeded.
    pub ok: bool,
    /// Current headcount (0 when `ok == false`).
    pub count: u32,
    /// Recent records, newest first.
    pub records: Vec<RecordView>,
    /// Derived statistics (absent when `ok == false`).
    pub statistics: Option<StatisticsView>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Increments the headcount from the UI stepper flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Rejects `amount == 0` with `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn headcount_increment(amount: u32) -> HeadcountActionResponse {
    with_store(|store| store.increment(amount).map(|()| store.current_count()))
}

/// Decrements the headcount from the UI stepper flow, floored at zero.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Rejects `amount == 0` with `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn headcount_decrement(amount: u32) -> HeadcountActionResponse {
    with_store(|store| store.decrement(amount).map(|()| store.current_count()))
}

/// Sets the headcount to an absolute value from the UI edit flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Setting the current value is a persisted no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn headcount_set(value: u32) -> HeadcountActionResponse {
    with_store(|store| {
        store.set_count(value);
        Ok(store.current_count())
    })
}

/// Reads current count, recent records and derived statistics.
///
/// Input semantics:
/// - `recent_days`: window for the records list; `None` or `0` applies the
///   default of 7, values above 30 are clamped.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn headcount_overview(recent_days: Option<u32>) -> HeadcountOverviewResponse {
    let days = normalize_recent_days(recent_days);
    let conn = match open_db(resolve_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            return HeadcountOverviewResponse {
                ok: false,
                count: 0,
                records: Vec::new(),
                statistics: None,
                message: format!("headcount_overview failed: {err}"),
            };
        }
    };

    let store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));
    let stats = store.statistics();
    HeadcountOverviewResponse {
        ok: true,
        count: store.current_count(),
        records: store
            .recent_records(days as usize)
            .iter()
            .map(to_record_view)
            .collect(),
        statistics: Some(StatisticsView {
            total_days: stats.total_days,
            total_increase: stats.total_increase,
            total_decrease: stats.total_decrease,
            average_change: stats.average_change,
            max_count: stats.max_count,
            min_count: stats.min_count,
        }),
        message: "OK".to_string(),
    }
}

fn normalize_recent_days(recent_days: Option<u32>) -> u32 {
    match recent_days {
        Some(0) | None => RECENT_DEFAULT_DAYS,
        Some(value) if value > RECENT_DAYS_MAX => RECENT_DAYS_MAX,
        Some(value) => value,
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("HEADCOUNT_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store(
    f: impl FnOnce(
        &mut HeadcountStore<SqliteHeadcountRepository<'_>>,
    ) -> Result<u32, headcount_core::StoreError>,
) -> HeadcountActionResponse {
    let conn = match open_db(resolve_db_path()) {
        Ok(conn) => conn,
        Err(err) => return HeadcountActionResponse::failure(format!("DB open failed: {err}")),
    };

    let mut store = HeadcountStore::load(SqliteHeadcountRepository::new(&conn));
    match f(&mut store) {
        Ok(count) => HeadcountActionResponse::success("OK", count),
        Err(err) => HeadcountActionResponse::failure(err.to_string()),
    }
}

fn to_record_view(record: &headcount_core::HeadcountRecord) -> RecordView {
    RecordView {
        date: record.date.to_string(),
        count: record.count,
        change: record.change,
        timestamp: record.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, headcount_decrement, headcount_increment, headcount_overview, headcount_set,
        init_logging, normalize_recent_days, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn normalize_recent_days_applies_default_and_clamp() {
        assert_eq!(normalize_recent_days(None), 7);
        assert_eq!(normalize_recent_days(Some(0)), 7);
        assert_eq!(normalize_recent_days(Some(3)), 3);
        assert_eq!(normalize_recent_days(Some(90)), 30);
    }

    // All DB-touching assertions live in one test: FRB calls share one
    // process-wide database path.
    #[test]
    fn headcount_flow_roundtrip() {
        let rejected = headcount_increment(0);
        assert!(!rejected.ok);
        assert_eq!(rejected.count, None);

        let set = headcount_set(3);
        assert!(set.ok, "{}", set.message);
        assert_eq!(set.count, Some(3));

        let up = headcount_increment(4);
        assert!(up.ok, "{}", up.message);
        assert_eq!(up.count, Some(7));

        let down = headcount_decrement(2);
        assert!(down.ok, "{}", down.message);
        assert_eq!(down.count, Some(5));

        let overview = headcount_overview(None);
        assert!(overview.ok, "{}", overview.message);
        assert_eq!(overview.count, 5);
        assert!(!overview.records.is_empty());
        let stats = overview.statistics.expect("statistics should be present");
        assert!(stats.max_count >= 5);
        assert!(stats.total_days >= 1);
    }
}

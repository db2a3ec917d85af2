//! Core domain logic for the headcount tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::history::{RecordHistory, MAX_RECORDS};
pub use model::record::HeadcountRecord;
pub use model::stats::HeadcountStatistics;
pub use repo::headcount_repo::{
    HeadcountRepository, RepoError, RepoResult, SqliteHeadcountRepository, COUNT_KEY, RECORDS_KEY,
};
pub use store::headcount_store::{HeadcountStore, StoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

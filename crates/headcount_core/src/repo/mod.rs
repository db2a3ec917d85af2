//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract used by the headcount store.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Loads report missing keys as `Ok(None)` and unparseable values as
//!   `RepoError::InvalidData`; fallback-to-default policy lives in the
//!   store, not here.

pub mod headcount_repo;

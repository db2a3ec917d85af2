//! Domain model for headcount tracking.
//!
//! # Responsibility
//! - Define the persisted record shape and the in-memory history that owns
//!   its ordering/uniqueness/cap invariants.
//! - Derive display statistics without storing them.
//!
//! # Invariants
//! - The current count is non-negative by construction (`u32`).
//! - Each calendar date appears at most once in the history.

pub mod history;
pub mod record;
pub mod stats;

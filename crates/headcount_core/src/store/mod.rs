//! Headcount store orchestration.
//!
//! # Responsibility
//! - Orchestrate mutations, history merging and persistence into the
//!   use-case API consumed by UI/FFI layers.
//! - Keep callers decoupled from storage details.

pub mod headcount_store;

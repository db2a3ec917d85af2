//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `headcount_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("headcount_core ping={}", headcount_core::ping());
    println!("headcount_core version={}", headcount_core::core_version());
}

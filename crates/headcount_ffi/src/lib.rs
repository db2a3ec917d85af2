//! FFI bridge crate for the headcount mini-program UI.

pub mod api;

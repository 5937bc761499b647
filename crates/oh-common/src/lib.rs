//! Shared utilities for the object helper crates.
//!
//! This crate provides the pieces every other crate in the workspace leans on:
//!
//! - **value**: the untyped [`Value`] that coercion functions accept
//! - **sentinel**: the minimum date used as a "no value" marker
//! - **numeric**: numeric text formatting and trimmed parsing
//! - **logging**: `tracing` subscriber setup for applications embedding the helpers

pub mod logging;
pub mod numeric;
pub mod sentinel;
pub mod value;

// Re-export commonly used items at crate root for convenience
pub use numeric::{format_numeric, parse_f64, parse_i64};
pub use sentinel::{SENTINEL_DATE_TIME, is_sentinel};
pub use value::Value;

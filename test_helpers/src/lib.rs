//! Test helpers shared across crates.
//!
//! This crate provides panic capture for asserting on contract violations,
//! log capture for asserting on the events emitted alongside them, and a
//! comparable error type for building fake outcomes.

pub mod errors;
pub mod logs;
pub mod panic;

//! The outcome container, split by concern.

mod access;
mod constructors;
mod conversions;
mod types;

pub use types::{BoxError, Outcome};

//! Helpers for asserting on panics in tests.
//!
//! Contract violations surface as panics, so tests need to run a closure,
//! observe whether it unwound, and read the message it carried.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::panic;
//!
//! let message = panic::message(|| -> u8 { panic!("boom") });
//! assert_eq!(message.as_deref(), Some("boom"));
//! assert_eq!(panic::message(|| 7), None);
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Placeholder returned when a panic payload is neither `String` nor `&str`.
pub const OPAQUE_PAYLOAD: &str = "<non-string panic payload>";

/// Runs `f`, returning its result or the message of the panic it raised.
///
/// # Errors
///
/// Returns the panic message when `f` panics.
pub fn capture<F, R>(f: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| payload_text(payload.as_ref()))
}

/// Runs `f`, returning the panic message if it panicked and `None` otherwise.
pub fn message<F, R>(f: F) -> Option<String>
where
    F: FnOnce() -> R,
{
    capture(f).err()
}

/// Extracts the text of a panic payload.
#[must_use]
pub fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<String>() {
        return text.clone();
    }
    payload
        .downcast_ref::<&str>()
        .map_or_else(|| OPAQUE_PAYLOAD.to_owned(), |text| (*text).to_owned())
}

//! Inspection and extraction.

use std::any::type_name;

use super::types::{BoxError, Outcome, State};
use crate::error::{OutcomeMisuse, raise};

impl<T, E> Outcome<T, E> {
    /// Returns the stored error of a fake outcome, or `None` for a real one.
    ///
    /// This is the only way to tell the two states apart, and the check
    /// [`Outcome::value`] expects callers to make first.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match &self.state {
            State::Real(_) => None,
            State::Fake(err) => Some(err),
        }
    }
}

impl<T, E: Into<BoxError>> Outcome<T, E> {
    /// Consumes the outcome and returns its value.
    ///
    /// Only call this after [`Outcome::error`] returned `None`.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeMisuse::FakeValue`] when the outcome is fake. The
    /// panic message includes the stored error and every error in its
    /// `source()` chain.
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::fake("test");
    /// let _ = outcome.value();
    /// ```
    #[track_caller]
    pub fn value(self) -> T {
        match self.state {
            State::Real(value) => value,
            State::Fake(err) => raise(&OutcomeMisuse::fake_value(err), type_name::<T>()),
        }
    }
}

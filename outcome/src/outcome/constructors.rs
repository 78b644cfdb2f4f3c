//! Construction paths for [`Outcome`].

use std::any::type_name;

use super::types::{Outcome, State};
use crate::error::{OutcomeMisuse, raise};

impl<T, E> Outcome<T, E> {
    /// Creates a real outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{BoxError, Outcome};
    /// let outcome: Outcome<i32, BoxError> = Outcome::real(50);
    /// assert!(outcome.error().is_none());
    /// assert_eq!(outcome.value(), 50);
    /// ```
    pub const fn real(value: T) -> Self {
        Self {
            state: State::Real(value),
        }
    }

    /// Creates a fake outcome carrying `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::fake("test");
    /// assert_eq!(outcome.error(), Some(&"test"));
    /// ```
    pub const fn fake(error: E) -> Self {
        Self {
            state: State::Fake(error),
        }
    }

    /// Creates a fake outcome from an error slot that must be filled.
    ///
    /// Use [`Outcome::fake`] when the error is already known to exist.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeMisuse::MissingError`] when `error` is `None`.
    /// No outcome is produced.
    ///
    /// ```should_panic
    /// use outcome::{BoxError, Outcome};
    /// let _outcome = Outcome::<i32, BoxError>::from_error(None);
    /// ```
    #[track_caller]
    pub fn from_error(error: Option<E>) -> Self {
        let Some(err) = error else {
            raise(&OutcomeMisuse::MissingError, type_name::<T>());
        };
        Self::fake(err)
    }

    /// Adapts a conventional `(value, error)` pair.
    ///
    /// When `error` is present the outcome is fake and `value` is dropped,
    /// whatever it holds. Otherwise the outcome is real.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    /// let real: Outcome<i32, &str> = Outcome::of(50, None);
    /// assert_eq!(real.value(), 50);
    ///
    /// let fake: Outcome<i32, &str> = Outcome::of(50, Some("boom"));
    /// assert_eq!(fake.error(), Some(&"boom"));
    /// ```
    pub fn of(value: T, error: Option<E>) -> Self {
        error.map_or_else(|| Self::real(value), Self::fake)
    }
}

//! Interop with `Result` and tuple-shaped returns.

use super::types::{Outcome, State};

impl<T, E> Outcome<T, E> {
    /// Converts the outcome into a `Result` for `?`-based code.
    ///
    /// Unlike [`Outcome::value`] this never panics.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is fake.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::fake("boom");
    /// assert_eq!(outcome.into_result(), Err("boom"));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        match self.state {
            State::Real(value) => Ok(value),
            State::Fake(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(Self::fake, Self::real)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<(T, Option<E>)> for Outcome<T, E> {
    fn from((value, error): (T, Option<E>)) -> Self {
        Self::of(value, error)
    }
}

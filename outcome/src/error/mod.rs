//! Contract-violation diagnostics raised by [`Outcome`](crate::Outcome).

mod chain;

use thiserror::Error;

use self::chain::Chain;
use crate::BoxError;

/// Misuse of an [`Outcome`](crate::Outcome) detected at runtime.
///
/// Both variants are programmer errors, not conditions to recover from. The
/// crate raises them as panics whose message is the variant's display text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutcomeMisuse {
    /// A fake outcome was requested without an error to carry.
    #[error("cannot create a fake outcome without an error (error is None)")]
    MissingError,

    /// The value of a fake outcome was extracted.
    ///
    /// The display text renders the whole `source()` chain of the stored
    /// error, outermost first.
    #[error("the outcome is fake: {}", Chain(.source))]
    FakeValue {
        /// Error stored in the outcome.
        #[source]
        source: BoxError,
    },
}

impl OutcomeMisuse {
    /// Builds [`Self::FakeValue`] from the error stored in a fake outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeMisuse;
    /// let misuse = OutcomeMisuse::fake_value("boom");
    /// assert_eq!(misuse.to_string(), "the outcome is fake: boom");
    /// ```
    #[must_use]
    pub fn fake_value(error: impl Into<BoxError>) -> Self {
        Self::FakeValue {
            source: error.into(),
        }
    }
}

/// Logs `misuse` and panics with its display text.
#[track_caller]
pub(crate) fn raise(misuse: &OutcomeMisuse, value_type: &'static str) -> ! {
    match misuse {
        OutcomeMisuse::MissingError => {
            tracing::error!(value_type, "fake outcome created without an error");
        }
        OutcomeMisuse::FakeValue { source } => {
            tracing::error!(
                error = %Chain(source),
                value_type,
                "value extracted from a fake outcome"
            );
        }
    }
    panic!("{misuse}")
}

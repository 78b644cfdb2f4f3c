//! Comparable error type for building fake outcomes in tests.

use thiserror::Error;

/// Error carrying only a message, compared by that message.
///
/// # Examples
///
/// ```
/// use outcome_test_helpers::errors::TestError;
///
/// let err = TestError::new("test");
/// assert_eq!(err.to_string(), "test");
/// assert_eq!(err, TestError::new("test"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct TestError {
    message: String,
}

impl TestError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message this error displays.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

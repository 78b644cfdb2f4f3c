//! Rendering of an error together with its `source()` chain.

use std::{fmt, iter};

use crate::BoxError;

/// Displays an error followed by each of its sources, separated by `": "`.
pub(crate) struct Chain<'a>(pub(crate) &'a BoxError);

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for cause in iter::successors(self.0.source(), |err| err.source()) {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

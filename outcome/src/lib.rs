//! Single-outcome container for fallible operations.
//!
//! An [`Outcome`] is either *real*, holding a value and no error, or *fake*,
//! holding an error and no usable value. Producers hand back one object
//! instead of a `(value, error)` pair, and consumers decide when to look at
//! the error.
//!
//! The only way to tell the two apart is [`Outcome::error`]. Extracting the
//! value of a fake outcome with [`Outcome::value`] is a programmer error and
//! panics with the stored error in the message.
//!
//! ```
//! use outcome::{BoxError, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, BoxError> {
//!     raw.parse::<u16>().map_err(BoxError::from).into()
//! }
//!
//! let port = parse_port("8080");
//! assert!(port.error().is_none());
//! assert_eq!(port.value(), 8080);
//!
//! let bad = parse_port("eighty");
//! assert!(bad.error().is_some());
//! ```

mod error;
mod outcome;

pub use error::OutcomeMisuse;
pub use outcome::{BoxError, Outcome};

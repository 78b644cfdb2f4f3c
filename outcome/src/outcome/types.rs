//! Container type and its two-state representation.

/// Boxed dynamic error, the default error slot of an [`Outcome`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result of one fallible operation.
///
/// An outcome is in exactly one of two states, fixed at construction:
///
/// * **real**: holds a value and no error;
/// * **fake**: holds an error and no value at all.
///
/// Build one with [`Outcome::real`], [`Outcome::fake`], [`Outcome::from_error`]
/// or [`Outcome::of`]. The state is private, so a fake outcome without an
/// error cannot exist.
///
/// Check [`Outcome::error`] before calling [`Outcome::value`]; extracting the
/// value of a fake outcome panics.
///
/// With the `serde` feature an outcome serializes as `{"real": value}` or
/// `{"fake": error}`.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let outcome: Outcome<u32, String> = Outcome::of(0, Some("boom".to_owned()));
/// assert_eq!(outcome.error().map(String::as_str), Some("boom"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use = "an outcome may be fake; inspect `error()` before using the value"]
pub struct Outcome<T, E = BoxError> {
    pub(super) state: State<T, E>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub(super) enum State<T, E> {
    Real(T),
    Fake(E),
}

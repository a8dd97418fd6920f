//! Numeric constraints checked at construction time.
//!
//! [`Constrained<T, C>`] pairs a value with a zero-sized marker type
//! implementing [`Constraint<T>`]. Once constructed, the value is guaranteed
//! to satisfy the marker's invariant, so downstream code can rely on it
//! without re-checking.
//!
//! Two markers cover this crate's needs:
//!
//! - [`NonNegative`]: zero or greater (e.g., a minimum approach temperature)
//! - [`StrictlyPositive`]: greater than zero (e.g., a heat-capacity flow rate)
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! new marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_pinch::support::constraint::{Constrained, StrictlyPositive};
///
/// let rate = Constrained::<f64, StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(rate.into_inner(), 2.5);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks the constraint and wraps the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

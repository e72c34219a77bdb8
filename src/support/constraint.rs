//! Type-level numeric constraints for validated inputs.
//!
//! Wing geometry and flight conditions arrive as raw numbers from users and
//! callers. The types in this module check a value once at construction and
//! carry the guarantee from then on, so the solver never has to re-check it.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (spanwise positions, wingspan)
//! - [`StrictlyPositive`]: Greater than zero (chords, velocities)
//! - [`ClosedRange<B>`]: Within the closed interval `B::MIN ≤ x ≤ B::MAX`,
//!   with the airfoil shape bounds [`CamberBounds`], [`CamberPositionBounds`],
//!   and [`ThicknessBounds`]
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! # Extending
//!
//! New ranges only need a zero-sized type implementing [`RangeBounds`].

mod closed_range;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use closed_range::{
    CamberBounds, CamberPositionBounds, ClosedRange, RangeBounds, ThicknessBounds,
};
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
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
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
    #[error("value must be finite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// Checks that a value is finite.
///
/// # Errors
///
/// Returns [`ConstraintError::NotANumber`] for `NaN` and
/// [`ConstraintError::Infinite`] for either infinity.
pub fn check_finite(value: f64) -> ConstraintResult<f64> {
    if value.is_nan() {
        Err(ConstraintError::NotANumber)
    } else if value.is_infinite() {
        Err(ConstraintError::Infinite)
    } else {
        Ok(value)
    }
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use wing_polar::support::constraint::{Constrained, StrictlyPositive};
///
/// let chord = Constrained::<_, StrictlyPositive>::new(1.5).unwrap();
/// assert_eq!(chord.into_inner(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
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

use std::marker::PhantomData;

use super::{Constrained, Constraint, ConstraintError};

/// Inclusive lower and upper limits for a [`ClosedRange`].
///
/// Implementations must satisfy `MIN ≤ MAX`.
pub trait RangeBounds {
    const MIN: f64;
    const MAX: f64;
}

/// Marker type enforcing that a value lies in `B::MIN ≤ x ≤ B::MAX`.
///
/// # Examples
///
/// ```
/// use wing_polar::support::constraint::{ClosedRange, ThicknessBounds};
///
/// let t = ClosedRange::<ThicknessBounds>::new(0.12).unwrap();
/// assert_eq!(t.into_inner(), 0.12);
///
/// assert!(ClosedRange::<ThicknessBounds>::new(0.25).is_err());
/// assert!(ClosedRange::<ThicknessBounds>::new(-0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClosedRange<B> {
    _bounds: PhantomData<B>,
}

impl<B: RangeBounds> ClosedRange<B> {
    /// Constructs a [`Constrained<f64, ClosedRange<B>>`] if the value is within bounds.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than `B::MIN`.
    /// - [`ConstraintError::AboveMaximum`] if greater than `B::MAX`.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, ClosedRange<B>>, ConstraintError> {
        Constrained::<f64, ClosedRange<B>>::new(value)
    }
}

impl<B: RangeBounds> Constraint<f64> for ClosedRange<B> {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value < B::MIN {
            Err(ConstraintError::BelowMinimum)
        } else if *value > B::MAX {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

/// Maximum camber `m` of a NACA 4-digit section, as a fraction of chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CamberBounds;

impl RangeBounds for CamberBounds {
    const MIN: f64 = 0.0;
    const MAX: f64 = 0.09;
}

/// Chordwise position `p` of maximum camber, as a fraction of chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CamberPositionBounds;

impl RangeBounds for CamberPositionBounds {
    const MIN: f64 = 0.0;
    const MAX: f64 = 0.9;
}

/// Maximum thickness `t` of a section, as a fraction of chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ThicknessBounds;

impl RangeBounds for ThicknessBounds {
    const MIN: f64 = 0.0;
    const MAX: f64 = 0.18;
}

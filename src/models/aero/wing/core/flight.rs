//! Freestream flight condition.

use thiserror::Error;
use uom::si::{
    angle::radian,
    f64::{Angle, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive, check_finite};

/// Angle of attack, freestream speed, and full wingspan for one solve.
///
/// All values are finite. The velocity is guaranteed to be strictly positive
/// and the span non-negative. A zero span is accepted here and reported by the solver as a
/// degenerate wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    alpha: Angle,
    velocity: Velocity,
    span: Length,
}

impl FlightCondition {
    /// Constructs a validated flight condition.
    ///
    /// # Errors
    ///
    /// Returns a [`FlightConditionError`] carrying the rejected value if the
    /// angle of attack is not finite, the velocity is not strictly positive and
    /// finite, or the span is negative or infinite.
    pub fn new(alpha: Angle, velocity: Velocity, span: Length) -> Result<Self, FlightConditionError> {
        let alpha = check_alpha(alpha)?;
        StrictlyPositive::new(velocity)
            .and_then(|_| check_finite(velocity.get::<meter_per_second>()))
            .map_err(|source| FlightConditionError::Velocity { velocity, source })?;
        NonNegative::new(span)
            .and_then(|_| check_finite(span.get::<meter>()))
            .map_err(|source| FlightConditionError::Span { span, source })?;

        Ok(Self {
            alpha,
            velocity,
            span,
        })
    }

    /// Constructs a flight condition without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure a finite angle of attack, a finite and strictly
    /// positive velocity, and a finite non-negative span.
    #[must_use]
    pub fn new_unchecked(alpha: Angle, velocity: Velocity, span: Length) -> Self {
        Self {
            alpha,
            velocity,
            span,
        }
    }

    /// Returns a copy of this condition at a different angle of attack.
    ///
    /// # Errors
    ///
    /// Returns [`FlightConditionError::AngleOfAttack`] if `alpha` is not finite.
    pub fn with_alpha(self, alpha: Angle) -> Result<Self, FlightConditionError> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
            ..self
        })
    }

    /// Wing angle of attack.
    #[must_use]
    pub fn alpha(&self) -> Angle {
        self.alpha
    }

    /// Freestream speed.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Full wingspan, tip to tip.
    #[must_use]
    pub fn span(&self) -> Length {
        self.span
    }

    /// Distance from the root to either tip.
    #[must_use]
    pub fn half_span(&self) -> Length {
        self.span / 2.0
    }
}

fn check_alpha(alpha: Angle) -> Result<Angle, FlightConditionError> {
    check_finite(alpha.get::<radian>())
        .map(|_| alpha)
        .map_err(|source| FlightConditionError::AngleOfAttack { alpha, source })
}

/// Errors describing a non-physical flight condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlightConditionError {
    /// The angle of attack is not finite.
    #[error("invalid angle of attack {alpha:?}")]
    AngleOfAttack {
        alpha: Angle,
        #[source]
        source: ConstraintError,
    },

    /// The freestream velocity is not strictly positive and finite.
    #[error("invalid velocity {velocity:?}")]
    Velocity {
        velocity: Velocity,
        #[source]
        source: ConstraintError,
    },

    /// The span is negative, infinite, or not a number.
    #[error("invalid span {span:?}")]
    Span {
        span: Length,
        #[source]
        source: ConstraintError,
    },

    /// The sweep at a station leaves no velocity component normal to the section.
    #[error("station {station}: sweep {sweep:?} leaves no normal velocity component")]
    NormalVelocity { station: usize, sweep: Angle },

    /// The Reynolds number at a station is not positive and finite.
    #[error("station {station}: non-physical Reynolds number {reynolds}")]
    Reynolds { station: usize, reynolds: f64 },
}

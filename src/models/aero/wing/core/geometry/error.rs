use thiserror::Error;
use uom::si::f64::{Angle, Length};

use crate::support::constraint::ConstraintError;

/// Errors describing an invalid wing geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Fewer than two sections were provided.
    #[error("at least 2 sections are required, got {count}")]
    TooFewSections { count: usize },

    /// Two sections share the same spanwise position.
    #[error("duplicate section position: y={y:?}")]
    DuplicatePosition { y: Length },

    /// A section's spanwise position is negative, infinite, or not a number.
    #[error("section {index} has an invalid spanwise position y={y:?}")]
    Position {
        /// Index of the section in the order it was provided.
        index: usize,

        /// Rejected position.
        y: Length,

        /// Violated constraint.
        source: ConstraintError,
    },

    /// An airfoil shape parameter is out of range.
    #[error("invalid {field}: {value}")]
    InvalidValue {
        /// Name of the offending parameter.
        field: &'static str,

        /// Rejected value, as a fraction of chord.
        value: f64,

        /// Violated constraint.
        source: ConstraintError,
    },

    /// A section length is out of range.
    #[error("invalid {field}: {value:?}")]
    InvalidLength {
        /// Name of the offending parameter.
        field: &'static str,

        /// Rejected value.
        value: Length,

        /// Violated constraint.
        source: ConstraintError,
    },

    /// A section angle is not finite.
    #[error("invalid {field}: {value:?}")]
    InvalidAngle {
        /// Name of the offending parameter.
        field: &'static str,

        /// Rejected value.
        value: Angle,

        /// Violated constraint.
        source: ConstraintError,
    },

    /// A section lies outboard of the wing half-span.
    #[error("section at y={y:?} lies beyond the half-span {half_span:?}")]
    BeyondHalfSpan { y: Length, half_span: Length },

    /// The spanwise grid has fewer than two stations.
    #[error("at least 2 spanwise stations are required, got {count}")]
    TooFewStations { count: usize },
}

//! Wing sections and their spanwise interpolation.

mod error;

pub use error::GeometryError;

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::support::{
    constraint::{
        CamberBounds, CamberPositionBounds, ClosedRange, NonNegative, StrictlyPositive,
        ThicknessBounds, check_finite,
    },
    numeric::{Bracket, linspace},
};

/// NACA 4-digit airfoil shape parameters.
///
/// All values are fractions of the local chord and are guaranteed to lie
/// within the ranges the section model is trained on:
/// `m ∈ [0, 0.09]`, `p ∈ [0, 0.9]`, `t ∈ [0, 0.18]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airfoil {
    camber: f64,
    camber_position: f64,
    thickness: f64,
}

impl Airfoil {
    /// Constructs a validated airfoil shape.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidValue`] naming the first parameter
    /// that is out of range.
    pub fn new(camber: f64, camber_position: f64, thickness: f64) -> Result<Self, GeometryError> {
        let camber = ClosedRange::<CamberBounds>::new(camber)
            .map_err(|source| GeometryError::InvalidValue {
                field: "camber",
                value: camber,
                source,
            })?
            .into_inner();
        let camber_position = ClosedRange::<CamberPositionBounds>::new(camber_position)
            .map_err(|source| GeometryError::InvalidValue {
                field: "camber position",
                value: camber_position,
                source,
            })?
            .into_inner();
        let thickness = ClosedRange::<ThicknessBounds>::new(thickness)
            .map_err(|source| GeometryError::InvalidValue {
                field: "thickness",
                value: thickness,
                source,
            })?
            .into_inner();

        Ok(Self {
            camber,
            camber_position,
            thickness,
        })
    }

    /// Constructs an airfoil shape without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the values are within the documented ranges.
    /// Out-of-range shapes are passed to the section model as-is.
    #[must_use]
    pub fn new_unchecked(camber: f64, camber_position: f64, thickness: f64) -> Self {
        Self {
            camber,
            camber_position,
            thickness,
        }
    }

    /// Maximum camber `m`.
    #[must_use]
    pub fn camber(&self) -> f64 {
        self.camber
    }

    /// Chordwise position of maximum camber `p`.
    #[must_use]
    pub fn camber_position(&self) -> f64 {
        self.camber_position
    }

    /// Maximum thickness `t`.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    fn blend(bracket: &Bracket, lower: &Self, upper: &Self) -> Self {
        Self {
            camber: bracket.blend(lower.camber, upper.camber),
            camber_position: bracket.blend(lower.camber_position, upper.camber_position),
            thickness: bracket.blend(lower.thickness, upper.thickness),
        }
    }
}

/// A user-defined wing section at one spanwise position.
///
/// The spanwise position `y` is measured from the root and is non-negative.
/// The chord is strictly positive. Twist is positive leading-edge up and adds
/// to the wing angle of attack. Sweep is the local quarter-chord sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    y: Length,
    chord: Length,
    twist: Angle,
    sweep: Angle,
    airfoil: Airfoil,
}

impl Section {
    /// Constructs a validated section.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidLength`] if `y` is negative or infinite
    /// or the chord is not strictly positive and finite, and
    /// [`GeometryError::InvalidAngle`] if either angle is not finite.
    pub fn new(
        y: Length,
        chord: Length,
        twist: Angle,
        sweep: Angle,
        airfoil: Airfoil,
    ) -> Result<Self, GeometryError> {
        NonNegative::new(y)
            .and_then(|_| check_finite(y.get::<meter>()))
            .map_err(|source| GeometryError::InvalidLength {
                field: "y",
                value: y,
                source,
            })?;
        StrictlyPositive::new(chord)
            .and_then(|_| check_finite(chord.get::<meter>()))
            .map_err(|source| GeometryError::InvalidLength {
                field: "chord",
                value: chord,
                source,
            })?;
        check_finite_angle("twist", twist)?;
        check_finite_angle("sweep", sweep)?;

        Ok(Self {
            y,
            chord,
            twist,
            sweep,
            airfoil,
        })
    }

    /// Constructs a section without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure `y ≥ 0` and finite angles.
    /// A zero chord is accepted and surfaces later as a degenerate wing or a
    /// non-physical Reynolds number.
    #[must_use]
    pub fn new_unchecked(
        y: Length,
        chord: Length,
        twist: Angle,
        sweep: Angle,
        airfoil: Airfoil,
    ) -> Self {
        Self {
            y,
            chord,
            twist,
            sweep,
            airfoil,
        }
    }

    /// Spanwise position from the root.
    #[must_use]
    pub fn y(&self) -> Length {
        self.y
    }

    /// Local chord.
    #[must_use]
    pub fn chord(&self) -> Length {
        self.chord
    }

    /// Geometric twist.
    #[must_use]
    pub fn twist(&self) -> Angle {
        self.twist
    }

    /// Quarter-chord sweep.
    #[must_use]
    pub fn sweep(&self) -> Angle {
        self.sweep
    }

    /// Airfoil shape.
    #[must_use]
    pub fn airfoil(&self) -> Airfoil {
        self.airfoil
    }
}

fn check_finite_angle(field: &'static str, angle: Angle) -> Result<(), GeometryError> {
    check_finite(angle.get::<radian>())
        .map(|_| ())
        .map_err(|source| GeometryError::InvalidAngle {
            field,
            value: angle,
            source,
        })
}

/// Interpolated wing geometry at one spanwise grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanwiseStation {
    /// Spanwise position from the root.
    pub y: Length,

    /// Local chord.
    pub chord: Length,

    /// Geometric twist.
    pub twist: Angle,

    /// Quarter-chord sweep.
    pub sweep: Angle,

    /// Airfoil shape.
    pub airfoil: Airfoil,
}

/// A validated, ordered set of wing sections.
///
/// Sections are sorted by spanwise position with no two at the same `y`.
/// Geometry between sections varies linearly; outside the outermost sections
/// it is held constant at the nearest section.
#[derive(Debug, Clone, PartialEq)]
pub struct Planform {
    sections: Vec<Section>,
    positions: Vec<f64>,
}

impl Planform {
    /// Sorts and validates a set of sections.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if fewer than two sections are given, a
    /// position is negative, infinite, or `NaN`, or two sections share a position.
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, GeometryError> {
        let mut sections: Vec<Section> = sections.into_iter().collect();

        if sections.len() < 2 {
            return Err(GeometryError::TooFewSections {
                count: sections.len(),
            });
        }

        for (index, section) in sections.iter().enumerate() {
            NonNegative::new(section.y)
                .and_then(|_| check_finite(section.y.get::<meter>()))
                .map_err(|source| GeometryError::Position {
                    index,
                    y: section.y,
                    source,
                })?;
        }

        sections.sort_by(|a, b| a.y.get::<meter>().total_cmp(&b.y.get::<meter>()));

        if let Some(pair) = sections.windows(2).find(|pair| pair[0].y == pair[1].y) {
            return Err(GeometryError::DuplicatePosition { y: pair[0].y });
        }

        let positions = sections.iter().map(|s| s.y.get::<meter>()).collect();

        Ok(Self {
            sections,
            positions,
        })
    }

    /// Sections ordered from root to tip.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Checks that no section lies outboard of the half-span.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::BeyondHalfSpan`] for the outermost offending section.
    pub fn check_half_span(&self, half_span: Length) -> Result<(), GeometryError> {
        match self.sections.last() {
            Some(tip) if tip.y > half_span => Err(GeometryError::BeyondHalfSpan {
                y: tip.y,
                half_span,
            }),
            _ => Ok(()),
        }
    }

    /// Interpolates the geometry at a spanwise position.
    #[must_use]
    pub fn station_at(&self, y: Length) -> SpanwiseStation {
        let bracket = Bracket::locate(&self.positions, y.get::<meter>());
        let lower = &self.sections[bracket.lower];
        let upper = &self.sections[bracket.upper];

        let angle = |a: Angle, b: Angle| {
            Angle::new::<radian>(bracket.blend(a.get::<radian>(), b.get::<radian>()))
        };

        SpanwiseStation {
            y,
            chord: Length::new::<meter>(
                bracket.blend(lower.chord.get::<meter>(), upper.chord.get::<meter>()),
            ),
            twist: angle(lower.twist, upper.twist),
            sweep: angle(lower.sweep, upper.sweep),
            airfoil: Airfoil::blend(&bracket, &lower.airfoil, &upper.airfoil),
        }
    }

    /// Interpolates the geometry onto an ordered spanwise grid.
    #[must_use]
    pub fn interpolate(&self, grid: &[Length]) -> Vec<SpanwiseStation> {
        grid.iter().map(|&y| self.station_at(y)).collect()
    }
}

/// Builds a uniform grid of `stations` points from the root to the half-span.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewStations`] if fewer than two points are requested.
pub fn spanwise_grid(half_span: Length, stations: usize) -> Result<Vec<Length>, GeometryError> {
    if stations < 2 {
        return Err(GeometryError::TooFewStations { count: stations });
    }

    Ok(linspace(0.0, half_span.get::<meter>(), stations)
        .into_iter()
        .map(Length::new::<meter>)
        .collect())
}

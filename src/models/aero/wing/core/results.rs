//! Result types for wing solving.

use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Angle, Area},
};

use super::{SpanwiseStation, StationResult};

/// Global force coefficients and planform metrics of a wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingPolar {
    /// Planform area of the full wing.
    pub area: Area,

    /// Aspect ratio, `span² / area`.
    pub aspect_ratio: f64,

    /// Lift coefficient.
    pub cl: f64,

    /// Profile drag coefficient.
    pub cd_profile: f64,

    /// Induced drag coefficient.
    pub cd_induced: f64,

    /// Total drag coefficient, `cd_profile + cd_induced`.
    pub cd: f64,
}

impl WingPolar {
    /// Lift-to-drag ratio.
    #[must_use]
    pub fn lift_to_drag(&self) -> f64 {
        self.cl / self.cd
    }
}

/// Formats the polar as a fixed-precision report.
impl fmt::Display for WingPolar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wing Area S  : {:.3} m^2", self.area.get::<square_meter>())?;
        writeln!(f, "Aspect Ratio : {:.2}", self.aspect_ratio)?;
        writeln!(f, "CL           : {:.4}", self.cl)?;
        writeln!(f, "CDp          : {:.5}", self.cd_profile)?;
        writeln!(f, "CDi          : {:.5}", self.cd_induced)?;
        write!(f, "CD Total     : {:.5}", self.cd)
    }
}

/// A wing polar with the spanwise distributions it was integrated from.
///
/// `stations` and `results` are aligned and ordered from root (0) to tip.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanResults {
    /// Global coefficients.
    pub polar: WingPolar,

    /// Interpolated geometry at each spanwise station.
    pub stations: Vec<SpanwiseStation>,

    /// Local flow and loads at each spanwise station.
    pub results: Vec<StationResult>,
}

/// A wing trimmed to a target lift coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivenClSolution {
    /// Angle of attack that achieves the target.
    pub alpha: Angle,

    /// Wing polar at that angle of attack.
    pub polar: WingPolar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_fixed_precision() {
        let polar = WingPolar {
            area: Area::new::<square_meter>(7.8),
            aspect_ratio: 36.0 / 7.8,
            cl: 0.5,
            cd_profile: 0.02,
            cd_induced: 0.020_284,
            cd: 0.040_284,
        };

        let text = polar.to_string();
        assert!(text.contains("Wing Area S  : 7.800 m^2"));
        assert!(text.contains("Aspect Ratio : 4.62"));
        assert!(text.contains("CL           : 0.5000"));
        assert!(text.contains("CDi          : 0.02028"));
        assert!(text.ends_with("CD Total     : 0.04028"));
    }

    #[test]
    fn lift_to_drag_ratio() {
        let polar = WingPolar {
            area: Area::new::<square_meter>(9.0),
            aspect_ratio: 4.0,
            cl: 0.6,
            cd_profile: 0.01,
            cd_induced: 0.02,
            cd: 0.03,
        };

        assert!((polar.lift_to_drag() - 20.0).abs() < 1e-12);
    }
}

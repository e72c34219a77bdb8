use std::{
    convert::Infallible,
    f64::consts::{PI, TAU},
};

use crate::support::numeric::{linspace, trapezoid};

use super::{SectionFeatures, SectionModel};

/// Number of intervals used for the thin-airfoil camber integral.
const CAMBER_INTEGRAL_INTERVALS: usize = 400;

/// Tuning parameters for [`ThinAirfoilModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinAirfoilConfig {
    /// Section lift curve slope, per radian.
    pub lift_slope: f64,

    /// Reynolds number at which the boundary layer is taken as fully turbulent.
    pub transition_reynolds: f64,

    /// Lift-dependent profile drag factor `k` in `k Cl²`.
    pub lift_drag_factor: f64,
}

impl Default for ThinAirfoilConfig {
    fn default() -> Self {
        Self {
            lift_slope: TAU,
            transition_reynolds: 5e5,
            lift_drag_factor: 0.0075,
        }
    }
}

/// Analytic section model for NACA 4-digit airfoils.
///
/// Lift follows thin-airfoil theory, `Cl = a₀ (α − α_L0)`, where the zero-lift
/// angle `α_L0` is integrated from the NACA mean line slope.
/// Profile drag is twice the flat-plate skin friction (laminar Blasius below
/// the transition Reynolds number, turbulent `0.074 Re^-0.2` above), scaled by
/// the thickness form factor `1 + 2t + 60t⁴`, plus a lift-dependent term.
///
/// The model has no stall and never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThinAirfoilModel {
    config: ThinAirfoilConfig,
}

impl ThinAirfoilModel {
    /// Creates a model with custom tuning.
    #[must_use]
    pub fn new(config: ThinAirfoilConfig) -> Self {
        Self { config }
    }

    /// Zero-lift angle of a NACA 4-digit mean line, in radians.
    ///
    /// Evaluates `α_L0 = −(1/π) ∫₀^π (dz/dx)(cos θ − 1) dθ` with
    /// `x = (1 − cos θ)/2`. Uncambered sections (`m = 0` or `p = 0`) return zero.
    #[must_use]
    pub fn zero_lift_angle(camber: f64, camber_position: f64) -> f64 {
        if camber <= 0.0 || camber_position <= 0.0 {
            return 0.0;
        }

        let thetas = linspace(0.0, PI, CAMBER_INTEGRAL_INTERVALS + 1);
        let integrand: Vec<f64> = thetas
            .iter()
            .map(|&theta| {
                let x = 0.5 * (1.0 - theta.cos());
                mean_line_slope(camber, camber_position, x) * (theta.cos() - 1.0)
            })
            .collect();

        -trapezoid(&thetas, &integrand) / PI
    }

    fn skin_friction(&self, reynolds: f64) -> f64 {
        if reynolds < self.config.transition_reynolds {
            1.328 / reynolds.sqrt()
        } else {
            0.074 / reynolds.powf(0.2)
        }
    }
}

/// Slope `dz/dx` of the NACA 4-digit mean line at chordwise position `x`.
fn mean_line_slope(m: f64, p: f64, x: f64) -> f64 {
    if x < p {
        2.0 * m / (p * p) * (p - x)
    } else {
        2.0 * m / ((1.0 - p) * (1.0 - p)) * (p - x)
    }
}

impl SectionModel for ThinAirfoilModel {
    type Error = Infallible;

    fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        let alpha = features.aoa_deg.to_radians();
        let alpha_zero_lift = Self::zero_lift_angle(features.camber, features.camber_position);
        Ok(self.config.lift_slope * (alpha - alpha_zero_lift))
    }

    fn predict_cd(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        let t = features.thickness;
        let form_factor = 1.0 + 2.0 * t + 60.0 * t.powi(4);
        let friction = 2.0 * self.skin_friction(features.reynolds()) * form_factor;

        let cl = self.predict_cl(features)?;
        Ok(friction + self.config.lift_drag_factor * cl * cl)
    }
}

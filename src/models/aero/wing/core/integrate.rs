//! Spanwise integration of station loads into wing coefficients.

use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    area::square_meter,
    f64::{Angle, Area, Length, Pressure},
    length::meter,
    pressure::pascal,
};

use crate::support::numeric::trapezoid;

use super::{InducedDragSweep, SolveError, SolverConfig, SpanwiseStation, StationResult, WingPolar};

/// Integrates half-span distributions into full-wing coefficients.
///
/// The wing is assumed symmetric about the root, so every half-span integral
/// is doubled. Integrals use the trapezoidal rule on the station grid.
#[derive(Debug, Clone, Copy)]
pub struct SpanIntegrator {
    oswald_efficiency: f64,
    induced_drag_sweep: InducedDragSweep,
    dynamic_pressure: Pressure,
}

impl SpanIntegrator {
    /// Creates an integrator for the given solver settings and dynamic pressure.
    #[must_use]
    pub fn new(config: &SolverConfig, dynamic_pressure: Pressure) -> Self {
        Self {
            oswald_efficiency: config.oswald_efficiency,
            induced_drag_sweep: config.induced_drag_sweep,
            dynamic_pressure,
        }
    }

    /// Planform area of the full wing, `2 ∫ c dy` over the half-span.
    #[must_use]
    pub fn planform_area(stations: &[SpanwiseStation]) -> Area {
        let ys = positions(stations);
        let chords: Vec<f64> = stations.iter().map(|s| s.chord.get::<meter>()).collect();
        Area::new::<square_meter>(2.0 * trapezoid(&ys, &chords))
    }

    /// Checks that the planform has positive area and aspect ratio.
    ///
    /// Returns the aspect ratio on success.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegenerateWing`] if either value is not positive and finite.
    pub fn check_planform(area: Area, span: Length) -> Result<f64, SolveError> {
        let s = area.get::<square_meter>();
        let b = span.get::<meter>();
        let aspect_ratio = b * b / s;

        let usable = |value: f64| value.is_finite() && value > 0.0;
        if usable(s) && usable(aspect_ratio) {
            Ok(aspect_ratio)
        } else {
            Err(SolveError::DegenerateWing { area, aspect_ratio })
        }
    }

    /// Integrates aligned stations and results into a wing polar.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegenerateWing`] if the planform area or aspect
    /// ratio is not positive and finite.
    pub fn integrate(
        &self,
        stations: &[SpanwiseStation],
        results: &[StationResult],
        span: Length,
    ) -> Result<WingPolar, SolveError> {
        debug_assert_eq!(stations.len(), results.len(), "stations and results must align");

        let area = Self::planform_area(stations);
        let aspect_ratio = Self::check_planform(area, span)?;

        let ys = positions(stations);
        let lift_per_span: Vec<f64> = results.iter().map(|r| r.lift_per_span.value).collect();
        let drag_per_span: Vec<f64> = results.iter().map(|r| r.drag_per_span.value).collect();

        let lift = 2.0 * trapezoid(&ys, &lift_per_span);
        let drag = 2.0 * trapezoid(&ys, &drag_per_span);

        let q_s = self.dynamic_pressure.get::<pascal>() * area.get::<square_meter>();
        let cl = lift / q_s;
        let cd_profile = drag / q_s;

        let cos_sweep = self.reference_sweep(stations, &ys).get::<radian>().cos();
        let cd_induced =
            cl * cl / (PI * aspect_ratio * self.oswald_efficiency * cos_sweep * cos_sweep);

        Ok(WingPolar {
            area,
            aspect_ratio,
            cl,
            cd_profile,
            cd_induced,
            cd: cd_profile + cd_induced,
        })
    }

    fn reference_sweep(&self, stations: &[SpanwiseStation], ys: &[f64]) -> Angle {
        let zero = Angle::new::<radian>(0.0);
        match self.induced_drag_sweep {
            InducedDragSweep::Tip => stations.last().map_or(zero, |s| s.sweep),
            InducedDragSweep::Root => stations.first().map_or(zero, |s| s.sweep),
            InducedDragSweep::Mean => {
                let sweeps: Vec<f64> = stations.iter().map(|s| s.sweep.get::<radian>()).collect();
                let extent = ys.last().copied().unwrap_or(0.0) - ys.first().copied().unwrap_or(0.0);
                if extent > 0.0 {
                    Angle::new::<radian>(trapezoid(ys, &sweeps) / extent)
                } else {
                    zero
                }
            }
            InducedDragSweep::Unswept => zero,
        }
    }
}

fn positions(stations: &[SpanwiseStation]) -> Vec<f64> {
    stations.iter().map(|s| s.y.get::<meter>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    use crate::models::aero::wing::core::{
        Planform, spanwise_grid,
        test_support::{section, swept_section},
    };
    use crate::support::units::ForcePerLength;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn q() -> Pressure {
        Pressure::new::<pascal>(1000.0)
    }

    /// Results with a constant section lift and drag coefficient.
    fn uniform_results(stations: &[SpanwiseStation], cl: f64, cd: f64) -> Vec<StationResult> {
        stations
            .iter()
            .map(|s| {
                let q_chord: ForcePerLength = q() * s.chord;
                StationResult {
                    alpha_eff: Angle::new::<degree>(0.0),
                    reynolds: 1e6,
                    cl,
                    cd,
                    lift_per_span: q_chord * cl,
                    drag_per_span: q_chord * cd,
                }
            })
            .collect()
    }

    fn tapered_stations(n: usize) -> Vec<SpanwiseStation> {
        let planform = Planform::new([section(0.0, 2.0, 0.0), section(3.0, 1.0, 0.0)]).unwrap();
        planform.interpolate(&spanwise_grid(m(3.0), n).unwrap())
    }

    #[test]
    fn linear_taper_area_is_exact() {
        // Root chord 2 m, tip chord 1 m, half-span 3 m: S = 2 · (2 + 1)/2 · 3.
        let area = SpanIntegrator::planform_area(&tapered_stations(13));
        assert_relative_eq!(area.get::<square_meter>(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_section_coefficients_pass_through() {
        let stations = tapered_stations(25);
        let results = uniform_results(&stations, 0.7, 0.012);

        let polar = SpanIntegrator::new(&SolverConfig::default(), q())
            .integrate(&stations, &results, m(6.0))
            .unwrap();

        assert_relative_eq!(polar.aspect_ratio, 4.0, epsilon = 1e-12);
        assert_relative_eq!(polar.cl, 0.7, epsilon = 1e-12);
        assert_relative_eq!(polar.cd_profile, 0.012, epsilon = 1e-12);
        assert_relative_eq!(
            polar.cd_induced,
            0.49 / (PI * 4.0 * 0.85),
            epsilon = 1e-12
        );
        assert_relative_eq!(polar.cd, polar.cd_profile + polar.cd_induced);
    }

    #[test]
    fn induced_drag_uses_configured_reference_sweep() {
        let planform = Planform::new([
            swept_section(0.0, 2.0, 0.0, 0.0),
            swept_section(3.0, 1.0, 0.0, 60.0),
        ])
        .unwrap();
        let stations = planform.interpolate(&spanwise_grid(m(3.0), 31).unwrap());
        let results = uniform_results(&stations, 0.5, 0.01);

        let polar_for = |induced_drag_sweep| {
            let config = SolverConfig {
                induced_drag_sweep,
                ..SolverConfig::default()
            };
            SpanIntegrator::new(&config, q())
                .integrate(&stations, &results, m(6.0))
                .unwrap()
        };

        let unswept = polar_for(InducedDragSweep::Unswept);
        let root = polar_for(InducedDragSweep::Root);
        let tip = polar_for(InducedDragSweep::Tip);
        let mean = polar_for(InducedDragSweep::Mean);

        assert_relative_eq!(root.cd_induced, unswept.cd_induced, epsilon = 1e-15);
        // Tip sweep of 60° divides by cos² = 0.25.
        assert_relative_eq!(tip.cd_induced, 4.0 * unswept.cd_induced, max_relative = 1e-9);
        // Mean sweep of 30° divides by cos² = 0.75.
        assert_relative_eq!(
            mean.cd_induced,
            unswept.cd_induced / 0.75,
            max_relative = 1e-9
        );
        assert_relative_eq!(tip.cd_profile, unswept.cd_profile);
    }

    #[test]
    fn zero_chord_is_degenerate() {
        let stations: Vec<SpanwiseStation> = tapered_stations(5)
            .into_iter()
            .map(|s| SpanwiseStation { chord: m(0.0), ..s })
            .collect();
        let results = uniform_results(&stations, 0.5, 0.01);

        let result =
            SpanIntegrator::new(&SolverConfig::default(), q()).integrate(&stations, &results, m(6.0));
        assert!(matches!(result, Err(SolveError::DegenerateWing { .. })));
    }

    #[test]
    fn zero_span_is_degenerate() {
        let area = Area::new::<square_meter>(9.0);
        assert!(matches!(
            SpanIntegrator::check_planform(area, m(0.0)),
            Err(SolveError::DegenerateWing { aspect_ratio, .. }) if aspect_ratio == 0.0
        ));
    }
}

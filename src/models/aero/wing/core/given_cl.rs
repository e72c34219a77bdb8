//! Iterative solver for a target lift coefficient.
//!
//! This module trims a wing by varying the angle of attack until the
//! integrated lift coefficient converges to the desired value.

mod config;
mod error;
mod problem;

pub use config::GivenClConfig;
pub use error::GivenClError;

use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        angle::degree,
        f64::{Angle, Length, Velocity},
    },
};

use crate::support::section_model::SectionModel;

use super::{FlightCondition, GivenClSolution, Section, SolveError, SolverConfig};

use problem::{GivenClModel, GivenClProblem};

/// Finds the angle of attack at which a wing produces a target lift coefficient.
///
/// Both ends of the alpha bracket are solved first so that geometry errors and
/// unreachable targets are reported directly. Bisection then narrows the
/// bracket until the lift residual or the angle tolerance is met.
///
/// # Errors
///
/// Returns [`GivenClError`] on wing solve failures, a target outside the lift
/// range of the bracket, or if the solver fails to converge. A wing solve
/// failure at any angle, bracket end or midpoint, is [`GivenClError::Solve`].
pub(super) fn given_cl<M: SectionModel>(
    sections: &[Section],
    velocity: Velocity,
    span: Length,
    target_cl: f64,
    solver_config: &SolverConfig,
    config: GivenClConfig,
    model: &M,
) -> Result<GivenClSolution, GivenClError> {
    let flight = FlightCondition::new(Angle::ZERO, velocity, span).map_err(SolveError::from)?;
    let wing = GivenClModel::new(sections, flight, solver_config, model);
    let problem = GivenClProblem::new(target_cl);

    let bracket = config.bracket();
    let lower_cl = wing.call(&Angle::new::<degree>(bracket[0]))?.polar.cl;
    let upper_cl = wing.call(&Angle::new::<degree>(bracket[1]))?.polar.cl;

    if !target_cl.is_finite() || (lower_cl - target_cl) * (upper_cl - target_cl) > 0.0 {
        return Err(GivenClError::Target {
            target_cl,
            lower_cl,
            upper_cl,
        });
    }

    let solution = bisection::solve_unobserved(&wing, &problem, bracket, &config.bisection())?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenClError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    log::debug!(
        "trimmed to CL={target_cl}: alpha={:.6} deg after {} iterations",
        solution.snapshot.output.alpha.get::<degree>(),
        solution.iters,
    );

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, velocity::meter_per_second};

    use crate::models::aero::wing::core::{
        GeometryError, PredictionError,
        solve::solve,
        test_support::{LinearLiftModel, StubError, flight, section},
    };
    use crate::support::section_model::{SectionFeatures, ThinAirfoilModel};

    /// Linear lift that fails for incidences inside a band.
    struct BandFailingModel {
        band: [f64; 2],
    }

    impl SectionModel for BandFailingModel {
        type Error = StubError;

        fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
            if (self.band[0]..=self.band[1]).contains(&features.aoa_deg) {
                Err(StubError)
            } else {
                Ok(0.1 * features.aoa_deg)
            }
        }

        fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
            Ok(0.01)
        }
    }

    fn speed() -> Velocity {
        Velocity::new::<meter_per_second>(40.0)
    }

    fn span() -> Length {
        Length::new::<meter>(6.0)
    }

    fn rectangular() -> [Section; 2] {
        [section(0.0, 1.5, 0.0), section(3.0, 1.5, 0.0)]
    }

    #[test]
    fn linear_lift_trims_exactly() {
        // CL = 0.1 per degree of incidence.
        let model = LinearLiftModel::new(0.1, 0.01);

        let trimmed = given_cl(
            &rectangular(),
            speed(),
            span(),
            0.65,
            &SolverConfig::default(),
            GivenClConfig::default(),
            &model,
        )
        .expect("trim should converge");

        assert_relative_eq!(trimmed.alpha.get::<degree>(), 6.5, epsilon = 1e-8);
        assert_relative_eq!(trimmed.polar.cl, 0.65, epsilon = 1e-9);
    }

    #[test]
    fn trimmed_alpha_reproduces_target_in_a_plain_solve() {
        let sections = [section(0.0, 2.0, 1.0), section(3.0, 1.0, -2.0)];
        let model = ThinAirfoilModel::default();
        let config = SolverConfig::default();

        let trimmed = given_cl(
            &sections,
            speed(),
            span(),
            0.4,
            &config,
            GivenClConfig::default(),
            &model,
        )
        .expect("trim should converge");

        let check = solve(
            &sections,
            &flight(trimmed.alpha.get::<degree>(), 40.0, 6.0),
            &config,
            &model,
        )
        .unwrap();

        assert_relative_eq!(check.polar.cl, 0.4, epsilon = 1e-9);
        assert_relative_eq!(check.polar.cd, trimmed.polar.cd, max_relative = 1e-9);
    }

    #[test]
    fn rejects_unreachable_target() {
        let model = LinearLiftModel::new(0.1, 0.01);

        let result = given_cl(
            &rectangular(),
            speed(),
            span(),
            5.0,
            &SolverConfig::default(),
            GivenClConfig::default(),
            &model,
        );

        match result {
            Err(GivenClError::Target {
                lower_cl, upper_cl, ..
            }) => {
                assert_relative_eq!(lower_cl, -1.0, epsilon = 1e-12);
                assert_relative_eq!(upper_cl, 2.0, epsilon = 1e-12);
            }
            other => panic!("Expected Target, got: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_target() {
        let result = given_cl(
            &rectangular(),
            speed(),
            span(),
            f64::NAN,
            &SolverConfig::default(),
            GivenClConfig::default(),
            &LinearLiftModel::new(0.1, 0.01),
        );

        assert!(matches!(result, Err(GivenClError::Target { .. })));
    }

    #[test]
    fn reports_iteration_limit() {
        let config = GivenClConfig {
            max_iters: 3,
            ..GivenClConfig::default()
        };

        let result = given_cl(
            &rectangular(),
            speed(),
            span(),
            0.37,
            &SolverConfig::default(),
            config,
            &LinearLiftModel::new(0.1, 0.01),
        );

        assert!(matches!(result, Err(GivenClError::MaxIters { .. })));
    }

    #[test]
    fn surfaces_geometry_errors() {
        let result = given_cl(
            &[section(0.0, 1.5, 0.0)],
            speed(),
            span(),
            0.5,
            &SolverConfig::default(),
            GivenClConfig::default(),
            &LinearLiftModel::new(0.1, 0.01),
        );

        assert!(matches!(
            result,
            Err(GivenClError::Solve(SolveError::InvalidGeometry(
                GeometryError::TooFewSections { count: 1 }
            )))
        ));
    }

    #[test]
    fn midpoint_solve_failures_are_not_boxed() {
        // The first midpoint of the default bracket is 5 degrees.
        let model = BandFailingModel { band: [4.0, 6.0] };

        let result = given_cl(
            &rectangular(),
            speed(),
            span(),
            0.3,
            &SolverConfig::default(),
            GivenClConfig::default(),
            &model,
        );

        assert!(
            matches!(
                result,
                Err(GivenClError::Solve(SolveError::ModelPrediction(
                    PredictionError::Failed { .. }
                )))
            ),
            "{result:?}"
        );
    }
}

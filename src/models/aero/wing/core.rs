//! Strip-theory wing analysis.
//!
//! A wing is described by a sparse set of [`Section`]s from the root outward.
//! The solver interpolates them onto a uniform half-span grid, evaluates a
//! [`SectionModel`] at every station with a simple sweep correction, and
//! integrates the loads into planform area, aspect ratio, and lift and drag
//! coefficients. Induced drag comes from an Oswald efficiency factor.

mod config;
mod flight;
mod geometry;
mod given_cl;
mod integrate;
mod results;
mod solve;
mod station;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, InducedDragSweep, SolverConfig};
pub use flight::{FlightCondition, FlightConditionError};
pub use geometry::{Airfoil, GeometryError, Planform, Section, SpanwiseStation, spanwise_grid};
pub use given_cl::{GivenClConfig, GivenClError};
pub use integrate::SpanIntegrator;
pub use results::{GivenClSolution, SpanResults, WingPolar};
pub use solve::{PredictionError, SolveError};
pub use station::{StationEvaluator, StationResult};

use uom::si::f64::{Length, Velocity};

use crate::support::section_model::SectionModel;

use given_cl::given_cl;
use solve::solve;

/// Entry point for solving wings with a fixed section model.
///
/// The section model is injected once and only read afterwards, so a solver
/// can be shared freely between independent solves.
#[derive(Debug, Clone)]
pub struct WingSolver<M> {
    model: M,
    config: SolverConfig,
}

impl<M: SectionModel> WingSolver<M> {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_config(model, SolverConfig::default())
    }

    /// Creates a solver with a custom configuration.
    #[must_use]
    pub fn with_config(model: M, config: SolverConfig) -> Self {
        Self { model, config }
    }

    /// Solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Section model used for every station.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Solves a wing for a single flight condition.
    ///
    /// Sections may be given in any order.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] on an invalid configuration or geometry, a
    /// non-physical flight condition, section model failures, or a degenerate
    /// planform.
    pub fn solve(
        &self,
        sections: &[Section],
        flight: &FlightCondition,
    ) -> Result<WingPolar, SolveError> {
        Ok(self.analyze(sections, flight)?.polar)
    }

    /// Solves a wing and returns the spanwise distributions with the polar.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] on an invalid configuration or geometry, a
    /// non-physical flight condition, section model failures, or a degenerate
    /// planform.
    pub fn analyze(
        &self,
        sections: &[Section],
        flight: &FlightCondition,
    ) -> Result<SpanResults, SolveError> {
        solve(sections, flight, &self.config, &self.model)
    }

    /// Finds the angle of attack at which the wing reaches a target lift coefficient.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenClError`] on wing solve failures, an unreachable
    /// target, or if the solver fails to converge.
    pub fn given_cl(
        &self,
        sections: &[Section],
        velocity: Velocity,
        span: Length,
        target_cl: f64,
        config: GivenClConfig,
    ) -> Result<GivenClSolution, GivenClError> {
        given_cl(
            sections,
            velocity,
            span,
            target_cl,
            &self.config,
            config,
            &self.model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, length::meter, velocity::meter_per_second};

    use crate::support::section_model::ThinAirfoilModel;

    use super::test_support::{ConstantModel, LinearLiftModel, flight, section};

    #[test]
    fn solve_and_analyze_agree() {
        let solver = WingSolver::new(ThinAirfoilModel::default());
        let sections = [section(0.0, 1.5, 0.0), section(2.0, 1.2, -1.0)];
        let flight = flight(5.0, 40.0, 6.0);

        let polar = solver.solve(&sections, &flight).unwrap();
        let analysis = solver.analyze(&sections, &flight).unwrap();

        assert_eq!(polar, analysis.polar);
        assert_eq!(analysis.stations.len(), solver.config().stations);
        assert!(polar.cl > 0.0);
        assert!(polar.cd > polar.cd_profile);
    }

    #[test]
    fn custom_config_is_used() {
        let config = SolverConfig {
            stations: 11,
            oswald_efficiency: 1.0,
            ..SolverConfig::default()
        };
        let solver = WingSolver::with_config(ConstantModel::new(0.5, 0.02), config);
        let sections = [section(0.0, 1.0, 0.0), section(3.0, 1.0, 0.0)];

        let analysis = solver.analyze(&sections, &flight(5.0, 40.0, 6.0)).unwrap();

        assert_eq!(analysis.results.len(), 11);
        // AR = 36 / 6 = 6 with e = 1.
        assert_relative_eq!(
            analysis.polar.cd_induced,
            0.25 / (std::f64::consts::PI * 6.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn solver_trims_to_target_lift() {
        let solver = WingSolver::new(LinearLiftModel::new(0.1, 0.01));
        let sections = [section(0.0, 1.5, 0.0), section(3.0, 1.5, 0.0)];

        let trimmed = solver
            .given_cl(
                &sections,
                Velocity::new::<meter_per_second>(40.0),
                Length::new::<meter>(6.0),
                0.3,
                GivenClConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(trimmed.alpha.get::<degree>(), 3.0, epsilon = 1e-8);
    }
}

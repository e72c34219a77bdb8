//! Problem formulation for target lift coefficient trimming.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{angle::degree, f64::Angle};

use crate::{
    models::aero::wing::core::{
        FlightCondition, GivenClSolution, Section, SolveError, SolverConfig, solve::solve,
    },
    support::section_model::SectionModel,
};

/// Model adapter for target-based lift solving.
///
/// Wraps the base wing solver and exposes the angle of attack as the sole
/// input variable to the model.
pub(super) struct GivenClModel<'a, M> {
    sections: &'a [Section],
    flight: FlightCondition,
    config: &'a SolverConfig,
    model: &'a M,
}

impl<'a, M> GivenClModel<'a, M> {
    pub(super) fn new(
        sections: &'a [Section],
        flight: FlightCondition,
        config: &'a SolverConfig,
        model: &'a M,
    ) -> Self {
        Self {
            sections,
            flight,
            config,
            model,
        }
    }
}

impl<M: SectionModel> Model for GivenClModel<'_, M> {
    type Input = Angle;
    type Output = GivenClSolution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let flight = self.flight.with_alpha(*input)?;
        let polar = solve(self.sections, &flight, self.config, self.model)?.polar;
        Ok(GivenClSolution {
            alpha: *input,
            polar,
        })
    }
}

/// Equation problem definition for lift matching.
///
/// Computes the residual as `achieved_cl - target_cl`.
pub(super) struct GivenClProblem {
    target_cl: f64,
}

impl GivenClProblem {
    pub(super) fn new(target_cl: f64) -> Self {
        Self { target_cl }
    }
}

impl EquationProblem<1> for GivenClProblem {
    type Input = Angle;
    type Output = GivenClSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Angle::new::<degree>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.polar.cl - self.target_cl])
    }
}

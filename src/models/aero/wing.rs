//! Finite wing models.
//!
//! This module provides a [`twine_core::Model`] implementation for wings
//! analyzed with strip theory. The computational core is in the internal
//! `core` module; its public types are re-exported here.

pub(crate) mod core;

pub use self::core::{
    Airfoil, ConfigError, FlightCondition, FlightConditionError, GeometryError, GivenClConfig, GivenClError,
    GivenClSolution, InducedDragSweep, Planform, PredictionError, Section, SolveError,
    SolverConfig, SpanIntegrator, SpanResults, SpanwiseStation, StationEvaluator, StationResult,
    WingPolar, WingSolver, spanwise_grid,
};

use twine_core::Model;

use crate::support::section_model::SectionModel;

/// Input to a [`WingModel`]: the wing geometry and the condition it flies at.
#[derive(Debug, Clone, PartialEq)]
pub struct WingInput {
    /// Sections from the root outward, in any order.
    pub sections: Vec<Section>,

    /// Freestream condition and full span.
    pub flight: FlightCondition,
}

/// Wing polar model backed by a section model.
///
/// A thin adapter over [`WingSolver`] that maps a [`WingInput`] to a
/// [`WingPolar`].
#[derive(Debug, Clone)]
pub struct WingModel<M> {
    solver: WingSolver<M>,
}

impl<M: SectionModel> WingModel<M> {
    /// Creates a model with the default solver configuration.
    #[must_use]
    pub fn new(section_model: M) -> Self {
        Self {
            solver: WingSolver::new(section_model),
        }
    }

    /// Creates a model with a custom solver configuration.
    #[must_use]
    pub fn with_config(section_model: M, config: SolverConfig) -> Self {
        Self {
            solver: WingSolver::with_config(section_model, config),
        }
    }

    /// Underlying solver.
    #[must_use]
    pub fn solver(&self) -> &WingSolver<M> {
        &self.solver
    }
}

impl<M: SectionModel> Model for WingModel<M> {
    type Input = WingInput;
    type Output = WingPolar;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solver.solve(&input.sections, &input.flight)
    }
}

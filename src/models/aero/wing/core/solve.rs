//! Core strip-theory wing solver.

mod error;

pub use error::{PredictionError, SolveError};

use uom::{
    ConstZero,
    si::f64::{Area, Length},
};

use crate::support::section_model::SectionModel;

use super::{
    FlightCondition, Planform, Section, SolverConfig, SpanIntegrator, SpanResults,
    StationEvaluator, spanwise_grid,
};

/// Solves a wing for a single flight condition.
///
/// This function performs the full strip-theory pipeline: validation and
/// sorting of the sections, interpolation onto a uniform half-span grid,
/// per-station evaluation of the section model, and spanwise integration.
///
/// # Errors
///
/// Returns [`SolveError`] on an invalid configuration or geometry, a
/// non-physical flight condition, section model failures, or a degenerate
/// planform.
pub(super) fn solve<M: SectionModel>(
    sections: &[Section],
    flight: &FlightCondition,
    config: &SolverConfig,
    model: &M,
) -> Result<SpanResults, SolveError> {
    config.validate()?;

    // Conditions built with `new_unchecked` are validated here.
    let flight = FlightCondition::new(flight.alpha(), flight.velocity(), flight.span())?;
    if flight.span() == Length::ZERO {
        return Err(SolveError::DegenerateWing {
            area: Area::ZERO,
            aspect_ratio: 0.0,
        });
    }

    let planform = Planform::new(sections.iter().copied())?;
    planform.check_half_span(flight.half_span())?;

    let grid = spanwise_grid(flight.half_span(), config.stations)?;
    let stations = planform.interpolate(&grid);

    SpanIntegrator::check_planform(SpanIntegrator::planform_area(&stations), flight.span())?;

    log::debug!(
        "solving wing: sections={}, stations={}, alpha={:?}, velocity={:?}, span={:?}",
        planform.sections().len(),
        stations.len(),
        flight.alpha(),
        flight.velocity(),
        flight.span(),
    );

    let evaluator = StationEvaluator::new(config.air, flight);
    let results = if config.batch_predictions {
        evaluator.evaluate_batch(&stations, model)?
    } else {
        stations
            .iter()
            .enumerate()
            .map(|(index, station)| evaluator.evaluate(index, station, model))
            .collect::<Result<Vec<_>, _>>()?
    };

    let polar = SpanIntegrator::new(config, evaluator.dynamic_pressure()).integrate(
        &stations,
        &results,
        flight.span(),
    )?;

    log::debug!(
        "wing solved: CL={:.4}, CDp={:.5}, CDi={:.5}, CD={:.5}",
        polar.cl,
        polar.cd_profile,
        polar.cd_induced,
        polar.cd,
    );

    Ok(SpanResults {
        polar,
        stations,
        results,
    })
}

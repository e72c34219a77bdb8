use thiserror::Error;
use uom::si::f64::Area;

use crate::models::aero::wing::core::{ConfigError, FlightConditionError, GeometryError};

/// Errors that can occur while solving a wing.
///
/// Every error aborts the solve; partial results are never returned.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The section list does not describe a valid wing.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// The flight condition is non-physical, globally or at a station.
    #[error("invalid flight condition: {0}")]
    InvalidFlightCondition(#[from] FlightConditionError),

    /// The section model failed or returned unusable predictions.
    #[error("section model prediction failed: {0}")]
    ModelPrediction(#[from] PredictionError),

    /// The solver configuration is unusable.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The integrated wing has no usable area or aspect ratio.
    ///
    /// Note: The aspect ratio may be NaN or infinite when the area is zero.
    #[error("degenerate wing: area={area:?}, aspect_ratio={aspect_ratio}")]
    DegenerateWing {
        /// Integrated planform area.
        area: Area,

        /// Aspect ratio implied by the span and area.
        aspect_ratio: f64,
    },
}

/// Errors raised while querying a section model.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The model itself returned an error.
    #[error("model failed{}", station_suffix(.station))]
    Failed {
        /// Station being evaluated, or `None` for a batch query.
        station: Option<usize>,

        /// Underlying model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The model returned a `NaN` or infinite coefficient.
    #[error("non-finite coefficients at station {station}: cl={cl}, cd={cd}")]
    NonFinite { station: usize, cl: f64, cd: f64 },

    /// A batch query returned the wrong number of predictions.
    #[error("expected {expected} predictions, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

impl PredictionError {
    /// Wraps a model error with the station it occurred at.
    pub(crate) fn failed(
        station: Option<usize>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Failed {
            station,
            source: Box::new(err),
        }
    }
}

fn station_suffix(station: &Option<usize>) -> String {
    station.map_or_else(String::new, |index| format!(" at station {index}"))
}

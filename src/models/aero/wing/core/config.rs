use thiserror::Error;

use crate::support::{
    air::Air,
    constraint::{ConstraintError, StrictlyPositive},
};

/// Spanwise sweep used as the reference sweep in the induced drag correction.
///
/// The induced drag coefficient is `CL² / (π · AR · e · cos²Λ)`, where `Λ` is
/// chosen by this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InducedDragSweep {
    /// Sweep of the outermost station.
    ///
    /// This is the default.
    #[default]
    Tip,

    /// Sweep of the root station.
    Root,

    /// Span-averaged sweep over the half-span.
    Mean,

    /// No sweep correction.
    Unswept,
}

/// Configuration for a wing solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Number of spanwise stations from root to tip, including both ends.
    ///
    /// Must be at least 2.
    pub stations: usize,

    /// Oswald span efficiency factor `e`, in `(0, 1]`.
    ///
    /// Checked by [`SolverConfig::validate`] at the start of every solve.
    pub oswald_efficiency: f64,

    /// Reference sweep for the induced drag correction.
    pub induced_drag_sweep: InducedDragSweep,

    /// Freestream air properties.
    pub air: Air,

    /// Query the section model once for all stations instead of once per station.
    ///
    /// Per-station queries report the failing station index in prediction errors.
    pub batch_predictions: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stations: 60,
            oswald_efficiency: 0.85,
            induced_drag_sweep: InducedDragSweep::default(),
            air: Air::sea_level(),
            batch_predictions: true,
        }
    }
}

impl SolverConfig {
    /// Checks the values a solve cannot proceed without.
    ///
    /// The station count is checked when the spanwise grid is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OswaldEfficiency`] if the efficiency factor is
    /// not in `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = self.oswald_efficiency;
        StrictlyPositive::new(value)
            .and_then(|_| {
                if value > 1.0 {
                    Err(ConstraintError::AboveMaximum)
                } else {
                    Ok(())
                }
            })
            .map_err(|source| ConfigError::OswaldEfficiency { value, source })
    }
}

/// Errors describing an unusable solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The Oswald efficiency factor is outside `(0, 1]`.
    #[error("Oswald efficiency {value} is outside (0, 1]")]
    OswaldEfficiency {
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

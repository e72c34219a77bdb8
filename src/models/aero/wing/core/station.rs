//! Local flow and loads at spanwise stations.

use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Pressure},
};

use crate::support::{
    air::Air,
    section_model::{SectionCoefficients, SectionFeatures, SectionModel},
    units::ForcePerLength,
};

use super::{FlightCondition, FlightConditionError, PredictionError, SolveError, SpanwiseStation};

/// Sweep cosines at or below this value leave no usable normal velocity.
const MIN_SWEEP_COSINE: f64 = 1e-9;

/// Local flow, section coefficients, and loads at one spanwise station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationResult {
    /// Effective angle of attack seen by the section.
    pub alpha_eff: Angle,

    /// Reynolds number based on the local chord and normal velocity.
    pub reynolds: f64,

    /// Sweep-corrected section lift coefficient.
    pub cl: f64,

    /// Section profile drag coefficient.
    pub cd: f64,

    /// Lift per unit span.
    pub lift_per_span: ForcePerLength,

    /// Profile drag per unit span.
    pub drag_per_span: ForcePerLength,
}

/// Evaluates spanwise stations for a single flight condition.
///
/// Simple sweep theory is applied at every station: with local sweep `Λ`,
///
/// - the effective angle of attack is `(α + twist) · cos Λ`,
/// - the Reynolds number uses the normal velocity `V · cos Λ`,
/// - the predicted lift coefficient is scaled by `cos² Λ`.
///
/// Drag is left uncorrected and loads use the freestream dynamic pressure.
#[derive(Debug, Clone, Copy)]
pub struct StationEvaluator {
    air: Air,
    flight: FlightCondition,
    dynamic_pressure: Pressure,
}

impl StationEvaluator {
    /// Creates an evaluator for a flight condition.
    #[must_use]
    pub fn new(air: Air, flight: FlightCondition) -> Self {
        Self {
            air,
            flight,
            dynamic_pressure: air.dynamic_pressure(flight.velocity()),
        }
    }

    /// Freestream dynamic pressure shared by all stations.
    #[must_use]
    pub fn dynamic_pressure(&self) -> Pressure {
        self.dynamic_pressure
    }

    /// Builds the section model input for a station.
    ///
    /// # Errors
    ///
    /// Returns a [`FlightConditionError`] if the sweep leaves no normal
    /// velocity or the Reynolds number is not positive and finite.
    pub fn features(
        &self,
        index: usize,
        station: &SpanwiseStation,
    ) -> Result<SectionFeatures, FlightConditionError> {
        let cos_sweep = station.sweep.get::<radian>().cos();
        if cos_sweep <= MIN_SWEEP_COSINE {
            return Err(FlightConditionError::NormalVelocity {
                station: index,
                sweep: station.sweep,
            });
        }

        let normal_velocity = self.flight.velocity() * cos_sweep;
        let reynolds = self.air.reynolds_number(normal_velocity, station.chord);
        if !(reynolds.is_finite() && reynolds > 0.0) {
            return Err(FlightConditionError::Reynolds {
                station: index,
                reynolds,
            });
        }

        let incidence = self.flight.alpha().get::<degree>() + station.twist.get::<degree>();

        Ok(SectionFeatures {
            aoa_deg: incidence * cos_sweep,
            log_re: reynolds.log10(),
            camber: station.airfoil.camber(),
            camber_position: station.airfoil.camber_position(),
            thickness: station.airfoil.thickness(),
        })
    }

    /// Evaluates a single station with one model query.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the local flow is non-physical or the model
    /// fails. Model errors carry the station index.
    pub fn evaluate<M: SectionModel>(
        &self,
        index: usize,
        station: &SpanwiseStation,
        model: &M,
    ) -> Result<StationResult, SolveError> {
        let features = self.features(index, station)?;
        let coefficients = model
            .predict(&features)
            .map_err(|err| PredictionError::failed(Some(index), err))?;

        Ok(self.resolve(index, station, &features, coefficients)?)
    }

    /// Evaluates all stations with a single batched model query.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if any station's flow is non-physical, the
    /// model fails, or the batch is not aligned with the stations.
    pub fn evaluate_batch<M: SectionModel>(
        &self,
        stations: &[SpanwiseStation],
        model: &M,
    ) -> Result<Vec<StationResult>, SolveError> {
        let features = stations
            .iter()
            .enumerate()
            .map(|(index, station)| self.features(index, station))
            .collect::<Result<Vec<_>, _>>()?;

        let predictions = model
            .predict_batch(&features)
            .map_err(|err| PredictionError::failed(None, err))?;

        if predictions.len() != stations.len() {
            return Err(PredictionError::CountMismatch {
                expected: stations.len(),
                actual: predictions.len(),
            }
            .into());
        }

        stations
            .iter()
            .zip(&features)
            .zip(predictions)
            .enumerate()
            .map(|(index, ((station, features), coefficients))| {
                Ok(self.resolve(index, station, features, coefficients)?)
            })
            .collect()
    }

    /// Applies the sweep correction and computes the station loads.
    fn resolve(
        &self,
        index: usize,
        station: &SpanwiseStation,
        features: &SectionFeatures,
        coefficients: SectionCoefficients,
    ) -> Result<StationResult, PredictionError> {
        let SectionCoefficients { cl: cl_raw, cd } = coefficients;
        if !(cl_raw.is_finite() && cd.is_finite()) {
            return Err(PredictionError::NonFinite {
                station: index,
                cl: cl_raw,
                cd,
            });
        }

        let cos_sweep = station.sweep.get::<radian>().cos();
        let cl = cl_raw * cos_sweep * cos_sweep;

        let q_chord = self.dynamic_pressure * station.chord;
        let result = StationResult {
            alpha_eff: Angle::new::<degree>(features.aoa_deg),
            reynolds: features.reynolds(),
            cl,
            cd,
            lift_per_span: q_chord * cl,
            drag_per_span: q_chord * cd,
        };

        log::trace!(
            "station {index}: y={:?}, alpha_eff={:.4} deg, Re={:.4e}, cl={:.5}, cd={:.5}",
            station.y,
            features.aoa_deg,
            result.reynolds,
            cl,
            cd,
        );

        Ok(result)
    }
}

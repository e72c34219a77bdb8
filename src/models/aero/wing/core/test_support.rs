use std::{cell::RefCell, convert::Infallible};

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::section_model::{SectionCoefficients, SectionFeatures, SectionModel};

use super::{Airfoil, FlightCondition, Section, SpanwiseStation};

/// Returns the NACA 2412 shape used throughout the tests.
pub(super) fn naca_2412() -> Airfoil {
    Airfoil::new_unchecked(0.02, 0.4, 0.12)
}

/// Unswept NACA 2412 section; lengths in meters, twist in degrees.
pub(super) fn section(y: f64, chord: f64, twist_deg: f64) -> Section {
    swept_section(y, chord, twist_deg, 0.0)
}

/// NACA 2412 section; lengths in meters, angles in degrees.
pub(super) fn swept_section(y: f64, chord: f64, twist_deg: f64, sweep_deg: f64) -> Section {
    Section::new_unchecked(
        Length::new::<meter>(y),
        Length::new::<meter>(chord),
        Angle::new::<degree>(twist_deg),
        Angle::new::<degree>(sweep_deg),
        naca_2412(),
    )
}

/// NACA 2412 station at the root; chord in meters, angles in degrees.
pub(super) fn station(chord: f64, twist_deg: f64, sweep_deg: f64) -> SpanwiseStation {
    SpanwiseStation {
        y: Length::new::<meter>(0.0),
        chord: Length::new::<meter>(chord),
        twist: Angle::new::<degree>(twist_deg),
        sweep: Angle::new::<degree>(sweep_deg),
        airfoil: naca_2412(),
    }
}

/// Flight condition with alpha in degrees, speed in m/s, and span in meters.
pub(super) fn flight(alpha_deg: f64, velocity: f64, span: f64) -> FlightCondition {
    FlightCondition::new(
        Angle::new::<degree>(alpha_deg),
        Velocity::new::<meter_per_second>(velocity),
        Length::new::<meter>(span),
    )
    .expect("test flight condition should be valid")
}

/// Returns the same coefficients for every input.
#[derive(Debug, Clone, Copy)]
pub(super) struct ConstantModel {
    cl: f64,
    cd: f64,
}

impl ConstantModel {
    pub(super) fn new(cl: f64, cd: f64) -> Self {
        Self { cl, cd }
    }
}

impl SectionModel for ConstantModel {
    type Error = Infallible;

    fn predict_cl(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(self.cl)
    }

    fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(self.cd)
    }
}

/// Lift proportional to the effective angle of attack, constant drag.
#[derive(Debug, Clone, Copy)]
pub(super) struct LinearLiftModel {
    slope_per_deg: f64,
    cd: f64,
}

impl LinearLiftModel {
    pub(super) fn new(slope_per_deg: f64, cd: f64) -> Self {
        Self { slope_per_deg, cd }
    }
}

impl SectionModel for LinearLiftModel {
    type Error = Infallible;

    fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(self.slope_per_deg * features.aoa_deg)
    }

    fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(self.cd)
    }
}

/// Records the features of every station it is asked about.
pub(super) struct RecordingModel<M> {
    inner: M,
    seen: RefCell<Vec<SectionFeatures>>,
}

impl<M> RecordingModel<M> {
    pub(super) fn new(inner: M) -> Self {
        Self {
            inner,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Features passed to the model so far, in query order.
    pub(super) fn seen(&self) -> Vec<SectionFeatures> {
        self.seen.borrow().clone()
    }
}

impl<M: SectionModel> SectionModel for RecordingModel<M> {
    type Error = M::Error;

    fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        self.seen.borrow_mut().push(*features);
        self.inner.predict_cl(features)
    }

    fn predict_cd(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        self.inner.predict_cd(features)
    }
}

#[derive(Debug, Error)]
#[error("model unavailable")]
pub(super) struct StubError;

/// Fails every prediction.
pub(super) struct FailingModel;

impl SectionModel for FailingModel {
    type Error = StubError;

    fn predict_cl(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Err(StubError)
    }

    fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Err(StubError)
    }
}

/// Predicts a `NaN` lift coefficient.
pub(super) struct NonFiniteModel;

impl SectionModel for NonFiniteModel {
    type Error = Infallible;

    fn predict_cl(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(f64::NAN)
    }

    fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(0.01)
    }
}

/// Drops the last row of every batch.
pub(super) struct ShortBatchModel;

impl SectionModel for ShortBatchModel {
    type Error = Infallible;

    fn predict_cl(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(0.5)
    }

    fn predict_cd(&self, _features: &SectionFeatures) -> Result<f64, Self::Error> {
        Ok(0.01)
    }

    fn predict_batch(
        &self,
        features: &[SectionFeatures],
    ) -> Result<Vec<SectionCoefficients>, Self::Error> {
        let rows = features.len().saturating_sub(1);
        features[..rows].iter().map(|row| self.predict(row)).collect()
    }
}

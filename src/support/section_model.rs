//! Section aerodynamics as a prediction capability.
//!
//! The wing solver treats two-dimensional airfoil aerodynamics as an external
//! collaborator. A [`SectionModel`] maps the local flow and shape of one
//! spanwise station, packed into [`SectionFeatures`], to lift and drag
//! coefficients. Trained regressors, lookup tables, and analytic models all
//! fit behind the same trait.
//!
//! Models are queried through shared references only, so a single loaded
//! model can serve any number of concurrent solves.
//!
//! [`ThinAirfoilModel`] is an analytic implementation that needs no trained
//! artifact.

mod thin_airfoil;

pub use thin_airfoil::{ThinAirfoilConfig, ThinAirfoilModel};

/// Feature vector describing one spanwise station to a [`SectionModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFeatures {
    /// Effective angle of attack, in degrees.
    pub aoa_deg: f64,

    /// Base-10 logarithm of the local Reynolds number.
    pub log_re: f64,

    /// NACA maximum camber `m`, as a fraction of chord.
    pub camber: f64,

    /// NACA position of maximum camber `p`, as a fraction of chord.
    pub camber_position: f64,

    /// Maximum thickness `t`, as a fraction of chord.
    pub thickness: f64,
}

impl SectionFeatures {
    /// Column names in the order used by [`SectionFeatures::to_row`].
    pub const COLUMNS: [&'static str; 5] = ["AoA", "logRe", "m", "p", "t"];

    /// Returns the features as a tabular row ordered like [`SectionFeatures::COLUMNS`].
    #[must_use]
    pub fn to_row(&self) -> [f64; 5] {
        [
            self.aoa_deg,
            self.log_re,
            self.camber,
            self.camber_position,
            self.thickness,
        ]
    }

    /// Returns the local Reynolds number.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        10f64.powf(self.log_re)
    }
}

/// Predicted section lift and drag coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionCoefficients {
    /// Section lift coefficient.
    pub cl: f64,

    /// Section drag coefficient.
    pub cd: f64,
}

/// A source of section lift and drag predictions.
///
/// Implementors provide [`predict_cl`](SectionModel::predict_cl) and
/// [`predict_cd`](SectionModel::predict_cd). The provided
/// [`predict_batch`](SectionModel::predict_batch) evaluates one row at a time;
/// vectorized models should override it to predict all stations in one call.
///
/// Predictions are expected to be deterministic for a given input.
pub trait SectionModel {
    /// Error returned when a prediction fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Predicts the section lift coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a prediction.
    fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error>;

    /// Predicts the section drag coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a prediction.
    fn predict_cd(&self, features: &SectionFeatures) -> Result<f64, Self::Error>;

    /// Predicts both coefficients for a single station.
    ///
    /// # Errors
    ///
    /// Returns an error if either prediction fails.
    fn predict(&self, features: &SectionFeatures) -> Result<SectionCoefficients, Self::Error> {
        Ok(SectionCoefficients {
            cl: self.predict_cl(features)?,
            cd: self.predict_cd(features)?,
        })
    }

    /// Predicts coefficients for an ordered batch of stations.
    ///
    /// The returned vector must be aligned with `features`.
    ///
    /// # Errors
    ///
    /// Returns an error if any prediction fails.
    fn predict_batch(
        &self,
        features: &[SectionFeatures],
    ) -> Result<Vec<SectionCoefficients>, Self::Error> {
        features.iter().map(|row| self.predict(row)).collect()
    }
}

impl<M: SectionModel + ?Sized> SectionModel for &M {
    type Error = M::Error;

    fn predict_cl(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        (**self).predict_cl(features)
    }

    fn predict_cd(&self, features: &SectionFeatures) -> Result<f64, Self::Error> {
        (**self).predict_cd(features)
    }

    fn predict(&self, features: &SectionFeatures) -> Result<SectionCoefficients, Self::Error> {
        (**self).predict(features)
    }

    fn predict_batch(
        &self,
        features: &[SectionFeatures],
    ) -> Result<Vec<SectionCoefficients>, Self::Error> {
        (**self).predict_batch(features)
    }
}

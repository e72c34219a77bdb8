//! Freestream air properties.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Sea-level air density, kg/m³.
const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Sea-level dynamic viscosity of air, Pa·s.
const SEA_LEVEL_VISCOSITY: f64 = 1.81e-5;

/// Constant density and viscosity of the air the wing flies through.
///
/// Both properties are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Air {
    density: MassDensity,
    viscosity: DynamicViscosity,
}

impl Air {
    /// Constructs validated air properties.
    ///
    /// # Errors
    ///
    /// Returns an error if either property is not strictly positive.
    pub fn new(density: MassDensity, viscosity: DynamicViscosity) -> ConstraintResult<Self> {
        let density = Constrained::<MassDensity, StrictlyPositive>::new(density)?;
        let viscosity = Constrained::<DynamicViscosity, StrictlyPositive>::new(viscosity)?;
        Ok(Self {
            density: density.into_inner(),
            viscosity: viscosity.into_inner(),
        })
    }

    /// Standard sea-level air: ρ = 1.225 kg/m³, μ = 1.81e-5 Pa·s.
    #[must_use]
    pub fn sea_level() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(SEA_LEVEL_DENSITY),
            viscosity: DynamicViscosity::new::<pascal_second>(SEA_LEVEL_VISCOSITY),
        }
    }

    /// Returns the air density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the dynamic viscosity.
    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    /// Reynolds number `ρ V L / μ` for a flow speed and reference length.
    #[must_use]
    pub fn reynolds_number(&self, velocity: Velocity, length: Length) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
            * velocity.get::<meter_per_second>()
            * length.get::<meter>()
            / self.viscosity.get::<pascal_second>()
    }

    /// Dynamic pressure `½ ρ V²`.
    #[must_use]
    pub fn dynamic_pressure(&self, velocity: Velocity) -> Pressure {
        let v = velocity.get::<meter_per_second>();
        Pressure::new::<pascal>(0.5 * self.density.get::<kilogram_per_cubic_meter>() * v * v)
    }
}

impl Default for Air {
    fn default() -> Self {
        Self::sea_level()
    }
}

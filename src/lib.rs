//! # Wing Polar
//!
//! Fast lift and drag estimates for finite wings built from spanwise airfoil
//! sections.
//!
//! A wing is described by a handful of sections (chord, twist, sweep, and NACA
//! 4-digit shape at a spanwise position). The solver interpolates them onto a
//! spanwise grid, asks a [`support::section_model::SectionModel`] for local
//! lift and drag at each station, integrates the loads with strip theory, and
//! adds an Oswald-efficiency induced drag correction.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use uom::si::{
//!     angle::degree, f64::{Angle, Length, Velocity}, length::meter,
//!     velocity::meter_per_second,
//! };
//! use wing_polar::models::aero::wing::{Airfoil, FlightCondition, Section, WingSolver};
//! use wing_polar::support::section_model::ThinAirfoilModel;
//!
//! let naca_2412 = Airfoil::new(0.02, 0.4, 0.12).unwrap();
//! let sections = [
//!     Section::new(
//!         Length::new::<meter>(0.0),
//!         Length::new::<meter>(1.5),
//!         Angle::new::<degree>(0.0),
//!         Angle::new::<degree>(0.0),
//!         naca_2412,
//!     )
//!     .unwrap(),
//!     Section::new(
//!         Length::new::<meter>(3.0),
//!         Length::new::<meter>(1.2),
//!         Angle::new::<degree>(-1.0),
//!         Angle::new::<degree>(0.0),
//!         naca_2412,
//!     )
//!     .unwrap(),
//! ];
//! let flight = FlightCondition::new(
//!     Angle::new::<degree>(5.0),
//!     Velocity::new::<meter_per_second>(40.0),
//!     Length::new::<meter>(6.0),
//! )
//! .unwrap();
//!
//! let solver = WingSolver::new(ThinAirfoilModel::default());
//! let polar = solver.solve(&sections, &flight).unwrap();
//! assert!(polar.cl > 0.0 && polar.cd > polar.cd_profile);
//! ```

pub mod models;
pub mod support;

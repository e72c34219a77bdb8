//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities on its public API.
//! This module provides quantities that are useful for wing modeling but
//! aren't included in [`uom`].

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Force per unit length, N/m in SI.
///
/// Spanwise lift and drag loads have this dimension. Values are produced by
/// multiplying a [`uom::si::f64::Pressure`] by a [`uom::si::f64::Length`].
pub type ForcePerLength = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

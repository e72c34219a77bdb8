//! Aerodynamic models.
//!
//! This module contains models for lifting surfaces.

pub mod wing;

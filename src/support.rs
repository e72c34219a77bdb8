//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, for example
//! to implement a [`section_model::SectionModel`] for a trained regressor.
//! Their APIs are not stable.

pub mod air;
pub mod constraint;
pub mod numeric;
pub mod section_model;
pub mod units;

//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] types: temperatures,
//! temperature intervals, heat-capacity flow rates (thermal conductance),
//! and duties (power). This module adds the pieces [`uom`] itself is
//! missing.

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;

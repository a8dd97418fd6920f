//! Pinch analysis via the problem-table method.
//!
//! [`PinchAnalysis`] is a thin [`twine_core::Model`] adapter over the
//! heat-cascade core in this module. One call maps an immutable stream
//! collection and a minimum approach temperature to a [`PinchTargets`]
//! result holding the interval table, the pinch temperature, the minimum
//! utility duties, and each stream's duty split at the pinch.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_pinch::models::thermal::pinch::{PinchAnalysis, PinchError, PinchProblem, ThermalStream};
//! use uom::si::{
//!     f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
//!     power::watt,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! fn main() -> Result<(), PinchError> {
//!     let problem = PinchProblem {
//!         streams: vec![
//!             ThermalStream::new(
//!                 "H1",
//!                 ThermodynamicTemperature::new::<kelvin>(200.0),
//!                 ThermodynamicTemperature::new::<kelvin>(100.0),
//!                 ThermalConductance::new::<watt_per_kelvin>(2.0),
//!             )?,
//!             ThermalStream::new(
//!                 "C1",
//!                 ThermodynamicTemperature::new::<kelvin>(50.0),
//!                 ThermodynamicTemperature::new::<kelvin>(150.0),
//!                 ThermalConductance::new::<watt_per_kelvin>(2.0),
//!             )?,
//!         ],
//!         min_approach: TemperatureInterval::new::<delta_kelvin>(10.0),
//!     };
//!
//!     let targets = PinchAnalysis.call(&problem)?;
//!
//!     // This problem balances perfectly: no external utility is needed.
//!     assert_eq!(targets.min_hot_utility.get::<watt>(), 0.0);
//!     assert_eq!(targets.min_cold_utility.get::<watt>(), 0.0);
//!     assert!(targets.pinch_temperature.is_some());
//!
//!     Ok(())
//! }
//! ```

mod core;

pub use self::core::{
    CapacitanceRate, CascadeInterval, PinchError, PinchTargets, StreamDuty, StreamKind,
    ThermalStream,
};

use twine_core::Model;
use uom::si::f64::TemperatureInterval;

/// Minimum-utility targeting model.
///
/// The model holds no state, so a single instance may serve any number of
/// independent analyses, including concurrently. Each call is a pure,
/// deterministic batch computation over its own input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchAnalysis;

/// Input to a pinch analysis run.
#[derive(Debug, Clone)]
pub struct PinchProblem {
    /// Process streams to integrate, in caller order.
    pub streams: Vec<ThermalStream>,

    /// Minimum allowed temperature driving force between any hot and cold
    /// stream exchanging heat. Must not be negative.
    pub min_approach: TemperatureInterval,
}

impl Model for PinchAnalysis {
    type Input = PinchProblem;
    type Output = PinchTargets;
    type Error = PinchError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::analyze(&input.streams, input.min_approach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{ThermalConductance, ThermodynamicTemperature},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::kelvin,
    };

    fn stream(name: &str, supply: f64, target: f64, rate: f64) -> ThermalStream {
        ThermalStream::new(
            name,
            ThermodynamicTemperature::new::<kelvin>(supply),
            ThermodynamicTemperature::new::<kelvin>(target),
            ThermalConductance::new::<watt_per_kelvin>(rate),
        )
        .unwrap()
    }

    #[test]
    fn adapter_delegates_to_the_cascade_core() {
        let problem = PinchProblem {
            streams: vec![
                stream("H1", 200.0, 100.0, 2.0),
                stream("C1", 50.0, 150.0, 2.0),
            ],
            min_approach: TemperatureInterval::new::<delta_kelvin>(10.0),
        };

        let targets = PinchAnalysis.call(&problem).unwrap();

        assert_eq!(targets.intervals.len(), 3);
        assert_relative_eq!(targets.min_hot_utility.get::<watt>(), 0.0);
        assert_relative_eq!(targets.min_cold_utility.get::<watt>(), 0.0);
        assert_relative_eq!(
            targets.pinch_temperature.unwrap().get::<kelvin>(),
            50.0
        );
    }

    #[test]
    fn adapter_surfaces_validation_errors() {
        let problem = PinchProblem {
            streams: vec![
                stream("H1", 200.0, 100.0, 2.0),
                stream("C1", 50.0, 150.0, 2.0),
            ],
            min_approach: TemperatureInterval::new::<delta_kelvin>(-5.0),
        };

        let result = PinchAnalysis.call(&problem);

        assert!(matches!(result, Err(PinchError::MinApproach(_))));
    }
}

use std::{cmp::Ordering, ops::Deref};

use uom::si::f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::TemperatureDifference,
};

use super::PinchError;

/// Heat-capacity flow rate (`m_dot` * `c_p`) of a process stream.
///
/// The value must be strictly positive: a stream that cannot carry heat has
/// no place in an integration problem.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Creates a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(ThermalConductance::new::<U>(value))
    }

    /// Creates a [`CapacitanceRate`] from a quantity with thermal-conductance
    /// units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Whether a stream releases or demands heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Cools from supply to target, releasing heat.
    Hot,
    /// Heats from supply to target, demanding heat.
    Cold,
}

/// A process stream with a constant heat-capacity flow rate.
///
/// Streams are constructed once from input data and never mutated by the
/// analysis. Classification and total enthalpy change are derived from the
/// endpoints on demand, so they can never disagree with the stored state.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalStream {
    name: String,
    supply: ThermodynamicTemperature,
    target: ThermodynamicTemperature,
    capacitance_rate: CapacitanceRate,
}

impl ThermalStream {
    /// Creates a validated stream.
    ///
    /// # Errors
    ///
    /// Returns [`PinchError::IsothermalStream`] if the supply and target
    /// temperatures are equal (the hot/cold classification would be
    /// undefined), [`PinchError::IncomparableTemperatures`] if either
    /// temperature is NaN, or [`PinchError::CapacitanceRate`] if the
    /// heat-capacity flow rate is not strictly positive.
    pub fn new(
        name: impl Into<String>,
        supply: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
        capacitance_rate: ThermalConductance,
    ) -> Result<Self, PinchError> {
        let name = name.into();

        match supply.partial_cmp(&target) {
            Some(Ordering::Less | Ordering::Greater) => {}
            Some(Ordering::Equal) => return Err(PinchError::IsothermalStream { name }),
            None => return Err(PinchError::IncomparableTemperatures { name }),
        }

        let capacitance_rate =
            CapacitanceRate::from_quantity(capacitance_rate).map_err(|source| {
                PinchError::CapacitanceRate {
                    name: name.clone(),
                    source,
                }
            })?;

        Ok(Self {
            name,
            supply,
            target,
            capacitance_rate,
        })
    }

    /// Stream name, used to report duties and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Temperature at which the stream enters the problem.
    #[must_use]
    pub fn supply_temperature(&self) -> ThermodynamicTemperature {
        self.supply
    }

    /// Temperature the stream must reach.
    #[must_use]
    pub fn target_temperature(&self) -> ThermodynamicTemperature {
        self.target
    }

    /// Heat-capacity flow rate of the stream.
    #[must_use]
    pub fn capacitance_rate(&self) -> CapacitanceRate {
        self.capacitance_rate
    }

    /// Classification derived from the endpoints: hot streams cool down,
    /// cold streams heat up.
    #[must_use]
    pub fn kind(&self) -> StreamKind {
        if self.supply > self.target {
            StreamKind::Hot
        } else {
            StreamKind::Cold
        }
    }

    /// Total enthalpy change over the stream's temperature span.
    ///
    /// Always non-negative: `|T_target - T_supply| * C`.
    #[must_use]
    pub fn enthalpy(&self) -> Power {
        *self.capacitance_rate * self.supply.minus(self.target).abs()
    }
}

/// A hot stream's span on the shifted temperature scale.
///
/// Owned by the cascade stage and discarded with it after the run.
#[derive(Debug, Clone, Copy)]
pub(super) struct ShiftedStream {
    /// Shifted supply temperature; the upper end of the span.
    pub(super) supply: ThermodynamicTemperature,
    /// Shifted target temperature; the lower end of the span.
    pub(super) target: ThermodynamicTemperature,
    pub(super) capacitance_rate: CapacitanceRate,
}

/// Shifts every hot stream down by `min_approach`.
///
/// Cold streams pass through to the interval decomposition unshifted.
/// Shifting the hot side onto the cold side's scale means an interval with a
/// positive net surplus is deliverable with at least the minimum approach of
/// driving force.
pub(super) fn shift_hot_streams(
    streams: &[ThermalStream],
    min_approach: TemperatureInterval,
) -> Vec<ShiftedStream> {
    streams
        .iter()
        .filter(|stream| stream.kind() == StreamKind::Hot)
        .map(|stream| ShiftedStream {
            supply: stream.supply - min_approach,
            target: stream.target - min_approach,
            capacitance_rate: stream.capacitance_rate,
        })
        .collect()
}

//! Result types for pinch analysis.

use uom::{
    ConstZero,
    si::f64::{Power, ThermalConductance, ThermodynamicTemperature},
};

/// One row of the problem table.
///
/// Rows are ordered hottest-first and partition the boundary sequence with
/// no gaps or overlaps: row `k`'s low boundary is row `k + 1`'s high
/// boundary. All temperatures are on the shifted scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeInterval {
    /// Position in the cascade, `0` at the hottest interval.
    pub index: usize,

    /// Upper boundary temperature.
    pub high: ThermodynamicTemperature,

    /// Lower boundary temperature, strictly below `high`.
    pub low: ThermodynamicTemperature,

    /// Net heat-capacity flow rate, positive when the active hot streams
    /// supply more than the active cold streams demand.
    pub net_capacitance_rate: ThermalConductance,

    /// Interval heat balance: net rate times interval width.
    pub enthalpy_delta: Power,

    /// Top-down running sum of the heat balances, before correction. May be
    /// negative.
    pub raw_residual: Power,

    /// Raw residual plus the minimum hot utility; never negative.
    pub corrected_residual: Power,
}

/// A stream's duty split at the pinch.
///
/// The two parts always sum to the stream's total enthalpy change.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDuty {
    /// Name of the stream the split belongs to.
    pub name: String,

    /// Duty exchanged above the pinch.
    pub above: Power,

    /// Duty exchanged below the pinch.
    pub below: Power,
}

/// Minimum-utility targets and the cascade they were derived from.
///
/// Produced once per analysis run and owned by the caller; the run retains
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchTargets {
    /// Problem-table rows, hottest-first. Empty for a degenerate problem.
    pub intervals: Vec<CascadeInterval>,

    /// Pinch temperature on the shifted scale, or `None` when the problem
    /// has no interval to pinch in. The hot-side pinch sits one minimum
    /// approach above this value.
    pub pinch_temperature: Option<ThermodynamicTemperature>,

    /// Smallest external heating duty that makes the cascade feasible.
    pub min_hot_utility: Power,

    /// Heat rejected at the bottom of the corrected cascade.
    pub min_cold_utility: Power,

    /// Per-stream duty splits at the pinch, in input order. Empty when there
    /// is no pinch.
    pub stream_duties: Vec<StreamDuty>,
}

impl PinchTargets {
    /// Result for a problem with nothing to integrate.
    pub(super) fn degenerate() -> Self {
        Self {
            intervals: Vec::new(),
            pinch_temperature: None,
            min_hot_utility: Power::ZERO,
            min_cold_utility: Power::ZERO,
            stream_duties: Vec::new(),
        }
    }

    /// Looks up a stream's duty split by name.
    #[must_use]
    pub fn duty_for(&self, name: &str) -> Option<&StreamDuty> {
        self.stream_duties.iter().find(|duty| duty.name == name)
    }
}

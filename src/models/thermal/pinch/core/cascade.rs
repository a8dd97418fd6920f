//! Heat cascade, feasibility correction, and pinch location.

use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermalConductance, ThermodynamicTemperature},
        power::watt,
    },
};

use crate::support::units::TemperatureDifference;

use super::{
    results::CascadeInterval,
    stream::{ShiftedStream, StreamKind, ThermalStream},
};

/// Relative tolerance for deciding that a corrected residual reaches zero.
const PINCH_TOLERANCE: f64 = 1e-9;

/// The corrected cascade and the targets derived from it.
#[derive(Debug, Clone)]
pub(super) struct Cascade {
    pub(super) intervals: Vec<CascadeInterval>,
    pub(super) pinch_temperature: Option<ThermodynamicTemperature>,
    pub(super) min_hot_utility: Power,
    pub(super) min_cold_utility: Power,
}

/// Builds the problem table over the given descending boundaries.
///
/// Each interval's heat balance depends only on read-only stream data, but
/// the residual is a strict top-down prefix sum: interval `k`'s residual is
/// undefined until interval `k - 1`'s is known.
pub(super) fn cascade(
    boundaries: &[ThermodynamicTemperature],
    streams: &[ThermalStream],
    shifted: &[ShiftedStream],
) -> Cascade {
    let mut intervals = Vec::with_capacity(boundaries.len().saturating_sub(1));

    let mut running = Power::ZERO;
    for (index, pair) in boundaries.windows(2).enumerate() {
        let (high, low) = (pair[0], pair[1]);
        let net_capacitance_rate = net_capacitance_rate(high, low, streams, shifted);
        let enthalpy_delta = net_capacitance_rate * high.minus(low);
        running += enthalpy_delta;
        intervals.push(CascadeInterval {
            index,
            high,
            low,
            net_capacitance_rate,
            enthalpy_delta,
            raw_residual: running,
            // Overwritten by the correction pass below.
            corrected_residual: running,
        });
    }

    correct(intervals)
}

/// Net heat-capacity flow rate present in one interval.
///
/// Hot streams whose shifted span covers the interval supply heat (positive
/// contribution); cold streams whose unshifted span covers it demand heat
/// (negative contribution).
fn net_capacitance_rate(
    high: ThermodynamicTemperature,
    low: ThermodynamicTemperature,
    streams: &[ThermalStream],
    shifted: &[ShiftedStream],
) -> ThermalConductance {
    let supply: ThermalConductance = shifted
        .iter()
        .filter(|stream| stream.supply >= high && stream.target <= low)
        .map(|stream| *stream.capacitance_rate)
        .sum();

    let demand: ThermalConductance = streams
        .iter()
        .filter(|stream| stream.kind() == StreamKind::Cold)
        .filter(|stream| stream.target_temperature() >= high && low >= stream.supply_temperature())
        .map(|stream| *stream.capacitance_rate())
        .sum();

    supply - demand
}

/// Applies the feasibility correction and locates the pinch.
///
/// The minimum hot utility is the magnitude of the most negative raw residual
/// (zero if none is negative). Adding it uniformly lifts every residual to
/// non-negative, since a cascade with any negative residual describes an
/// undeliverable heat flow. The minimum cold utility is whatever the final
/// interval still carries after correction.
fn correct(mut intervals: Vec<CascadeInterval>) -> Cascade {
    let mut worst_deficit = Power::ZERO;
    for interval in &intervals {
        if -interval.raw_residual > worst_deficit {
            worst_deficit = -interval.raw_residual;
        }
    }

    for interval in &mut intervals {
        interval.corrected_residual = interval.raw_residual + worst_deficit;
    }

    let min_cold_utility = intervals
        .last()
        .map_or(Power::ZERO, |interval| interval.corrected_residual);

    Cascade {
        pinch_temperature: locate_pinch(&intervals),
        min_hot_utility: worst_deficit,
        min_cold_utility,
        intervals,
    }
}

/// Finds the pinch: the low boundary of the first interval, scanning
/// hottest-first, whose corrected residual reaches zero.
///
/// The zero check uses a relative tolerance scaled by the largest residual
/// magnitude in the cascade. If floating noise keeps every residual away
/// from zero, the interval with the smallest corrected residual wins
/// instead. Only real intervals participate; there is no sentinel row.
fn locate_pinch(intervals: &[CascadeInterval]) -> Option<ThermodynamicTemperature> {
    if intervals.is_empty() {
        return None;
    }

    let scale = intervals
        .iter()
        .map(|interval| interval.corrected_residual.get::<watt>().abs())
        .fold(1.0, f64::max);
    let tolerance = PINCH_TOLERANCE * scale;

    intervals
        .iter()
        .find(|interval| interval.corrected_residual.get::<watt>().abs() <= tolerance)
        .or_else(|| {
            intervals.iter().min_by(|a, b| {
                a.corrected_residual
                    .partial_cmp(&b.corrected_residual)
                    .expect("corrected residuals are comparable")
            })
        })
        .map(|interval| interval.low)
}

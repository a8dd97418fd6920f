//! Per-stream duty splits at the pinch.

use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::TemperatureDifference;

use super::{
    results::StreamDuty,
    stream::{StreamKind, ThermalStream},
};

/// Splits each stream's total enthalpy change at the pinch.
///
/// The pinch lives on the shifted scale, which coincides with the cold
/// streams' own coordinates. Hot streams were shifted down to reach that
/// scale, so their split point sits one minimum approach above the reported
/// pinch. Clamping the split point to the stream's span leaves streams
/// entirely above or below the pinch with one zero term, and the two parts
/// always sum back to the stream's enthalpy change.
pub(super) fn split_at_pinch(
    streams: &[ThermalStream],
    pinch: ThermodynamicTemperature,
    min_approach: TemperatureInterval,
) -> Vec<StreamDuty> {
    streams
        .iter()
        .map(|stream| duty_split(stream, pinch, min_approach))
        .collect()
}

fn duty_split(
    stream: &ThermalStream,
    pinch: ThermodynamicTemperature,
    min_approach: TemperatureInterval,
) -> StreamDuty {
    let rate = *stream.capacitance_rate();
    let supply = stream.supply_temperature();
    let target = stream.target_temperature();

    let below = match stream.kind() {
        StreamKind::Hot => {
            // A hot stream sees the pinch at its unshifted position.
            let split = clamp(pinch + min_approach, target, supply);
            rate * split.minus(target)
        }
        StreamKind::Cold => {
            let split = clamp(pinch, supply, target);
            rate * split.minus(supply)
        }
    };

    StreamDuty {
        name: stream.name().to_owned(),
        above: stream.enthalpy() - below,
        below,
    }
}

fn clamp(
    value: ThermodynamicTemperature,
    low: ThermodynamicTemperature,
    high: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

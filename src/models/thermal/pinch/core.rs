//! Problem-table cascade for pinch analysis.
//!
//! The computation runs in a fixed stage order, each stage consuming only the
//! previous stage's output:
//!
//! 1. Validate the streams and the minimum approach temperature.
//! 2. Shift every hot stream down by the minimum approach so that hot and
//!    cold streams share one temperature scale ([`stream`]).
//! 3. Decompose the combined stream endpoints into descending temperature
//!    intervals ([`intervals`]).
//! 4. Cascade the interval heat balances top-down, correct the cascade for
//!    feasibility, and locate the pinch ([`cascade`]).
//! 5. Split each stream's duty at the pinch ([`targets`]).

mod cascade;
mod error;
mod intervals;
mod results;
mod stream;
mod targets;

pub use error::PinchError;
pub use results::{CascadeInterval, PinchTargets, StreamDuty};
pub use stream::{CapacitanceRate, StreamKind, ThermalStream};

use uom::si::f64::TemperatureInterval;

use crate::support::constraint::NonNegative;

/// Runs a full pinch analysis over the given streams.
///
/// # Errors
///
/// Returns [`PinchError::MinApproach`] if `min_approach` is negative or NaN.
/// Stream-level validation happens earlier, at [`ThermalStream::new`].
pub(super) fn analyze(
    streams: &[ThermalStream],
    min_approach: TemperatureInterval,
) -> Result<PinchTargets, PinchError> {
    let min_approach = NonNegative::new(min_approach)
        .map_err(PinchError::MinApproach)?
        .into_inner();

    // A lone stream has nothing to exchange heat with.
    if streams.len() < 2 {
        return Ok(PinchTargets::degenerate());
    }

    let shifted = stream::shift_hot_streams(streams, min_approach);

    let boundaries = intervals::boundaries(streams, &shifted);
    if boundaries.len() < 2 {
        return Ok(PinchTargets::degenerate());
    }

    let cascade = cascade::cascade(&boundaries, streams, &shifted);

    let stream_duties = match cascade.pinch_temperature {
        Some(pinch) => targets::split_at_pinch(streams, pinch, min_approach),
        None => Vec::new(),
    };

    Ok(PinchTargets {
        intervals: cascade.intervals,
        pinch_temperature: cascade.pinch_temperature,
        min_hot_utility: cascade.min_hot_utility,
        min_cold_utility: cascade.min_cold_utility,
        stream_duties,
    })
}

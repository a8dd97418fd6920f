//! Temperature-interval decomposition.

use uom::si::f64::ThermodynamicTemperature;

use super::stream::{ShiftedStream, StreamKind, ThermalStream};

/// Collects the distinct interval boundary temperatures, sorted descending.
///
/// Cold-stream endpoints enter unshifted; hot-stream endpoints enter on the
/// shifted scale. Exact duplicates collapse to a single boundary, so the
/// result is strictly descending and consecutive entries bound one interval
/// each, with no gaps or overlaps. Fewer than two boundaries means there is
/// no interval to cascade over.
pub(super) fn boundaries(
    streams: &[ThermalStream],
    shifted: &[ShiftedStream],
) -> Vec<ThermodynamicTemperature> {
    let mut boundaries: Vec<ThermodynamicTemperature> = streams
        .iter()
        .filter(|stream| stream.kind() == StreamKind::Cold)
        .flat_map(|stream| [stream.supply_temperature(), stream.target_temperature()])
        .chain(
            shifted
                .iter()
                .flat_map(|stream| [stream.supply, stream.target]),
        )
        .collect();

    // Stream construction rejects NaN temperatures, so ordering is total.
    boundaries.sort_by(|a, b| {
        b.partial_cmp(a)
            .expect("boundary temperatures are comparable")
    });
    boundaries.dedup();
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{TemperatureInterval, ThermalConductance},
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::models::thermal::pinch::core::stream::shift_hot_streams;

    fn stream(name: &str, supply: f64, target: f64) -> ThermalStream {
        ThermalStream::new(
            name,
            ThermodynamicTemperature::new::<kelvin>(supply),
            ThermodynamicTemperature::new::<kelvin>(target),
            ThermalConductance::new::<watt_per_kelvin>(2.0),
        )
        .unwrap()
    }

    fn as_kelvin(boundaries: &[ThermodynamicTemperature]) -> Vec<f64> {
        boundaries.iter().map(|t| t.get::<kelvin>()).collect()
    }

    #[test]
    fn combines_shifted_hot_and_unshifted_cold_endpoints() {
        let streams = [stream("H1", 200.0, 100.0), stream("C1", 50.0, 150.0)];
        let shifted = shift_hot_streams(&streams, TemperatureInterval::new::<delta_kelvin>(10.0));

        let boundaries = boundaries(&streams, &shifted);

        assert_eq!(as_kelvin(&boundaries), vec![190.0, 150.0, 90.0, 50.0]);
    }

    #[test]
    fn coincident_endpoints_collapse_to_one_boundary() {
        // The shifted hot target lands exactly on the cold supply.
        let streams = [stream("H1", 200.0, 60.0), stream("C1", 50.0, 150.0)];
        let shifted = shift_hot_streams(&streams, TemperatureInterval::new::<delta_kelvin>(10.0));

        let boundaries = boundaries(&streams, &shifted);

        assert_eq!(as_kelvin(&boundaries), vec![190.0, 150.0, 50.0]);
    }

    #[test]
    fn strictly_descending_with_shared_boundaries() {
        let streams = [
            stream("C1", 120.0, 235.0),
            stream("C2", 180.0, 240.0),
            stream("H1", 260.0, 160.0),
            stream("H2", 250.0, 130.0),
        ];
        let shifted = shift_hot_streams(&streams, TemperatureInterval::new::<delta_kelvin>(10.0));

        let boundaries = boundaries(&streams, &shifted);

        for pair in boundaries.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert_eq!(
            as_kelvin(&boundaries),
            vec![250.0, 240.0, 235.0, 180.0, 150.0, 120.0]
        );
    }
}

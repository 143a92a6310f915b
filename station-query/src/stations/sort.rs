//! West-to-east ordering.

use std::cmp::Ordering;

use super::record::StationRecord;

/// Return the stations sorted by ascending longitude.
///
/// The sort is stable, so stations at the same longitude keep their input
/// order. Stations with no longitude go last.
pub fn sort_west_to_east(stations: &[StationRecord]) -> Vec<StationRecord> {
    let mut sorted = stations.to_vec();
    sorted.sort_by(|a, b| compare_lon(a.lon, b.lon));
    sorted
}

fn compare_lon(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Coarse longitudes so ties actually happen.
    fn station_strategy() -> impl Strategy<Value = StationRecord> {
        (
            proptest::option::of(prop_oneof![
                (-800i32..-780).prop_map(|l| l as f64 / 10.0),
                Just(0.0f64),
                Just(-0.0f64),
            ]),
            -90.0f64..90.0,
        )
            .prop_map(|(lon, lat)| StationRecord {
                name: None,
                lat: Some(lat),
                lon,
            })
    }

    proptest! {
        /// Output is a permutation of the input with non-decreasing longitude,
        /// and equal longitudes keep their input order.
        #[test]
        fn sorted_stable_permutation(stations in proptest::collection::vec(station_strategy(), 0..40)) {
            // Tag each record with its input position via the name
            let tagged: Vec<StationRecord> = stations
                .into_iter()
                .enumerate()
                .map(|(i, s)| StationRecord { name: Some(i.to_string()), ..s })
                .collect();

            let sorted = sort_west_to_east(&tagged);
            prop_assert_eq!(sorted.len(), tagged.len());

            let mut indices: Vec<usize> = sorted
                .iter()
                .map(|s| s.name.as_deref().unwrap().parse().unwrap())
                .collect();

            for pair in sorted.windows(2).zip(indices.windows(2)) {
                let (records, idx) = pair;
                let ord = compare_lon(records[0].lon, records[1].lon);
                prop_assert_ne!(ord, Ordering::Greater);
                if ord == Ordering::Equal {
                    prop_assert!(idx[0] < idx[1]);
                }
            }

            indices.sort_unstable();
            prop_assert_eq!(indices, (0..tagged.len()).collect::<Vec<_>>());
        }
    }
}

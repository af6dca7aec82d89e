//! Aggregate figures over a set of matching spots, as shown in the
//! dashboard's stats column.

use model::{parking::ParkingSpot, WithDistance};
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotStats {
    pub matching_spots: usize,
    /// EUR per hour, 0 when nothing matched.
    pub average_fee_per_hour: f64,
    pub total_spots: u64,
    pub available_spots: u64,
    /// Percent of total capacity currently free, 0 when there is none.
    pub availability_rate_percent: f64,
}

pub fn summarize(spots: &[WithDistance<ParkingSpot>]) -> SpotStats {
    let total_spots: u64 = spots.iter().map(|s| u64::from(s.content.total_spots)).sum();
    let available_spots: u64 = spots
        .iter()
        .map(|s| u64::from(s.content.available_spots))
        .sum();

    let average_fee_per_hour = if spots.is_empty() {
        0.0
    } else {
        spots.iter().map(|s| s.content.fee_per_hour).sum::<f64>() / spots.len() as f64
    };

    let availability_rate_percent = if total_spots == 0 {
        0.0
    } else {
        available_spots as f64 / total_spots as f64 * 100.0
    };

    SpotStats {
        matching_spots: spots.len(),
        average_fee_per_hour,
        total_spots,
        available_spots,
        availability_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use model::{parking::Location, ExampleData};

    fn annotated(fee: f64, total: u32, available: u32) -> WithDistance<ParkingSpot> {
        let spot = ParkingSpot {
            fee_per_hour: fee,
            total_spots: total,
            available_spots: available,
            location: Some(Location::new(50.9, 6.9)),
            ..ParkingSpot::example_data()
        };
        WithDistance::new(1.0, spot)
    }

    #[test]
    fn averages_and_rates_over_a_small_set() {
        let spots = vec![annotated(2.0, 100, 30), annotated(4.0, 300, 50)];
        let stats = summarize(&spots);

        assert_eq!(stats.matching_spots, 2);
        assert_relative_eq!(stats.average_fee_per_hour, 3.0);
        assert_eq!(stats.total_spots, 400);
        assert_eq!(stats.available_spots, 80);
        assert_relative_eq!(stats.availability_rate_percent, 20.0);
    }

    #[test]
    fn empty_input_reports_zeroes_instead_of_dividing() {
        let stats = summarize(&[]);
        assert_eq!(stats.matching_spots, 0);
        assert_relative_eq!(stats.average_fee_per_hour, 0.0);
        assert_relative_eq!(stats.availability_rate_percent, 0.0);
    }
}

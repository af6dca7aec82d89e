use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::{ExampleData, WithDistance};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Coordinates parsed from broken rows can carry NaN or infinities.
    /// Those count as missing, never as zero distance.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn distance_km_to(&self, other: &Location) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// A parking facility. `name` is not guaranteed to be unique across the
/// table; records are identified by table position only.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub name: String,
    pub address: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,

    /// `None` when the source row had no usable coordinates. Such records
    /// are excluded from distance filtering, never treated as distance zero.
    pub location: Option<Location>,

    /// Hourly fee in EUR, non-negative.
    pub fee_per_hour: f64,

    pub total_spots: u32,
    /// In `[0, total_spots]`. Externally supplied; this system never
    /// simulates availability.
    pub available_spots: u32,

    pub ev_charging: bool,
    pub open_weekend: bool,
    pub cashless_payment: bool,

    /// Free-text schedule as printed by the operator.
    pub opening_hours: Option<String>,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}

impl ParkingSpot {
    /// Annotates the record with its distance from `origin`. `None` when the
    /// record has no finite coordinates.
    pub fn with_distance_to(self, origin: &Location) -> Option<WithDistance<ParkingSpot>> {
        let location = self.location.filter(Location::is_finite)?;
        Some(WithDistance::new(origin.distance_km_to(&location), self))
    }
}

impl ExampleData for ParkingSpot {
    fn example_data() -> Self {
        ParkingSpot {
            name: "Parkhaus Opern Passagen".to_string(),
            address: "Schwertnergasse 1, 50667 Köln".to_string(),
            postal_code: Some("50667".to_string()),
            city: Some("Cologne".to_string()),
            location: Some(Location::new(50.9386, 6.9482)),
            fee_per_hour: 2.5,
            total_spots: 350,
            available_spots: 45,
            ev_charging: true,
            open_weekend: true,
            cashless_payment: true,
            opening_hours: Some("Tag und Nacht geöffnet".to_string()),
            open_time: None,
            close_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn distance_annotation_at_the_origin_is_zero() {
        let spot = ParkingSpot {
            location: Some(Location::new(50.9375, 6.9603)),
            ..ParkingSpot::example_data()
        };
        let annotated = spot
            .with_distance_to(&Location::new(50.9375, 6.9603))
            .unwrap();
        assert_relative_eq!(annotated.distance_km, 0.0);
    }

    #[test]
    fn missing_location_yields_no_annotation() {
        let spot = ParkingSpot {
            location: None,
            ..ParkingSpot::example_data()
        };
        assert!(spot.with_distance_to(&Location::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn non_finite_location_counts_as_missing() {
        let spot = ParkingSpot {
            location: Some(Location::new(f64::NAN, 6.9603)),
            ..ParkingSpot::example_data()
        };
        assert!(spot.with_distance_to(&Location::new(0.0, 0.0)).is_none());
    }
}

//! Parking table ingestion. The exports this reads are hand-maintained and
//! messy: coordinates may be blank, `ev_charging` is sometimes a charger
//! count and sometimes `-`, opening hours come as bare hour numbers with
//! `24` meaning midnight. Bad rows are skipped with a warning instead of
//! failing the whole load.

use std::{fs::File, io::Read, path::Path};

use chrono::NaiveTime;
use model::parking::{Location, ParkingSpot};
use serde::Deserialize;

use crate::{DatasetError, DatasetResult};

#[derive(Debug, Deserialize)]
struct ParkingRow {
    name: String,
    address: String,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(alias = "lat", default)]
    latitude: Option<f64>,
    #[serde(alias = "lon", default)]
    longitude: Option<f64>,
    fee_per_hour: f64,
    total_spots: u32,
    #[serde(default)]
    available_spots: Option<u32>,
    #[serde(default)]
    ev_charging: Option<String>,
    #[serde(default)]
    open_weekend: Option<String>,
    #[serde(default)]
    cashless_payment: Option<String>,
    #[serde(default)]
    opening_hours: Option<String>,
    #[serde(default)]
    open_time: Option<String>,
    #[serde(default)]
    close_time: Option<String>,
}

impl ParkingRow {
    fn into_spot(self) -> ParkingSpot {
        let location = self
            .latitude
            .zip(self.longitude)
            .map(|(latitude, longitude)| Location::new(latitude, longitude));

        let fee_per_hour = if self.fee_per_hour < 0.0 {
            log::warn!("negative fee for '{}', clamping to zero", self.name);
            0.0
        } else {
            self.fee_per_hour
        };

        let total_spots = self.total_spots;
        let available_spots = self.available_spots.unwrap_or(0).min(total_spots);

        ParkingSpot {
            location,
            fee_per_hour,
            total_spots,
            available_spots,
            ev_charging: parse_flag(self.ev_charging.as_deref()),
            open_weekend: parse_flag(self.open_weekend.as_deref()),
            cashless_payment: parse_flag(self.cashless_payment.as_deref()),
            open_time: self.open_time.as_deref().and_then(parse_open_time),
            close_time: self.close_time.as_deref().and_then(parse_close_time),
            name: self.name,
            address: self.address,
            postal_code: self.postal_code,
            city: self.city,
            opening_hours: self.opening_hours,
        }
    }
}

/// Boolean columns appear as `true`/`false`, `yes`/`no`, `1`/`0`, a plain
/// charger count, or `-` for "none". Anything unrecognized means `false`.
fn parse_flag(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "-" => false,
        "true" | "yes" | "ja" => true,
        "false" | "no" | "nein" => false,
        number => number.parse::<f64>().map(|n| n > 0.0).unwrap_or(false),
    }
}

/// Opening hour column: either `HH:MM` or a bare hour where `24` wraps to
/// midnight.
fn parse_open_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Some(time);
    }
    let hour = value.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
}

/// Closing hour column: a bare hour `h` means open until `h:59`; `24`
/// means the end of the day.
fn parse_close_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Some(time);
    }
    let hour = value.parse::<u32>().ok()?;
    let hour = if hour >= 24 { 23 } else { hour };
    NaiveTime::from_hms_opt(hour, 59, 0)
}

pub fn read_parking_csv(path: impl AsRef<Path>) -> DatasetResult<Vec<ParkingSpot>> {
    let file = File::open(path)?;
    parse_parking_reader(file)
}

pub fn parse_parking_reader<R: Read>(input: R) -> DatasetResult<Vec<ParkingSpot>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut spots = Vec::new();

    for (index, row) in reader.deserialize::<ParkingRow>().enumerate() {
        match row {
            Ok(row) => spots.push(row.into_spot()),
            // Header line is row 1.
            Err(why) => log::warn!("skipping parking row {}: {}", index + 2, why),
        }
    }

    if spots.is_empty() {
        return Err(DatasetError::NoUsableRows);
    }
    Ok(spots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_complete_row() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,available_spots,ev_charging,open_weekend,cashless_payment,open_time,close_time
Tiefgarage Am Dom,Kurt-Hackenbergplatz 2,50.9413,6.9581,3.2,450,89,true,yes,1,06:30,22:00";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();

        assert_eq!(spots.len(), 1);
        let spot = &spots[0];
        assert_eq!(spot.name, "Tiefgarage Am Dom");
        assert_eq!(spot.location.unwrap().latitude, 50.9413);
        assert!(spot.ev_charging && spot.open_weekend && spot.cashless_payment);
        assert_eq!(spot.open_time.unwrap(), NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(spot.close_time.unwrap(), NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }

    #[test]
    fn missing_coordinates_become_a_missing_location() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,ev_charging
Unbekannt,Irgendwo 1,,,2.0,100,false";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();
        assert!(spots[0].location.is_none());
    }

    #[test]
    fn dash_and_charger_counts_in_the_ev_column() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,ev_charging
A,Str. 1,50.0,6.0,2.0,100,-
B,Str. 2,50.0,6.0,2.0,100,4
C,Str. 3,50.0,6.0,2.0,100,0";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();
        assert!(!spots[0].ev_charging);
        assert!(spots[1].ev_charging);
        assert!(!spots[2].ev_charging);
    }

    #[test]
    fn bare_hours_wrap_like_the_source_export() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,ev_charging,open_time,close_time
A,Str. 1,50.0,6.0,2.0,100,false,24,24
B,Str. 2,50.0,6.0,2.0,100,false,7,19";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();

        assert_eq!(spots[0].open_time.unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(spots[0].close_time.unwrap(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(spots[1].open_time.unwrap(), NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(spots[1].close_time.unwrap(), NaiveTime::from_hms_opt(19, 59, 0).unwrap());
    }

    #[test]
    fn short_lat_lon_headers_are_accepted() {
        let csv = "\
name,address,lat,lon,fee_per_hour,total_spots,ev_charging
A,Str. 1,50.9,6.9,2.0,100,true";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();
        assert_eq!(spots[0].location.unwrap().longitude, 6.9);
    }

    #[test]
    fn broken_rows_are_skipped_not_fatal() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,ev_charging
A,Str. 1,50.9,6.9,2.0,100,true
B,Str. 2,50.9,6.9,not-a-fee,100,true";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();
        assert_eq!(spots.len(), 1);
    }

    #[test]
    fn availability_is_clamped_to_capacity() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,available_spots,ev_charging
A,Str. 1,50.9,6.9,2.0,100,250,false";
        let spots = parse_parking_reader(csv.as_bytes()).unwrap();
        assert_eq!(spots[0].available_spots, 100);
    }

    #[test]
    fn a_file_of_only_broken_rows_is_an_error() {
        let csv = "\
name,address,latitude,longitude,fee_per_hour,total_spots,ev_charging
A,Str. 1,x,y,nope,100,true";
        assert!(matches!(
            parse_parking_reader(csv.as_bytes()),
            Err(DatasetError::NoUsableRows)
        ));
    }
}

//! Built-in parking table covering five German cities. Used when no CSV is
//! configured, and as demo data for API consumers.

use model::parking::{Location, ParkingSpot};

#[allow(clippy::too_many_arguments)]
fn spot(
    name: &str,
    address: &str,
    postal_code: &str,
    city: &str,
    latitude: f64,
    longitude: f64,
    fee_per_hour: f64,
    ev_charging: bool,
    total_spots: u32,
    available_spots: u32,
    opening_hours: &str,
    open_weekend: bool,
    cashless_payment: bool,
) -> ParkingSpot {
    ParkingSpot {
        name: name.to_string(),
        address: address.to_string(),
        postal_code: Some(postal_code.to_string()),
        city: Some(city.to_string()),
        location: Some(Location::new(latitude, longitude)),
        fee_per_hour,
        total_spots,
        available_spots,
        ev_charging,
        open_weekend,
        cashless_payment,
        opening_hours: Some(opening_hours.to_string()),
        open_time: None,
        close_time: None,
    }
}

/// The full five-city table. Availability figures are a snapshot shipped
/// with the data, not live.
#[rustfmt::skip]
pub fn seed_spots() -> Vec<ParkingSpot> {
    vec![
        // Berlin
        spot("Tiefgarage Plaza", "Mildred-Harnack-Straße 11-13, 10243 Berlin", "10243", "Berlin", 52.5170, 13.4015, 2.5, true, 400, 45, "24/7", true, true),
        spot("Parkhaus Spandau Altstädter Ring", "Altstädter Ring 20, 13597 Berlin", "13597", "Berlin", 52.5350, 13.2050, 1.5, false, 300, 78, "06:00-22:00", true, false),
        spot("Tiefgarage Hauptbahnhof P1", "Clara-Jaschke-Straße 88, 10557 Berlin", "10557", "Berlin", 52.5250, 13.3693, 3.0, true, 814, 120, "24/7", true, true),
        spot("Parkhaus Europa-Center", "Nürnberger Straße 5-7, 10787 Berlin", "10787", "Berlin", 52.5044, 13.3347, 2.8, true, 954, 230, "24/7", true, true),
        // Munich
        spot("Tiefgarage Hauptbahnhof Süd P4", "Senefelderstraße, 80336 München", "80336", "Munich", 48.1374, 11.5588, 3.0, false, 242, 34, "06:00-22:00", true, false),
        spot("Tiefgarage Stachus", "Herzog-Wilhelm-Straße 11, 80331 München", "80331", "Munich", 48.1395, 11.5661, 2.8, false, 700, 89, "06:00-24:00", true, true),
        spot("Tiefgarage Marienplatz", "Rindermarkt 16, 80331 München", "80331", "Munich", 48.1374, 11.5755, 3.2, true, 265, 12, "07:00-20:00", true, true),
        // Hamburg
        spot("Tiefgarage Am Sandtorkai", "Singapurstraße Haus 2, 20457 Hamburg", "20457", "Hamburg", 53.5438, 9.9955, 2.2, true, 277, 56, "24/7", true, true),
        spot("Parkhaus Speicherstadt", "Am Sandtorkai 6, 20457 Hamburg", "20457", "Hamburg", 53.5441, 9.9899, 2.5, false, 814, 145, "06:00-24:00", true, false),
        spot("Tiefgarage Europa Passage", "Hermannstraße 11, 20095 Hamburg", "20095", "Hamburg", 53.5511, 10.0006, 2.8, false, 720, 98, "09:00-21:00", true, true),
        // Frankfurt
        spot("Tiefgarage Alte Oper", "Opernplatz 1, 60313 Frankfurt am Main", "60313", "Frankfurt", 50.1188, 8.6719, 2.5, true, 402, 67, "24/7", true, true),
        spot("Parkhaus Börse", "Meisengasse, 60313 Frankfurt am Main", "60313", "Frankfurt", 50.1136, 8.6797, 2.5, true, 891, 134, "06:00-24:00", true, true),
        spot("Tiefgarage Hauptbahnhof Nord P1", "Poststraße 3, 60329 Frankfurt am Main", "60329", "Frankfurt", 50.1072, 8.6647, 4.0, true, 365, 89, "24/7", true, true),
        // Cologne
        spot("Parkhaus Opern Passagen", "Schwertnergasse 1, 50667 Köln", "50667", "Cologne", 50.9386, 6.9482, 2.5, true, 350, 45, "Tag und Nacht geöffnet", true, true),
        spot("Tiefgarage Hauptbahnhof", "Am Alten Ufer, 50667 Köln", "50667", "Cologne", 50.9429, 6.9581, 3.0, true, 500, 78, "00:00 - 24:00", true, true),
        spot("Tiefgarage Neptunplatz", "Neptunstraße, 50823 Köln", "50823", "Cologne", 50.9472, 6.9231, 2.0, false, 200, 34, "Mo-Sa: 07:00-01:00, So: 09:00-01:00", true, false),
        spot("Parkhaus Hauptbahnhof Altstadt-Nord P7", "Am Alten Ufer 35, 50668 Köln", "50668", "Cologne", 50.9435, 6.9578, 3.5, true, 400, 120, "Tag und Nacht geöffnet", true, true),
        spot("Parkplatz Maximinenstraße P2", "Maximinenstraße, 50668 Köln", "50668", "Cologne", 50.9418, 6.9602, 2.0, false, 150, 23, "Tag und Nacht geöffnet", true, false),
        spot("Tiefgarage MesseCity", "Deutzer Allee 1, 50679 Köln", "50679", "Cologne", 50.9422, 6.9854, 2.8, true, 600, 156, "Tag und Nacht geöffnet", true, true),
        spot("Tiefgarage Am Dom", "Kurt-Hackenbergplatz 2, 50667 Köln", "50667", "Cologne", 50.9413, 6.9581, 3.2, true, 450, 89, "Tag und Nacht geöffnet", true, true),
        spot("Tiefgarage Heumarkt", "Markmannsgasse 3, 50667 Köln", "50667", "Cologne", 50.9364, 6.9605, 2.5, false, 300, 45, "00:00 - 24:00", true, true),
        spot("Tiefgarage Mülheim", "Jan-Wellem-Straße 2, 51065 Köln", "51065", "Cologne", 50.9632, 7.0078, 1.8, false, 250, 67, "06:00 - 24:00", true, false),
        spot("Tiefgarage Am Willy-Millowitsch-Platz", "Breite Str. 169-177, 50667 Köln", "50667", "Cologne", 50.9335, 6.9524, 2.2, true, 180, 12, "Mo-Fr: 08:00-20:00, Sa: 08:00-20:00, So: geschlossen", false, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_record_is_well_formed() {
        let spots = seed_spots();
        assert_eq!(spots.len(), 23);

        for spot in &spots {
            let location = spot.location.expect("seed records carry coordinates");
            assert!(location.is_finite());
            assert!(spot.fee_per_hour >= 0.0);
            assert!(spot.available_spots <= spot.total_spots);
            assert!(spot.city.is_some());
        }
    }

    #[test]
    fn all_five_cities_are_present() {
        let spots = seed_spots();
        for city in ["Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne"] {
            assert!(spots.iter().any(|s| s.city.as_deref() == Some(city)));
        }
    }
}

//! Spherical geometry for distance filtering. All coordinates are WGS84
//! degrees, all distances are kilometers.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points via the haversine formula.
/// Assumes a spherical Earth, which is accurate enough at city scale.
pub fn haversine_distance(
    from_latitude: f64,
    from_longitude: f64,
    to_latitude: f64,
    to_longitude: f64,
) -> f64 {
    let from_lat = from_latitude.to_radians();
    let to_lat = to_latitude.to_radians();
    let delta_lat = (to_latitude - from_latitude).to_radians();
    let delta_lon = (to_longitude - from_longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Rectangle in degrees that contains the circle of `radius_km` around a
/// center point. Cheap containment check before the haversine evaluation;
/// it over-approximates the circle, never under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

pub fn bounding_box(latitude: f64, longitude: f64, radius_km: f64) -> BoundingBox {
    let lat_delta = (radius_km / EARTH_RADIUS_KM).to_degrees();
    // Longitude degrees shrink towards the poles. The cosine goes to zero
    // there, widening the box to the whole longitude range, which is the
    // safe direction for a prefilter.
    let lon_delta =
        (radius_km / (EARTH_RADIUS_KM * latitude.to_radians().cos().abs())).to_degrees();

    BoundingBox {
        min_latitude: latitude - lat_delta,
        max_latitude: latitude + lat_delta,
        min_longitude: longitude - lon_delta,
        max_longitude: longitude + lon_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::proptest;

    #[test]
    fn distance_of_point_to_itself_is_zero() {
        assert_relative_eq!(haversine_distance(50.9375, 6.9603, 50.9375, 6.9603), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let distance = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(distance, 111.1949, max_relative = 1e-4);
    }

    #[test]
    fn cologne_to_berlin_is_a_plausible_distance() {
        let distance = haversine_distance(50.9375, 6.9603, 52.5200, 13.4050);
        assert!((450.0..500.0).contains(&distance), "got {distance}");
    }

    #[test]
    fn bounding_box_contains_points_within_radius() {
        let center = (50.9375, 6.9603);
        let target = (50.9429, 6.9581);
        let radius = haversine_distance(center.0, center.1, target.0, target.1);
        let bounds = bounding_box(center.0, center.1, radius + 0.01);
        assert!(bounds.contains(target.0, target.1));
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat_a in -80.0..80.0f64,
            lon_a in -180.0..180.0f64,
            lat_b in -80.0..80.0f64,
            lon_b in -180.0..180.0f64,
        ) {
            let there = haversine_distance(lat_a, lon_a, lat_b, lon_b);
            let back = haversine_distance(lat_b, lon_b, lat_a, lon_a);
            assert_relative_eq!(there, back, max_relative = 1e-9);
        }

        #[test]
        fn distance_satisfies_the_triangle_inequality(
            lat_a in -80.0..80.0f64,
            lon_a in -180.0..180.0f64,
            lat_b in -80.0..80.0f64,
            lon_b in -180.0..180.0f64,
            lat_c in -80.0..80.0f64,
            lon_c in -180.0..180.0f64,
        ) {
            let direct = haversine_distance(lat_a, lon_a, lat_c, lon_c);
            let via_b = haversine_distance(lat_a, lon_a, lat_b, lon_b)
                + haversine_distance(lat_b, lon_b, lat_c, lon_c);
            // Small slack for floating point noise on the sphere model.
            assert!(direct <= via_b + 1e-6, "{direct} > {via_b}");
        }

        #[test]
        fn bounding_box_never_cuts_the_circle(
            lat in -60.0..60.0f64,
            lon in -170.0..170.0f64,
            radius in 0.1..50.0f64,
            bearing_lat in -1.0..1.0f64,
            bearing_lon in -1.0..1.0f64,
        ) {
            // A point nudged by less than the radius must stay inside the box.
            let lat_step = (radius / EARTH_RADIUS_KM).to_degrees() * bearing_lat * 0.7;
            let lon_step = (radius / (EARTH_RADIUS_KM * lat.to_radians().cos())).to_degrees()
                * bearing_lon
                * 0.7;
            let bounds = bounding_box(lat, lon, radius);
            assert!(bounds.contains(lat + lat_step, lon + lon_step));
        }
    }
}

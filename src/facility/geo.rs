//! Great-circle distance and travel time helpers
//!
//! Distances use the Haversine formula on a spherical Earth. Travel times are a
//! fixed-speed estimate, not a routing result.

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average urban travel speed used for travel time estimates
pub const AVERAGE_TRAVEL_SPEED_KMH: f64 = 40.0;

/// Calculate the distance between two coordinate points in kilometers (using Haversine formula)
///
/// Inputs are decimal degrees. Out-of-range values are not validated; NaN inputs
/// produce a NaN distance.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two `(latitude, longitude)` pairs
pub fn distance_between(from: (f64, f64), to: (f64, f64)) -> f64 {
    calculate_distance(from.0, from.1, to.0, to.1)
}

/// Estimated travel time in whole minutes at [`AVERAGE_TRAVEL_SPEED_KMH`]
pub fn travel_time_minutes(distance_km: f64) -> u32 {
    (distance_km / AVERAGE_TRAVEL_SPEED_KMH * 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincident_points_have_zero_distance() {
        for &(lat, lon) in &[(0.0, 0.0), (43.25, 76.9), (-33.86, 151.2), (89.9, -179.9)] {
            assert_eq!(calculate_distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((43.25, 76.90), (43.30, 76.95)),
            ((47.6062, -122.3321), (45.5152, -122.6784)),
            ((-12.0, 10.0), (50.0, -80.0)),
        ];

        for (a, b) in pairs {
            let forward = distance_between(a, b);
            let backward = distance_between(b, a);
            assert!((forward - backward).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_distance() {
        // Seattle to Portland is roughly 233 km
        let distance = calculate_distance(47.6062, -122.3321, 45.5152, -122.6784);
        assert!(distance > 225.0 && distance < 240.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = calculate_distance(43.0, 76.9, 44.0, 76.9);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn test_nan_input_propagates() {
        assert!(calculate_distance(f64::NAN, 76.9, 43.25, 76.9).is_nan());
    }

    #[test]
    fn test_travel_time() {
        assert_eq!(travel_time_minutes(0.0), 0);
        assert_eq!(travel_time_minutes(5.0), 8); // 7.5 rounds up
        assert_eq!(travel_time_minutes(40.0), 60);
        assert_eq!(travel_time_minutes(1.0), 2); // 1.5 rounds up
    }
}

//! Qibla direction and distance.
//!
//! Initial great-circle bearing and haversine distance from an observer to
//! the Kaaba on a spherical Earth.

#![allow(clippy::cast_sign_loss)]

use crate::math::{
    abs, atan2, cos, degrees_to_radians, floor, normalize_degrees_0_to_360, radians_to_degrees, sin,
    sqrt,
};
use crate::types::{GeoPosition, QiblaResult};

/// Latitude of the Kaaba in degrees.
pub const KAABA_LATITUDE: f64 = 21.4225;

/// Longitude of the Kaaba in degrees.
pub const KAABA_LONGITUDE: f64 = 39.8262;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this magnitude both bearing components count as zero.
const DEGENERATE_EPSILON: f64 = 1e-12;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Computes the qibla for a validated position.
///
/// # Example
/// ```
/// use miqat::{compute_qibla, GeoPosition};
///
/// let istanbul = GeoPosition::new(41.0082, 28.9784).unwrap();
/// let qibla = compute_qibla(&istanbul);
///
/// let bearing = qibla.bearing_degrees().unwrap();
/// assert!((bearing - 151.6).abs() < 0.5);
/// assert!((qibla.distance_km() - 2405.0).abs() < 10.0);
/// assert_eq!(qibla.compass_point(), Some("SSE"));
/// ```
#[must_use]
pub fn compute_qibla(position: &GeoPosition) -> QiblaResult {
    qibla_from_coordinates(position.latitude(), position.longitude())
}

/// Computes the qibla from raw coordinates without range validation.
///
/// Longitudes outside [-180, 180] are accepted and behave periodically, so
/// `L`, `L + 360` and `L - 360` give the same result. The bearing is `None`
/// at the Kaaba and at its antipode, where every direction is a shortest path,
/// and for non-finite coordinates, whose distance is NaN.
#[must_use]
pub fn qibla_from_coordinates(latitude: f64, longitude: f64) -> QiblaResult {
    let phi1 = degrees_to_radians(latitude);
    let phi2 = degrees_to_radians(KAABA_LATITUDE);
    let delta_lambda = degrees_to_radians(KAABA_LONGITUDE - longitude);

    let y = sin(delta_lambda) * cos(phi2);
    let x = cos(phi1) * sin(phi2) - sin(phi1) * cos(phi2) * cos(delta_lambda);

    let raw_bearing = atan2(y, x);
    let bearing = if (abs(y) < DEGENERATE_EPSILON && abs(x) < DEGENERATE_EPSILON)
        || !raw_bearing.is_finite()
    {
        log::debug!("qibla bearing undefined at ({latitude}, {longitude})");
        None
    } else {
        Some(normalize_degrees_0_to_360(radians_to_degrees(raw_bearing)))
    };

    let half_dphi = sin((phi2 - phi1) / 2.0);
    let half_dlambda = sin(delta_lambda / 2.0);
    let a = half_dphi * half_dphi + cos(phi1) * cos(phi2) * half_dlambda * half_dlambda;
    // Rounding can push `a` just past 1; NaN passes through
    let a = if a > 1.0 { 1.0 } else { a };
    let distance_km = 2.0 * EARTH_RADIUS_KM * atan2(sqrt(a), sqrt(1.0 - a));

    QiblaResult::new(bearing, distance_km)
}

/// 16-wind compass label for a bearing in degrees.
///
/// # Example
/// ```
/// # use miqat::qibla::compass_point;
/// assert_eq!(compass_point(0.0), "N");
/// assert_eq!(compass_point(151.6), "SSE");
/// assert_eq!(compass_point(359.0), "N");
/// ```
#[must_use]
pub fn compass_point(bearing_degrees: f64) -> &'static str {
    let sector = floor((normalize_degrees_0_to_360(bearing_degrees) + 11.25) / 22.5) as usize;
    COMPASS_POINTS[sector % COMPASS_POINTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearing(latitude: f64, longitude: f64) -> f64 {
        qibla_from_coordinates(latitude, longitude)
            .bearing_degrees()
            .unwrap()
    }

    #[test]
    fn test_known_cities() {
        let cases = [
            // (latitude, longitude, bearing, distance)
            (41.0082, 28.9784, 151.6206, 2405.07),
            (40.7128, -74.0060, 58.4817, 10306.31),
            (51.5074, -0.1278, 118.9872, 4793.78),
            (-6.2088, 106.8456, 295.1517, 7920.13),
            (-33.8688, 151.2093, 277.4996, 13236.26),
            (30.0444, 31.2357, 136.1373, 1287.22),
            (24.4672, 39.6024, 176.0835, 339.33),
        ];
        for (latitude, longitude, expected_bearing, expected_distance) in cases {
            let result = qibla_from_coordinates(latitude, longitude);
            assert!((result.bearing_degrees().unwrap() - expected_bearing).abs() < 1e-3);
            assert!((result.distance_km() - expected_distance).abs() < 0.01);
        }
    }

    #[test]
    fn test_kaaba_itself_is_degenerate() {
        let result = qibla_from_coordinates(KAABA_LATITUDE, KAABA_LONGITUDE);
        assert!(result.is_degenerate());
        assert_eq!(result.bearing_degrees(), None);
        assert!(result.distance_km().abs() < 1e-9);
    }

    #[test]
    fn test_antipode_is_degenerate() {
        let result = qibla_from_coordinates(-KAABA_LATITUDE, KAABA_LONGITUDE - 180.0);
        assert!(result.is_degenerate());
        // Half the circumference
        assert!((result.distance_km() - core::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-3);
    }

    #[test]
    fn test_non_finite_coordinates_have_no_bearing() {
        for (latitude, longitude) in [
            (f64::NAN, 28.9784),
            (41.0082, f64::NAN),
            (41.0082, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
        ] {
            let result = qibla_from_coordinates(latitude, longitude);
            assert!(result.is_degenerate(), "({latitude}, {longitude})");
            assert_eq!(result.compass_point(), None);
            assert!(result.distance_km().is_nan());
        }
    }

    #[test]
    fn test_longitude_wrap_symmetry() {
        for (latitude, longitude) in [(41.0082, 28.9784), (-33.8688, 151.2093), (64.1466, -21.9426)] {
            let base = bearing(latitude, longitude);
            assert!((bearing(latitude, longitude + 360.0) - base).abs() < 1e-9);
            assert!((bearing(latitude, longitude - 360.0) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_poles_have_defined_bearing() {
        // At a pole the bearing follows the meridian convention of the input longitude
        assert!((bearing(90.0, 0.0) - 140.1738).abs() < 1e-3);
        assert!((bearing(-90.0, 0.0) - 39.8262).abs() < 1e-3);
    }

    #[test]
    fn test_bearing_range() {
        for latitude in (-89..=89).step_by(7) {
            for longitude in (-180..=180).step_by(13) {
                let result = qibla_from_coordinates(f64::from(latitude), f64::from(longitude));
                if let Some(b) = result.bearing_degrees() {
                    assert!((0.0..360.0).contains(&b));
                }
                assert!(result.distance_km() >= 0.0);
                assert!(result.distance_km() <= core::f64::consts::PI * EARTH_RADIUS_KM + 1e-3);
            }
        }
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(11.24), "N");
        assert_eq!(compass_point(11.25), "NNE");
        assert_eq!(compass_point(58.48), "ENE");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(118.99), "ESE");
        assert_eq!(compass_point(176.08), "S");
        assert_eq!(compass_point(277.5), "W");
        assert_eq!(compass_point(295.15), "WNW");
        assert_eq!(compass_point(348.76), "N");
        assert_eq!(compass_point(-90.0), "W");
    }

    #[test]
    fn test_validated_entry_point() {
        let position = GeoPosition::new(41.0082, 28.9784).unwrap();
        assert_eq!(compute_qibla(&position), qibla_from_coordinates(41.0082, 28.9784));
    }
}

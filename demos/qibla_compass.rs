//! Qibla bearing and great-circle distance for a handful of cities.

use miqat::{compute_qibla, GeoPosition};

const CITIES: [(&str, f64, f64); 6] = [
    ("Istanbul", 41.0082, 28.9784),
    ("London", 51.5074, -0.1278),
    ("New York", 40.7128, -74.0060),
    ("Jakarta", -6.2088, 106.8456),
    ("Sydney", -33.8688, 151.2093),
    ("Mecca", 21.4225, 39.8262),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (name, latitude, longitude) in CITIES {
        let qibla = compute_qibla(&GeoPosition::new(latitude, longitude)?);

        match (qibla.bearing_degrees(), qibla.compass_point()) {
            (Some(bearing), Some(point)) => println!(
                "{name:<10} {bearing:>7.2}° {point:<3} {:>9.1} km",
                qibla.distance_km()
            ),
            _ => println!("{name:<10} at the Kaaba, any direction"),
        }
    }

    Ok(())
}

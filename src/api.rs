//! Request/response boundary for an external API layer.
//!
//! The DTOs use camelCase field names on the wire. Every request is validated
//! here before any trigonometry runs; the solvers themselves only ever see
//! validated values.

use crate::error::{check_coordinates, check_timezone_offset};
use crate::math::floor;
use crate::method::MethodRegistry;
use crate::prayer::{compute_prayer_times_with_options, HighLatitudeRule, SolverOptions};
use crate::qibla::qibla_from_coordinates;
use crate::time::CalendarDate;
use crate::types::{DayKind, GeoPosition};
use crate::{Error, Result};

/// Prayer time request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesRequest {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Elevation above sea level in meters, 0 when absent
    #[serde(default)]
    pub elevation_meters: Option<f64>,
    /// Civil date as `YYYY-MM-DD`
    pub date: String,
    /// Hours east of UTC
    pub timezone_offset_hours: f64,
    /// Calculation method identifier
    #[serde(default)]
    pub method_id: Option<String>,
    /// ISO 3166-1 alpha-2 country code, used when `method_id` is absent
    #[serde(default)]
    pub country_code: Option<String>,
    /// Placement rule for unreachable twilight angles
    #[serde(default)]
    pub high_latitude_rule: Option<HighLatitudeRule>,
}

/// Prayer time response with `HH:MM` local clock times.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesResponse {
    /// Dawn
    pub fajr: String,
    /// Sunrise
    pub sunrise: String,
    /// Solar noon
    pub dhuhr: String,
    /// Afternoon
    pub asr: String,
    /// Sunset
    pub maghrib: String,
    /// Night
    pub isha: String,
    /// Echo of the requested date
    pub date: String,
    /// Echo of the requested position, `"lat, lon"` with four decimals
    pub location: String,
    /// Identifier of the method actually used
    pub method: String,
    /// Names of the events placed by the high-latitude fallback
    pub estimated: Vec<String>,
    /// Whether the sun rose and set on the date
    pub day_kind: DayKind,
}

/// Qibla request.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QiblaRequest {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Qibla response, numbers rounded to two decimals.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QiblaResponse {
    /// Initial bearing, `null` at the Kaaba and its antipode
    pub bearing_degrees: Option<f64>,
    /// Great-circle distance
    pub distance_km: f64,
    /// 16-wind compass label, `null` when the bearing is undefined
    pub compass: Option<String>,
}

fn round2(value: f64) -> f64 {
    floor(value * 100.0 + 0.5) / 100.0
}

/// Validates a prayer time request, resolves its method and computes the times.
///
/// # Errors
/// Returns an `InvalidInput`-family error for out-of-range coordinates,
/// elevation, timezone or malformed dates, `MissingMethod` when neither a
/// method nor a country is given, and `UnknownMethod`/`UnknownCountry` for
/// identifiers absent from `registry`.
pub fn prayer_times(
    request: &PrayerTimesRequest,
    registry: &MethodRegistry,
) -> Result<PrayerTimesResponse> {
    let position = GeoPosition::with_elevation(
        request.latitude,
        request.longitude,
        request.elevation_meters.unwrap_or(0.0),
    )?;
    let date: CalendarDate = request.date.parse()?;
    check_timezone_offset(request.timezone_offset_hours)?;

    let method = match (&request.method_id, &request.country_code) {
        (Some(method_id), _) => registry.resolve(method_id)?,
        (None, Some(country_code)) => registry.resolve_country_method(country_code)?,
        (None, None) => return Err(Error::MissingMethod),
    };

    let options = SolverOptions {
        high_latitude_rule: request.high_latitude_rule.unwrap_or_default(),
        ..SolverOptions::default()
    };
    let times = compute_prayer_times_with_options(
        &position,
        date,
        request.timezone_offset_hours,
        method,
        &options,
    )?;

    let estimated = times
        .iter()
        .filter(|&(prayer, _)| times.is_estimated(prayer))
        .map(|(prayer, _)| prayer.name().to_string())
        .collect();

    Ok(PrayerTimesResponse {
        fajr: times.fajr().to_string(),
        sunrise: times.sunrise().to_string(),
        dhuhr: times.dhuhr().to_string(),
        asr: times.asr().to_string(),
        maghrib: times.maghrib().to_string(),
        isha: times.isha().to_string(),
        date: date.to_string(),
        location: format!("{:.4}, {:.4}", position.latitude(), position.longitude()),
        method: method.id().to_string(),
        estimated,
        day_kind: times.day_kind(),
    })
}

/// Validates a qibla request and computes bearing and distance.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn qibla(request: &QiblaRequest) -> Result<QiblaResponse> {
    check_coordinates(request.latitude, request.longitude)?;
    let result = qibla_from_coordinates(request.latitude, request.longitude);

    Ok(QiblaResponse {
        bearing_degrees: result.bearing_degrees().map(round2),
        distance_km: round2(result.distance_km()),
        compass: result.compass_point().map(ToString::to_string),
    })
}

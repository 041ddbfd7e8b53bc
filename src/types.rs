//! Core data types for prayer time and qibla calculations.

use crate::error::{check_coordinates, check_elevation};
use crate::time::ClockTime;
use crate::Result;

/// Observer position on the Earth's surface.
///
/// Only constructible through validating constructors, so a `GeoPosition`
/// always holds a latitude in [-90, 90], a longitude in [-180, 180] and a
/// non-negative elevation.
///
/// # Example
/// ```
/// # use miqat::GeoPosition;
/// let istanbul = GeoPosition::new(41.0082, 28.9784).unwrap();
/// assert_eq!(istanbul.elevation_meters(), 0.0);
///
/// let ankara = GeoPosition::with_elevation(39.9334, 32.8597, 938.0).unwrap();
/// assert_eq!(ankara.elevation_meters(), 938.0);
///
/// assert!(GeoPosition::new(91.0, 0.0).is_err());
/// assert!(GeoPosition::with_elevation(0.0, 0.0, -5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
    elevation_meters: f64,
}

impl GeoPosition {
    /// Creates a sea-level position.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_elevation(latitude, longitude, 0.0)
    }

    /// Creates a position with an elevation above sea level.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation`.
    pub fn with_elevation(latitude: f64, longitude: f64, elevation_meters: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation_meters)?;
        Ok(Self {
            latitude,
            longitude,
            elevation_meters,
        })
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation above sea level in meters.
    #[must_use]
    pub const fn elevation_meters(&self) -> f64 {
        self.elevation_meters
    }
}

/// The six daily time boundaries, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    /// Dawn prayer, begins at true dawn
    Fajr,
    /// Sunrise, ends the fajr window
    Sunrise,
    /// Noon prayer, begins at solar transit
    Dhuhr,
    /// Afternoon prayer, begins at the shadow-ratio threshold
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer, begins at the end of dusk
    Isha,
}

impl Prayer {
    /// All events in chronological order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Lower-case name as used on the wire.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Whether the sun crossed the horizon on the calculation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DayKind {
    /// Regular day with distinct sunrise and sunset
    Regular,
    /// Polar day - sun remains above the horizon all day
    PolarDay,
    /// Polar night - sun remains below the horizon all day
    PolarNight,
}

/// Prayer times for one civil date at one position.
///
/// Times are stored unrounded; see [`ClockTime`]. Events produced by the
/// high-latitude fallback are flagged via [`PrayerTimes::is_estimated`] so that
/// user interfaces can disclose them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    times: [ClockTime; 6],
    estimated: [bool; 6],
    day_kind: DayKind,
}

impl PrayerTimes {
    pub(crate) const fn new(times: [ClockTime; 6], estimated: [bool; 6], day_kind: DayKind) -> Self {
        Self {
            times,
            estimated,
            day_kind,
        }
    }

    /// Gets the time of a single event.
    #[must_use]
    pub const fn get(&self, prayer: Prayer) -> ClockTime {
        self.times[prayer.index()]
    }

    /// Gets the fajr (dawn) time.
    #[must_use]
    pub const fn fajr(&self) -> ClockTime {
        self.get(Prayer::Fajr)
    }

    /// Gets the sunrise time.
    #[must_use]
    pub const fn sunrise(&self) -> ClockTime {
        self.get(Prayer::Sunrise)
    }

    /// Gets the dhuhr (solar noon) time.
    #[must_use]
    pub const fn dhuhr(&self) -> ClockTime {
        self.get(Prayer::Dhuhr)
    }

    /// Gets the asr (afternoon) time.
    #[must_use]
    pub const fn asr(&self) -> ClockTime {
        self.get(Prayer::Asr)
    }

    /// Gets the maghrib (sunset) time.
    #[must_use]
    pub const fn maghrib(&self) -> ClockTime {
        self.get(Prayer::Maghrib)
    }

    /// Gets the isha (night) time.
    #[must_use]
    pub const fn isha(&self) -> ClockTime {
        self.get(Prayer::Isha)
    }

    /// Whether the sun rose and set on this date.
    #[must_use]
    pub const fn day_kind(&self) -> DayKind {
        self.day_kind
    }

    /// Checks if an event was placed by the high-latitude fallback.
    #[must_use]
    pub const fn is_estimated(&self, prayer: Prayer) -> bool {
        self.estimated[prayer.index()]
    }

    /// Checks if any event was placed by the high-latitude fallback.
    #[must_use]
    pub fn uses_fallback(&self) -> bool {
        self.estimated.iter().any(|&e| e)
    }

    /// Iterates over all events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, ClockTime)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Checks that fajr < sunrise < dhuhr < asr < maghrib < isha on the unrounded values.
    #[must_use]
    pub fn is_strictly_ordered(&self) -> bool {
        self.times.windows(2).all(|w| w[0].hours() < w[1].hours())
    }
}

/// Direction and distance from an observer to the Kaaba.
///
/// The bearing is `None` when it is undefined: at the Kaaba itself and at its
/// antipode every direction is equivalent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaResult {
    bearing_degrees: Option<f64>,
    distance_km: f64,
}

impl QiblaResult {
    pub(crate) const fn new(bearing_degrees: Option<f64>, distance_km: f64) -> Self {
        Self {
            bearing_degrees,
            distance_km,
        }
    }

    /// Initial great-circle bearing in degrees (0° = true north, clockwise, [0, 360)).
    #[must_use]
    pub const fn bearing_degrees(&self) -> Option<f64> {
        self.bearing_degrees
    }

    /// Great-circle distance in kilometers.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Checks if the bearing is undefined.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.bearing_degrees.is_none()
    }

    /// 16-wind compass label of the bearing, e.g. `"SSE"`.
    #[must_use]
    pub fn compass_point(&self) -> Option<&'static str> {
        self.bearing_degrees.map(crate::qibla::compass_point)
    }
}

//! Error types for the prayer time and qibla engine.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported synchronously at the input boundary.
///
/// Polar day and polar night are not errors: they are handled by the
/// high-latitude fallback and flagged on [`PrayerTimes`](crate::PrayerTimes).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite and not negative).
    InvalidElevation {
        /// The invalid elevation value provided, in meters.
        value: f64,
    },
    /// Invalid timezone offset (must be between -12 and +14 hours).
    InvalidTimezoneOffset {
        /// The invalid offset value provided, in hours.
        value: f64,
    },
    /// Malformed or out-of-range calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Calculation method parameters outside the accepted ranges.
    InvalidMethodParameter {
        /// Description of the parameter constraint violation.
        message: &'static str,
    },
    /// A request carried neither a method identifier nor a country code.
    MissingMethod,
    /// Method identifier not present in the registry.
    UnknownMethod,
    /// Country code without a default calculation method.
    UnknownCountry,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must not be negative)")
            }
            Self::InvalidTimezoneOffset { value } => {
                write!(
                    f,
                    "invalid timezone offset {value} h (must be between -12 and +14)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidMethodParameter { message } => {
                write!(f, "invalid calculation method: {message}")
            }
            Self::MissingMethod => {
                write!(f, "either a method identifier or a country code is required")
            }
            Self::UnknownMethod => write!(f, "unknown calculation method"),
            Self::UnknownCountry => write!(f, "no default calculation method for country"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid timezone offset error.
    #[must_use]
    pub const fn invalid_timezone_offset(value: f64) -> Self {
        Self::InvalidTimezoneOffset { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid method parameter error.
    #[must_use]
    pub const fn invalid_method_parameter(message: &'static str) -> Self {
        Self::InvalidMethodParameter { message }
    }

    /// Whether this error stems from malformed caller input rather than an
    /// identifier lookup.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::UnknownMethod | Self::UnknownCountry)
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates elevation is finite and not below sea level.
///
/// # Errors
/// Returns `InvalidElevation` for negative or non-finite values.
pub fn check_elevation(elevation_meters: f64) -> Result<()> {
    if !elevation_meters.is_finite() || elevation_meters < 0.0 {
        return Err(Error::invalid_elevation(elevation_meters));
    }
    Ok(())
}

/// Validates a timezone offset in hours east of UTC.
///
/// Fractional offsets (+5.5, +5.75, -3.5) are accepted.
///
/// # Errors
/// Returns `InvalidTimezoneOffset` if the offset is outside -12 to +14 hours.
pub fn check_timezone_offset(offset_hours: f64) -> Result<()> {
    if !(-12.0..=14.0).contains(&offset_hours) {
        return Err(Error::invalid_timezone_offset(offset_hours));
    }
    Ok(())
}

//! Prayer time solver.
//!
//! Every boundary is found by a closed-form hour-angle solve around solar
//! noon:
//!
//! ```text
//! cos H = (sin a - sin φ sin δ) / (cos φ cos δ)
//! ```
//!
//! where `a` is the target solar altitude, `φ` the latitude and `δ` the
//! declination. Morning events sit `H/15` hours before noon, evening events
//! `H/15` hours after.
//!
//! ## High latitudes
//!
//! When the sun never crosses the horizon (polar day or polar night) the day
//! is split evenly: sunrise and sunset are placed six hours either side of
//! solar noon and every other event is derived from that split. When the
//! horizon is crossed but the twilight angle is never reached (white nights),
//! fajr and isha are placed a fraction of the night away from sunrise and
//! sunset according to [`HighLatitudeRule`]. Events placed this way are
//! flagged via [`PrayerTimes::is_estimated`].

#![allow(clippy::many_single_char_names)]

use crate::error::check_timezone_offset;
use crate::math::{abs, acos, atan, cos, degrees_to_radians, radians_to_degrees, sin, sqrt, tan};
use crate::method::{CalculationMethod, DuskRule};
use crate::sun::SolarCoordinates;
use crate::time::{CalendarDate, ClockTime};
use crate::types::{DayKind, GeoPosition, Prayer, PrayerTimes};
use crate::Result;

/// Apparent altitude of the sun's upper limb at sunrise and sunset, in degrees.
///
/// Accounts for standard atmospheric refraction and the solar semi-diameter.
pub const SUNRISE_SUNSET_ALTITUDE: f64 = -0.833;

/// Horizon dip per square root of observer elevation in meters, in degrees.
pub const ELEVATION_DIP_COEFFICIENT: f64 = 0.0347;

/// Hours between solar noon and the synthetic sunrise/sunset of a polar day or night.
const POLAR_HALF_DAY_HOURS: f64 = 6.0;

/// How fajr and isha are placed when the twilight angle is never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum HighLatitudeRule {
    /// Portion of the night equal to the twilight angle divided by 60
    #[default]
    AngleBased,
    /// One seventh of the night
    OneSeventh,
    /// Half of the night
    MiddleOfNight,
}

impl HighLatitudeRule {
    /// Fraction of the night between the twilight event and sunrise or sunset.
    ///
    /// # Example
    /// ```
    /// # use miqat::HighLatitudeRule;
    /// assert_eq!(HighLatitudeRule::AngleBased.night_portion(18.0), 0.3);
    /// assert_eq!(HighLatitudeRule::MiddleOfNight.night_portion(18.0), 0.5);
    /// ```
    #[must_use]
    pub fn night_portion(&self, angle_degrees: f64) -> f64 {
        match self {
            Self::AngleBased => angle_degrees / 60.0,
            Self::OneSeventh => 1.0 / 7.0,
            Self::MiddleOfNight => 0.5,
        }
    }
}

/// Runtime options of the solver.
///
/// Hosts can embed this in their own configuration; with the `serde` feature it
/// deserializes from e.g. `{"highLatitudeRule": "oneSeventh"}` with missing
/// fields taking their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SolverOptions {
    /// Placement of fajr and isha when the twilight angle is never reached
    pub high_latitude_rule: HighLatitudeRule,
    /// Lower the sunrise/sunset altitude by the horizon dip of an elevated observer
    pub elevation_correction: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            high_latitude_rule: HighLatitudeRule::default(),
            elevation_correction: true,
        }
    }
}

/// Outcome of an hour-angle solve for one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
enum HourAngle {
    /// Altitude crossed; hour angle in hours, strictly between 0 and 12
    Crossed(f64),
    /// Sun stays above the altitude all day
    AlwaysAbove,
    /// Sun stays below the altitude all day
    AlwaysBelow,
}

impl HourAngle {
    const fn hours(self) -> Option<f64> {
        match self {
            Self::Crossed(hours) => Some(hours),
            Self::AlwaysAbove | Self::AlwaysBelow => None,
        }
    }
}

fn solve_hour_angle(latitude: f64, declination: f64, altitude: f64) -> HourAngle {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let cos_h = (sin(degrees_to_radians(altitude)) - sin(phi) * sin(delta)) / (cos(phi) * cos(delta));

    if cos_h <= -1.0 {
        HourAngle::AlwaysAbove
    } else if cos_h >= 1.0 || cos_h.is_nan() {
        HourAngle::AlwaysBelow
    } else {
        HourAngle::Crossed(radians_to_degrees(acos(cos_h)) / 15.0)
    }
}

/// Solar altitude at which an object's shadow is `shadow_factor` times its
/// length plus the noon shadow. `None` when the sun never climbs above the horizon.
fn asr_altitude(latitude: f64, declination: f64, shadow_factor: f64) -> Option<f64> {
    let noon_zenith = degrees_to_radians(abs(latitude - declination));
    let cotangent = shadow_factor + tan(noon_zenith);
    (cotangent > 0.0).then(|| radians_to_degrees(atan(1.0 / cotangent)))
}

fn horizon_altitude(elevation_meters: f64, options: &SolverOptions) -> f64 {
    if options.elevation_correction {
        SUNRISE_SUNSET_ALTITUDE - ELEVATION_DIP_COEFFICIENT * sqrt(elevation_meters)
    } else {
        SUNRISE_SUNSET_ALTITUDE
    }
}

/// Computes the six daily boundaries with default [`SolverOptions`].
///
/// # Arguments
/// * `position` - Observer position (validated on construction)
/// * `date` - Civil date in the observer's timezone
/// * `timezone_offset_hours` - Hours east of UTC, may be fractional
/// * `method` - Calculation method parameters
///
/// # Errors
/// Returns `InvalidTimezoneOffset` for offsets outside -12 to +14 hours and
/// `InvalidMethodParameter` for out-of-range method parameters.
///
/// # Example
/// ```
/// use miqat::{compute_prayer_times, CalendarDate, GeoPosition, MethodRegistry};
///
/// let istanbul = GeoPosition::new(41.0082, 28.9784).unwrap();
/// let date = CalendarDate::new(2024, 6, 15).unwrap();
/// let method = MethodRegistry::standard().resolve("Diyanet").unwrap();
///
/// let times = compute_prayer_times(&istanbul, date, 3.0, method).unwrap();
/// assert_eq!(times.fajr().to_string(), "03:24");
/// assert_eq!(times.dhuhr().to_string(), "13:05");
/// assert!(times.is_strictly_ordered());
/// ```
pub fn compute_prayer_times(
    position: &GeoPosition,
    date: CalendarDate,
    timezone_offset_hours: f64,
    method: &CalculationMethod,
) -> Result<PrayerTimes> {
    compute_prayer_times_with_options(
        position,
        date,
        timezone_offset_hours,
        method,
        &SolverOptions::default(),
    )
}

/// Computes the six daily boundaries.
///
/// Times are local clock hours on `date`, unrounded. Isha may exceed 24 h and
/// fajr may be negative when they spill into the adjacent day.
///
/// # Errors
/// Returns `InvalidTimezoneOffset` for offsets outside -12 to +14 hours and
/// `InvalidMethodParameter` for out-of-range method parameters.
pub fn compute_prayer_times_with_options(
    position: &GeoPosition,
    date: CalendarDate,
    timezone_offset_hours: f64,
    method: &CalculationMethod,
    options: &SolverOptions,
) -> Result<PrayerTimes> {
    check_timezone_offset(timezone_offset_hours)?;
    method.validate()?;

    let latitude = position.latitude();
    let sun = SolarCoordinates::at_local_noon(date, timezone_offset_hours);
    let declination = sun.declination();
    let noon = sun.transit_hours(position.longitude(), timezone_offset_hours);

    log::debug!(
        "{date} at ({latitude}, {}): noon {noon:.4} h, declination {declination:.4}°, \
         equation of time {:.2} min",
        position.longitude(),
        sun.equation_of_time_minutes()
    );

    let mut estimated = [false; 6];
    let mut flag = |prayer: Prayer| estimated[prayer as usize] = true;

    let horizon = horizon_altitude(position.elevation_meters(), options);
    let (day_kind, half_day) = match solve_hour_angle(latitude, declination, horizon) {
        HourAngle::Crossed(hours) => (DayKind::Regular, hours),
        HourAngle::AlwaysAbove => (DayKind::PolarDay, POLAR_HALF_DAY_HOURS),
        HourAngle::AlwaysBelow => (DayKind::PolarNight, POLAR_HALF_DAY_HOURS),
    };
    let regular = day_kind == DayKind::Regular;
    if !regular {
        log::warn!(
            "{date} at latitude {latitude}: sun does not cross the horizon ({day_kind:?}), \
             splitting the day evenly around noon"
        );
        flag(Prayer::Sunrise);
        flag(Prayer::Maghrib);
    }

    let sunrise = noon - half_day;
    let sunset = noon + half_day;
    let night = 24.0 - 2.0 * half_day;
    let rule = options.high_latitude_rule;

    // A twilight altitude at or above the (dipped) horizon would land fajr
    // after sunrise and isha before sunset, so it takes the fallback too.
    let twilight = |angle: f64| {
        if regular && -angle < horizon {
            solve_hour_angle(latitude, declination, -angle).hours()
        } else {
            None
        }
    };

    let dawn_angle = method.dawn_angle_degrees();
    let fajr = match twilight(dawn_angle) {
        Some(hours) => noon - hours,
        None => {
            if regular {
                log::warn!("{date} at latitude {latitude}: no dawn crossing at {dawn_angle}° below a {horizon:.3}° horizon, using {rule:?}");
            }
            flag(Prayer::Fajr);
            sunrise - rule.night_portion(dawn_angle) * night
        }
    };

    let isha = match method.dusk_rule() {
        DuskRule::MinutesAfterSunset(minutes) => {
            if !regular {
                flag(Prayer::Isha);
            }
            sunset + minutes / 60.0
        }
        DuskRule::Angle(dusk_angle) => match twilight(dusk_angle) {
            Some(hours) => noon + hours,
            None => {
                if regular {
                    log::warn!("{date} at latitude {latitude}: no dusk crossing at {dusk_angle}° below a {horizon:.3}° horizon, using {rule:?}");
                }
                flag(Prayer::Isha);
                sunset + rule.night_portion(dusk_angle) * night
            }
        },
    };

    let asr_shadow = method.asr_shadow();
    let asr_hours = if regular {
        asr_altitude(latitude, declination, asr_shadow.factor())
            .and_then(|altitude| solve_hour_angle(latitude, declination, altitude).hours())
    } else {
        None
    };
    let asr = match asr_hours {
        Some(hours) => noon + hours,
        None => {
            if regular {
                log::warn!("{date} at latitude {latitude}: asr shadow length not reached, using day fraction");
            }
            flag(Prayer::Asr);
            noon + asr_shadow.equinox_day_fraction() * (sunset - noon)
        }
    };

    let times = [fajr, sunrise, noon, asr, sunset, isha].map(ClockTime::from_hours);
    Ok(PrayerTimes::new(times, estimated, day_kind))
}

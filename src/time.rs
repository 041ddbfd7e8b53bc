//! Civil calendar and clock-time handling.
//!
//! Dates are proleptic Gregorian. Julian day numbers follow the
//! Fliegel & Van Flandern integer formulation, which is exact for every
//! proleptic Gregorian date in the supported range.

use crate::math::floor;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

const MINUTES_PER_DAY: i64 = 1440;

/// A validated proleptic Gregorian calendar date.
///
/// # Example
/// ```
/// # use miqat::CalendarDate;
/// let date: CalendarDate = "2024-06-15".parse().unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.to_string(), "2024-06-15");
/// assert!("2024-02-30".parse::<CalendarDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is outside 1-9999, the month outside
    /// 1-12, or the day does not exist in the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::invalid_date("year must be between 1 and 9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number, i.e. the Julian date at 12:00 UT on this date.
    #[must_use]
    pub fn julian_day_number(&self) -> i64 {
        let a = (14 - i64::from(self.month)) / 12;
        let y = i64::from(self.year) + 4800 - a;
        let m = i64::from(self.month) + 12 * a - 3;
        i64::from(self.day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Julian date of local civil noon for a timezone `offset_hours` east of UTC.
    #[must_use]
    pub fn julian_date_at_local_noon(&self, offset_hours: f64) -> f64 {
        self.julian_day_number() as f64 - offset_hours / 24.0
    }

    /// Days elapsed since the J2000.0 epoch at local civil noon.
    #[must_use]
    pub fn days_since_j2000(&self, offset_hours: f64) -> f64 {
        self.julian_date_at_local_noon(offset_hours) - J2000_JDN
    }

    /// Converts to a chrono `NaiveDate`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses an ISO-8601 calendar date in `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes
                .iter()
                .enumerate()
                .all(|(i, &b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
        if !well_formed {
            return Err(Error::invalid_date("expected YYYY-MM-DD"));
        }
        parse_iso_date(s)
    }
}

#[cfg(feature = "chrono")]
fn parse_iso_date(s: &str) -> Result<CalendarDate> {
    let date = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::invalid_date("not a calendar date"))?;
    CalendarDate::try_from(date)
}

#[cfg(not(feature = "chrono"))]
fn parse_iso_date(s: &str) -> Result<CalendarDate> {
    // Digits only, checked by the caller
    let number = |range: core::ops::Range<usize>| {
        s.as_bytes()[range]
            .iter()
            .fold(0_u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
    };
    let year = i32::try_from(number(0..4)).map_err(|_| Error::invalid_date("year out of range"))?;
    CalendarDate::new(year, number(5..7), number(8..10))
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Local clock time as hours since midnight of the calculation date.
///
/// Values are kept unrounded; rounding to the nearest minute happens only in
/// the minute accessors and in `Display`.
/// - Negative values fall on the previous day
/// - 0.0 to < 24.0 falls on the calculation date
/// - ≥ 24.0 falls on the next day
///
/// # Example
/// ```
/// # use miqat::ClockTime;
/// let isha = ClockTime::from_hours(24.5);
/// assert_eq!(isha.day_and_minutes(), (1, 30));
/// assert_eq!(isha.to_string(), "00:30");
///
/// let fajr = ClockTime::from_hours(3.0 + 23.9 / 60.0);
/// assert_eq!(fajr.to_string(), "03:24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClockTime(f64);

impl ClockTime {
    /// Creates a clock time from hours since local midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw, unrounded hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Minutes since local midnight, rounded to the nearest minute.
    ///
    /// Can be negative (previous day) or ≥ 1440 (next day).
    #[must_use]
    pub fn total_minutes(&self) -> i64 {
        floor(self.0 * 60.0 + 0.5) as i64
    }

    /// Gets the day offset and the rounded minute of that day (0 to 1439).
    #[must_use]
    pub fn day_and_minutes(&self) -> (i32, u32) {
        let total = self.total_minutes();
        let day = total.div_euclid(MINUTES_PER_DAY);
        let minute = total.rem_euclid(MINUTES_PER_DAY);

        let day_offset = i32::try_from(day).unwrap_or(if day < 0 { i32::MIN } else { i32::MAX });
        (day_offset, minute as u32)
    }

    /// Hour of the (wrapped) local day, 0-23.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.day_and_minutes().1 / 60
    }

    /// Minute of the hour, 0-59.
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.day_and_minutes().1 % 60
    }

    /// Converts to a chrono `NaiveTime` on the wrapped local day.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_time(&self) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
    }

    /// Anchors this clock time to `date` in a fixed-offset timezone.
    ///
    /// Day spill-over is honoured: a time of 24:30 lands at 00:30 the next day.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn on_date(
        &self,
        date: CalendarDate,
        offset_hours: f64,
    ) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        use chrono::TimeZone;

        let offset_seconds = floor(offset_hours * 3600.0 + 0.5) as i32;
        let offset = chrono::FixedOffset::east_opt(offset_seconds)?;
        let midnight = date.to_naive_date()?.and_hms_opt(0, 0, 0)?;
        let local = midnight.checked_add_signed(chrono::Duration::minutes(self.total_minutes()))?;
        offset.from_local_datetime(&local).single()
    }
}

impl fmt::Display for ClockTime {
    /// Formats as `HH:MM` on the wrapped local day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, minutes) = self.day_and_minutes();
        write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
        assert!(CalendarDate::new(0, 1, 1).is_err());
        assert!(CalendarDate::new(10_000, 1, 1).is_err());
    }

    #[test]
    fn test_calendar_date_parsing() {
        let date: CalendarDate = "2024-06-15".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 15));

        assert!("2024-6-15".parse::<CalendarDate>().is_err());
        assert!("2024/06/15".parse::<CalendarDate>().is_err());
        assert!("2024-06-15T00:00".parse::<CalendarDate>().is_err());
        assert!("+024-06-15".parse::<CalendarDate>().is_err());
        assert!("2024-13-01".parse::<CalendarDate>().is_err());
        assert!("".parse::<CalendarDate>().is_err());
        assert!(matches!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(
            "0000-01-01".parse::<CalendarDate>(),
            Err(Error::InvalidDate { .. })
        ));
        assert_eq!(
            "2024-02-29".parse::<CalendarDate>(),
            CalendarDate::new(2024, 2, 29)
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_calendar_date_display() {
        let date = CalendarDate::new(987, 3, 5).unwrap();
        assert_eq!(date.to_string(), "0987-03-05");
    }

    #[test]
    fn test_julian_day_number() {
        // J2000.0 epoch
        let j2000 = CalendarDate::new(2000, 1, 1).unwrap();
        assert_eq!(j2000.julian_day_number(), 2_451_545);
        assert!((j2000.days_since_j2000(0.0)).abs() < 1e-12);

        // Unix epoch: JD 2440587.5 at midnight, so 2440588 at noon
        let unix = CalendarDate::new(1970, 1, 1).unwrap();
        assert_eq!(unix.julian_day_number(), 2_440_588);

        let date = CalendarDate::new(2024, 6, 15).unwrap();
        assert_eq!(date.julian_day_number(), 2_460_477);
    }

    #[test]
    fn test_local_noon_julian_date() {
        let date = CalendarDate::new(2024, 6, 15).unwrap();
        // Local noon at UTC+3 is 09:00 UT
        let jd = date.julian_date_at_local_noon(3.0);
        assert!((jd - (2_460_477.0 - 0.125)).abs() < 1e-9);

        // Local noon at UTC-6 is 18:00 UT
        let jd = date.julian_date_at_local_noon(-6.0);
        assert!((jd - (2_460_477.0 + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_clock_time_rounding() {
        assert_eq!(ClockTime::from_hours(13.0 + 4.49 / 60.0).total_minutes(), 784);
        assert_eq!(ClockTime::from_hours(13.0 + 4.51 / 60.0).total_minutes(), 785);
        assert_eq!(ClockTime::from_hours(0.0).total_minutes(), 0);
    }

    #[test]
    fn test_clock_time_day_spill() {
        let late = ClockTime::from_hours(25.5);
        assert_eq!(late.day_and_minutes(), (1, 90));
        assert_eq!(late.hour(), 1);
        assert_eq!(late.minute(), 30);

        let early = ClockTime::from_hours(-0.5);
        assert_eq!(early.day_and_minutes(), (-1, 1410));
        assert_eq!(early.hour(), 23);

        // 23:59.6 rounds into the next day
        let edge = ClockTime::from_hours(23.0 + 59.6 / 60.0);
        assert_eq!(edge.day_and_minutes(), (1, 0));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_clock_time_display() {
        assert_eq!(ClockTime::from_hours(5.5).to_string(), "05:30");
        assert_eq!(ClockTime::from_hours(24.25).to_string(), "00:15");
        assert_eq!(ClockTime::from_hours(-1.0).to_string(), "23:00");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_conversions() {
        use chrono::{Datelike, NaiveDate, Timelike};

        let naive = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let date = CalendarDate::try_from(naive).unwrap();
        assert_eq!(date.to_naive_date(), Some(naive));

        let time = ClockTime::from_hours(24.5);
        let instant = time.on_date(date, 3.0).unwrap();
        assert_eq!(instant.day(), 16);
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 30);
        assert_eq!(instant.offset().local_minus_utc(), 3 * 3600);

        let half_hour_zone = ClockTime::from_hours(6.0).on_date(date, 5.5).unwrap();
        assert_eq!(half_hour_zone.offset().local_minus_utc(), 5 * 3600 + 1800);

        assert_eq!(
            ClockTime::from_hours(13.75).to_naive_time(),
            chrono::NaiveTime::from_hms_opt(13, 45, 0)
        );
    }
}

//! Low-precision solar coordinates.
//!
//! Follows the U.S. Naval Observatory "approximate solar coordinates"
//! series: mean anomaly and mean longitude plus a two-term equation of
//! centre. Declination is good to about 1 arc-minute and the equation of
//! time to a few seconds for dates within a couple of centuries of J2000.0,
//! which keeps derived prayer times well inside one minute.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, wrap_hours_symmetric,
};
use crate::time::CalendarDate;

/// Declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Declination in degrees
    declination: f64,
    /// Equation of time in hours (apparent minus mean solar time)
    equation_of_time: f64,
}

impl SolarCoordinates {
    /// Evaluates the series `days` days after J2000.0.
    ///
    /// # Example
    /// ```
    /// # use miqat::sun::SolarCoordinates;
    /// // 2024-06-15, local noon at UTC+3
    /// let sun = SolarCoordinates::from_days_since_j2000(8931.875);
    /// assert!((sun.declination() - 23.3).abs() < 0.2);
    /// ```
    #[must_use]
    pub fn from_days_since_j2000(days: f64) -> Self {
        let g = normalize_degrees_0_to_360(polynomial(&[357.529, 0.98560028], days));
        let q = normalize_degrees_0_to_360(polynomial(&[280.459, 0.98564736], days));
        let g_rad = degrees_to_radians(g);

        let lambda = normalize_degrees_0_to_360(
            q + 1.915 * sin(g_rad) + 0.020 * sin(2.0 * g_rad),
        );
        let epsilon = polynomial(&[23.439, -0.00000036], days);

        let lambda_rad = degrees_to_radians(lambda);
        let epsilon_rad = degrees_to_radians(epsilon);

        let right_ascension = normalize_degrees_0_to_360(radians_to_degrees(atan2(
            cos(epsilon_rad) * sin(lambda_rad),
            cos(lambda_rad),
        )));
        let declination = radians_to_degrees(asin(sin(epsilon_rad) * sin(lambda_rad)));
        let equation_of_time = wrap_hours_symmetric(q / 15.0 - right_ascension / 15.0);

        Self {
            declination,
            equation_of_time,
        }
    }

    /// Evaluates the series at local civil noon of `date`.
    #[must_use]
    pub fn at_local_noon(date: CalendarDate, offset_hours: f64) -> Self {
        Self::from_days_since_j2000(date.days_since_j2000(offset_hours))
    }

    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in hours.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the equation of time in minutes.
    #[must_use]
    pub fn equation_of_time_minutes(&self) -> f64 {
        self.equation_of_time * 60.0
    }

    /// Local clock hour of solar transit for a longitude and timezone offset.
    #[must_use]
    pub fn transit_hours(&self, longitude: f64, offset_hours: f64) -> f64 {
        12.0 + offset_hours - longitude / 15.0 - self.equation_of_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32) -> SolarCoordinates {
        SolarCoordinates::at_local_noon(CalendarDate::new(year, month, day).unwrap(), 0.0)
    }

    #[test]
    fn test_declination_at_solstices_and_equinox() {
        assert!((at(2024, 6, 20).declination() - 23.44).abs() < 0.05);
        assert!((at(2024, 12, 21).declination() + 23.44).abs() < 0.05);
        assert!(at(2024, 3, 20).declination().abs() < 0.4);
        assert!(at(2024, 9, 22).declination().abs() < 0.4);
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November: sundial about 16.4 minutes ahead of the clock
        assert!((at(2024, 11, 3).equation_of_time_minutes() - 16.4).abs() < 0.3);
        // Mid February: about 14.2 minutes behind
        assert!((at(2024, 2, 11).equation_of_time_minutes() + 14.2).abs() < 0.3);
        // The series never drifts far from the known ±17 minute envelope
        for day in 1..=28 {
            for month in 1..=12 {
                assert!(at(2024, month, day).equation_of_time_minutes().abs() < 17.0);
            }
        }
    }

    #[test]
    fn test_transit_for_greenwich_and_istanbul() {
        let sun = at(2024, 6, 15);
        let greenwich = sun.transit_hours(0.0, 0.0);
        assert!((greenwich - 12.0).abs() < 0.02);

        let istanbul = SolarCoordinates::at_local_noon(CalendarDate::new(2024, 6, 15).unwrap(), 3.0)
            .transit_hours(28.9784, 3.0);
        assert!((istanbul - (13.0 + 4.68 / 60.0)).abs() < 0.5 / 60.0);
    }

    #[test]
    fn test_deterministic() {
        let a = SolarCoordinates::from_days_since_j2000(8931.875);
        let b = SolarCoordinates::from_days_since_j2000(8931.875);
        assert_eq!(a.declination().to_bits(), b.declination().to_bits());
        assert_eq!(a.equation_of_time().to_bits(), b.equation_of_time().to_bits());
    }
}

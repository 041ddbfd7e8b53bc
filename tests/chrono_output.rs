//! Anchoring clock times to dates with chrono.
#![cfg(feature = "chrono")]

use chrono::{Datelike, NaiveDate, Timelike};
use miqat::{
    compute_prayer_times, compute_prayer_times_with_options, CalendarDate, GeoPosition,
    HighLatitudeRule, MethodRegistry, Prayer, SolverOptions,
};

#[test]
fn test_istanbul_times_as_datetimes() {
    let date = CalendarDate::try_from(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).unwrap();
    let istanbul = GeoPosition::new(41.0082, 28.9784).unwrap();
    let method = MethodRegistry::standard().resolve("Diyanet").unwrap();
    let times = compute_prayer_times(&istanbul, date, 3.0, method).unwrap();

    let fajr = times.fajr().on_date(date, 3.0).unwrap();
    assert_eq!(fajr.to_rfc3339(), "2024-06-15T03:24:00+03:00");

    let maghrib = times.maghrib().on_date(date, 3.0).unwrap();
    assert_eq!((maghrib.hour(), maghrib.minute()), (20, 38));

    // Every event is on the requested date and in chronological order
    let instants: Vec<_> = Prayer::ALL
        .iter()
        .map(|&p| times.get(p).on_date(date, 3.0).unwrap())
        .collect();
    assert!(instants.iter().all(|dt| dt.day() == 15));
    assert!(instants.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_isha_spills_into_next_day() {
    let stockholm = GeoPosition::new(59.3293, 18.0686).unwrap();
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let method = MethodRegistry::standard().resolve("MWL").unwrap();
    let options = SolverOptions {
        high_latitude_rule: HighLatitudeRule::MiddleOfNight,
        ..SolverOptions::default()
    };
    let times = compute_prayer_times_with_options(&stockholm, date, 2.0, method, &options).unwrap();

    assert!(times.isha().hours() > 24.0);
    assert_eq!(times.isha().day_and_minutes(), (1, 50));
    assert_eq!(times.isha().to_string(), "00:50");

    let isha = times.isha().on_date(date, 2.0).unwrap();
    assert_eq!(isha.to_rfc3339(), "2024-06-22T00:50:00+02:00");

    // Middle of the night is shared by isha and the same night's fajr, a day apart
    let fajr = times.fajr().on_date(date, 2.0).unwrap();
    assert_eq!((fajr.day(), fajr.hour(), fajr.minute()), (21, 0, 50));
}

#[test]
fn test_half_hour_zone_offsets() {
    let mumbai = GeoPosition::new(19.076, 72.8777).unwrap();
    let date = CalendarDate::new(2024, 1, 15).unwrap();
    let method = MethodRegistry::standard().resolve("Karachi").unwrap();
    let times = compute_prayer_times(&mumbai, date, 5.5, method).unwrap();

    let dhuhr = times.dhuhr().on_date(date, 5.5).unwrap();
    assert_eq!(dhuhr.offset().local_minus_utc(), 5 * 3600 + 1800);
    assert_eq!(dhuhr.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

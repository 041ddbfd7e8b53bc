//! Midsummer north of the Arctic Circle under each high-latitude rule.

use miqat::{
    compute_prayer_times_with_options, CalendarDate, GeoPosition, HighLatitudeRule,
    MethodRegistry, Prayer, SolverOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let method = MethodRegistry::standard().resolve("MWL")?;
    let date = CalendarDate::new(2024, 6, 21)?;
    let places = [
        ("Stockholm", 59.3293, 18.0686),
        ("Tromsø", 69.6492, 18.9553),
        ("Longyearbyen", 78.2232, 15.6267),
    ];

    for (name, latitude, longitude) in places {
        let position = GeoPosition::new(latitude, longitude)?;
        println!("{name} ({latitude:.2}°N), {date}:");

        for rule in [
            HighLatitudeRule::AngleBased,
            HighLatitudeRule::OneSeventh,
            HighLatitudeRule::MiddleOfNight,
        ] {
            let options = SolverOptions {
                high_latitude_rule: rule,
                ..SolverOptions::default()
            };
            let times = compute_prayer_times_with_options(&position, date, 2.0, method, &options)?;

            let row: Vec<String> = times
                .iter()
                .map(|(prayer, time)| {
                    let mark = if times.is_estimated(prayer) { "*" } else { " " };
                    format!("{time}{mark}")
                })
                .collect();
            println!("  {:<14} {:?} {}", format!("{rule:?}"), times.day_kind(), row.join(" "));
        }

        let defaults = compute_prayer_times_with_options(
            &position,
            date,
            2.0,
            method,
            &SolverOptions::default(),
        )?;
        let estimated: Vec<&str> = Prayer::ALL
            .iter()
            .filter(|&&prayer| defaults.is_estimated(prayer))
            .map(Prayer::name)
            .collect();
        println!("  estimated by default: {}\n", estimated.join(", "));
    }

    println!("* marks an estimated time");
    Ok(())
}

//! Prayer times for one day in Istanbul, with and without the Hanafi asr shadow.

use miqat::{compute_prayer_times, CalendarDate, GeoPosition, MethodRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let istanbul = GeoPosition::new(41.0082, 28.9784)?;
    let date: CalendarDate = "2024-06-15".parse()?;
    let registry = MethodRegistry::standard();

    let method = registry.resolve_country_method("TR")?;
    let times = compute_prayer_times(&istanbul, date, 3.0, method)?;

    println!("Istanbul, {date} (UTC+3), {}:", method.name());
    for (prayer, time) in times.iter() {
        println!("  {:<8} {time}", prayer.name());
    }

    let hanafi = registry.resolve("KarachiHanafi")?;
    let hanafi_times = compute_prayer_times(&istanbul, date, 3.0, hanafi)?;
    println!(
        "\nAsr with a shadow factor of {}: {} (standard: {})",
        hanafi.shadow_factor(),
        hanafi_times.asr(),
        times.asr()
    );

    Ok(())
}

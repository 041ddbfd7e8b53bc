//! # miqat
//!
//! Prayer times and qibla direction from a geographic position and a civil date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate has three pure components:
//! - **Prayer time solver**: fajr, sunrise, dhuhr, asr, maghrib and isha from a
//!   low-precision solar series and closed-form hour-angle solves (±1 minute)
//! - **Qibla solver**: initial great-circle bearing and haversine distance to
//!   the Kaaba (21.4225°N, 39.8262°E)
//! - **Method registry**: a `'static` table mapping calculation method
//!   identifiers and country codes to juristic parameters
//!
//! ## Features
//!
//! - Deterministic: identical inputs give bit-identical outputs
//! - Never fails on high latitudes: polar days, polar nights and white nights
//!   resolve through a documented fallback, and fallback events are flagged
//! - Thread-safe: stateless, immutable data structures
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): `NaiveDate` conversion and `DateTime<FixedOffset>` output
//! - `serde` (default): Request/response boundary in [`api`] and deserializable options
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + serde
//! miqat = "0.1"
//!
//! # Minimal std (numeric API only)
//! miqat = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! miqat = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Prayer times
//! ```rust
//! use miqat::{compute_prayer_times, CalendarDate, GeoPosition, MethodRegistry, Prayer};
//!
//! let registry = MethodRegistry::standard();
//! let method = registry.resolve("Diyanet").unwrap();
//!
//! let istanbul = GeoPosition::new(41.0082, 28.9784).unwrap();
//! let date = CalendarDate::new(2024, 6, 15).unwrap();
//! let times = compute_prayer_times(&istanbul, date, 3.0, method).unwrap();
//!
//! for (prayer, time) in times.iter() {
//!     let note = if times.is_estimated(prayer) { " (estimated)" } else { "" };
//!     println!("{:8} {time}{note}", prayer.name());
//! }
//! assert_eq!(times.get(Prayer::Dhuhr).to_string(), "13:05");
//! ```
//!
//! ### Qibla
//! ```rust
//! use miqat::{compute_qibla, GeoPosition};
//!
//! let london = GeoPosition::new(51.5074, -0.1278).unwrap();
//! let qibla = compute_qibla(&london);
//! println!(
//!     "{:.1}° ({}), {:.0} km",
//!     qibla.bearing_degrees().unwrap(),
//!     qibla.compass_point().unwrap(),
//!     qibla.distance_km()
//! );
//! ```
//!
//! ## Conventions
//!
//! - **Clock times**: local hours since midnight of the requested date, unrounded;
//!   rounding to the nearest minute happens only on output
//! - **Bearing**: 0° = true north, measured clockwise (0° to 360°)
//! - **Timezone offset**: hours east of UTC, fractional offsets allowed

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of table constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::method::{AsrShadow, CalculationMethod, DuskRule, MethodRegistry};
pub use crate::prayer::{
    compute_prayer_times, compute_prayer_times_with_options, HighLatitudeRule, SolverOptions,
};
pub use crate::qibla::{compute_qibla, qibla_from_coordinates};
pub use crate::time::{CalendarDate, ClockTime};
pub use crate::types::{DayKind, GeoPosition, Prayer, PrayerTimes, QiblaResult};

// Solver modules
pub mod prayer;
pub mod qibla;
pub mod sun;

// Core modules
pub mod error;
pub mod method;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(feature = "serde")]
pub mod api;

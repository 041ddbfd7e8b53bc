//! Calculation methods and the registry that resolves them.
//!
//! A calculation method bundles the juristic parameters the solver needs: the
//! dawn depression angle, the dusk rule and the asr shadow convention. The set
//! of valid methods is a fixed `'static` table; a [`MethodRegistry`] is a plain
//! value wrapping such a table and is passed to whoever needs lookups.

use crate::math::{atan, radians_to_degrees};
use crate::{Error, Result};

/// Smallest accepted twilight depression angle in degrees.
pub const MIN_TWILIGHT_ANGLE: f64 = 1.0;

/// Largest accepted twilight depression angle in degrees.
pub const MAX_TWILIGHT_ANGLE: f64 = 30.0;

/// Largest accepted fixed isha interval in minutes.
pub const MAX_DUSK_MINUTES: f64 = 240.0;

/// How the end of dusk (start of isha) is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DuskRule {
    /// Sun depressed this many degrees below the horizon
    Angle(f64),
    /// Fixed number of minutes after sunset
    MinutesAfterSunset(f64),
}

/// Shadow-length convention for the start of asr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum AsrShadow {
    /// Shadow equals object length plus noon shadow (Shafi'i, Maliki, Hanbali)
    #[default]
    Standard,
    /// Shadow equals twice object length plus noon shadow
    Hanafi,
}

impl AsrShadow {
    /// Gets the shadow multiplier (1 or 2).
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }

    /// Fraction of the noon-to-sunset interval at which asr falls on an
    /// equatorial equinox day.
    ///
    /// At the equator on an equinox the sun climbs 15° per hour and the noon
    /// shadow is zero, so asr occurs where the solar altitude is `acot(factor)`.
    /// The ratio is about 0.5 for the standard convention and 0.705 for Hanafi.
    #[must_use]
    pub fn equinox_day_fraction(&self) -> f64 {
        let altitude = radians_to_degrees(atan(1.0 / self.factor()));
        (90.0 - altitude) / 90.0
    }
}

/// Named parameter bundle consumed by the prayer time solver.
///
/// # Example
/// ```
/// # use miqat::method::{AsrShadow, CalculationMethod, DuskRule};
/// let method = CalculationMethod::new(
///     "Custom",
///     "Local committee",
///     17.5,
///     DuskRule::MinutesAfterSunset(75.0),
///     AsrShadow::Standard,
/// );
/// assert!(method.validate().is_ok());
/// assert_eq!(method.shadow_factor(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationMethod {
    id: &'static str,
    name: &'static str,
    dawn_angle_degrees: f64,
    dusk_rule: DuskRule,
    asr_shadow: AsrShadow,
}

impl CalculationMethod {
    /// Creates a method. Use [`validate`](Self::validate) before trusting
    /// parameters that did not come from a reviewed table.
    #[must_use]
    pub const fn new(
        id: &'static str,
        name: &'static str,
        dawn_angle_degrees: f64,
        dusk_rule: DuskRule,
        asr_shadow: AsrShadow,
    ) -> Self {
        Self {
            id,
            name,
            dawn_angle_degrees,
            dusk_rule,
            asr_shadow,
        }
    }

    /// Checks that angles and intervals lie within the accepted ranges.
    ///
    /// # Errors
    /// Returns `InvalidMethodParameter` if the dawn or dusk angle is outside
    /// 1°-30°, or the fixed dusk interval is outside (0, 240] minutes.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TWILIGHT_ANGLE..=MAX_TWILIGHT_ANGLE).contains(&self.dawn_angle_degrees) {
            return Err(Error::invalid_method_parameter(
                "dawn angle must be between 1 and 30 degrees",
            ));
        }
        match self.dusk_rule {
            DuskRule::Angle(angle) if !(MIN_TWILIGHT_ANGLE..=MAX_TWILIGHT_ANGLE).contains(&angle) => {
                Err(Error::invalid_method_parameter(
                    "dusk angle must be between 1 and 30 degrees",
                ))
            }
            DuskRule::MinutesAfterSunset(minutes)
                if !(minutes > 0.0 && minutes <= MAX_DUSK_MINUTES) =>
            {
                Err(Error::invalid_method_parameter(
                    "dusk interval must be between 0 and 240 minutes",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Gets the registry identifier, e.g. `"Diyanet"`.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Gets the descriptive name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the dawn depression angle in degrees.
    #[must_use]
    pub const fn dawn_angle_degrees(&self) -> f64 {
        self.dawn_angle_degrees
    }

    /// Gets the dusk rule.
    #[must_use]
    pub const fn dusk_rule(&self) -> DuskRule {
        self.dusk_rule
    }

    /// Gets the asr shadow convention.
    #[must_use]
    pub const fn asr_shadow(&self) -> AsrShadow {
        self.asr_shadow
    }

    /// Gets the asr shadow multiplier.
    #[must_use]
    pub const fn shadow_factor(&self) -> f64 {
        self.asr_shadow.factor()
    }
}

/// Methods known to [`MethodRegistry::standard`].
#[rustfmt::skip]
pub static STANDARD_METHODS: [CalculationMethod; 13] = [
    CalculationMethod::new("MWL", "Muslim World League", 18.0, DuskRule::Angle(17.0), AsrShadow::Standard),
    CalculationMethod::new("ISNA", "Islamic Society of North America", 15.0, DuskRule::Angle(15.0), AsrShadow::Standard),
    CalculationMethod::new("Egypt", "Egyptian General Authority of Survey", 19.5, DuskRule::Angle(17.5), AsrShadow::Standard),
    CalculationMethod::new("Makkah", "Umm al-Qura University, Makkah", 18.5, DuskRule::MinutesAfterSunset(90.0), AsrShadow::Standard),
    CalculationMethod::new("Karachi", "University of Islamic Sciences, Karachi", 18.0, DuskRule::Angle(18.0), AsrShadow::Standard),
    CalculationMethod::new("KarachiHanafi", "University of Islamic Sciences, Karachi (Hanafi)", 18.0, DuskRule::Angle(18.0), AsrShadow::Hanafi),
    CalculationMethod::new("Diyanet", "Presidency of Religious Affairs, Turkey", 18.0, DuskRule::Angle(17.0), AsrShadow::Standard),
    CalculationMethod::new("Gulf", "Gulf Region", 19.5, DuskRule::MinutesAfterSunset(90.0), AsrShadow::Standard),
    CalculationMethod::new("Kuwait", "Kuwait", 18.0, DuskRule::Angle(17.5), AsrShadow::Standard),
    CalculationMethod::new("Qatar", "Qatar", 18.0, DuskRule::MinutesAfterSunset(90.0), AsrShadow::Standard),
    CalculationMethod::new("Singapore", "Majlis Ugama Islam Singapura", 20.0, DuskRule::Angle(18.0), AsrShadow::Standard),
    CalculationMethod::new("France", "Union des Organisations Islamiques de France", 12.0, DuskRule::Angle(12.0), AsrShadow::Standard),
    CalculationMethod::new("Russia", "Spiritual Administration of Muslims of Russia", 16.0, DuskRule::Angle(15.0), AsrShadow::Standard),
];

/// Default method per ISO 3166-1 alpha-2 country code.
pub static STANDARD_COUNTRIES: [(&str, &str); 47] = [
    ("TR", "Diyanet"),
    ("SA", "Makkah"),
    ("EG", "Egypt"),
    ("SD", "Egypt"),
    ("LY", "Egypt"),
    ("DZ", "Egypt"),
    ("MA", "Egypt"),
    ("TN", "Egypt"),
    ("SY", "Egypt"),
    ("LB", "Egypt"),
    ("JO", "Egypt"),
    ("IQ", "Egypt"),
    ("PS", "Egypt"),
    ("US", "ISNA"),
    ("CA", "ISNA"),
    ("PK", "Karachi"),
    ("IN", "Karachi"),
    ("BD", "Karachi"),
    ("AF", "Karachi"),
    ("AE", "Gulf"),
    ("OM", "Gulf"),
    ("BH", "Gulf"),
    ("KW", "Kuwait"),
    ("QA", "Qatar"),
    ("SG", "Singapore"),
    ("MY", "Singapore"),
    ("ID", "Singapore"),
    ("BN", "Singapore"),
    ("FR", "France"),
    ("RU", "Russia"),
    ("GB", "MWL"),
    ("DE", "MWL"),
    ("NL", "MWL"),
    ("BE", "MWL"),
    ("AT", "MWL"),
    ("CH", "MWL"),
    ("IT", "MWL"),
    ("ES", "MWL"),
    ("SE", "MWL"),
    ("NO", "MWL"),
    ("DK", "MWL"),
    ("AL", "Diyanet"),
    ("AZ", "Diyanet"),
    ("BA", "Diyanet"),
    ("XK", "Diyanet"),
    ("MK", "Diyanet"),
    ("CY", "Diyanet"),
];

/// Read-only lookup from method identifiers and country codes to parameters.
///
/// Lookups never fall back to a default: an unknown identifier is an error.
///
/// # Example
/// ```
/// # use miqat::MethodRegistry;
/// let registry = MethodRegistry::standard();
/// let method = registry.resolve("diyanet").unwrap();
/// assert_eq!(method.dawn_angle_degrees(), 18.0);
///
/// assert_eq!(registry.resolve_for_country("tr").unwrap(), "Diyanet");
/// assert!(registry.resolve("Hogwarts").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MethodRegistry {
    methods: &'static [CalculationMethod],
    countries: &'static [(&'static str, &'static str)],
}

impl MethodRegistry {
    /// Registry over the built-in method and country tables.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(&STANDARD_METHODS, &STANDARD_COUNTRIES)
    }

    /// Registry over caller-supplied tables, e.g. synthetic sets in tests.
    #[must_use]
    pub const fn new(
        methods: &'static [CalculationMethod],
        countries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { methods, countries }
    }

    /// Looks up a method by identifier, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns `UnknownMethod` if no method has this identifier.
    pub fn resolve(&self, method_id: &str) -> Result<&'static CalculationMethod> {
        let methods: &'static [CalculationMethod] = self.methods;
        methods
            .iter()
            .find(|m| m.id.eq_ignore_ascii_case(method_id))
            .ok_or_else(|| {
                log::warn!("unknown calculation method {method_id:?}");
                Error::UnknownMethod
            })
    }

    /// Looks up the default method identifier for a country code, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns `UnknownCountry` if the country has no default method.
    pub fn resolve_for_country(&self, country_code: &str) -> Result<&'static str> {
        let countries: &'static [(&'static str, &'static str)] = self.countries;
        countries
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(country_code))
            .map(|&(_, method_id)| method_id)
            .ok_or_else(|| {
                log::warn!("no default calculation method for country {country_code:?}");
                Error::UnknownCountry
            })
    }

    /// Resolves the default method of a country in one step.
    ///
    /// # Errors
    /// Returns `UnknownCountry`, or `UnknownMethod` if the country table
    /// points at an identifier missing from the method table.
    pub fn resolve_country_method(&self, country_code: &str) -> Result<&'static CalculationMethod> {
        self.resolve(self.resolve_for_country(country_code)?)
    }

    /// Iterates over all methods in table order.
    pub fn methods(&self) -> impl Iterator<Item = &'static CalculationMethod> {
        let methods: &'static [CalculationMethod] = self.methods;
        methods.iter()
    }

    /// Iterates over all `(country_code, method_id)` pairs.
    pub fn countries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let countries: &'static [(&'static str, &'static str)] = self.countries;
        countries.iter().copied()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

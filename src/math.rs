//! Float helpers shared by the solar series, the hour-angle solver and the
//! great-circle formulas.
//!
//! With `std` the inherent `f64` methods are used; without it every function
//! routes through `libm` so the crate stays usable on `no_std` targets.

#![allow(clippy::many_single_char_names)]

/// Defines a one-argument float function that picks the std or libm backend.
macro_rules! float_fn {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(x: f64) -> f64 {
            #[cfg(feature = "std")]
            return x.$name();

            #[cfg(not(feature = "std"))]
            return libm::$name(x);
        }
    };
}

float_fn!(
    /// Sine of an angle in radians.
    sin
);
float_fn!(
    /// Cosine of an angle in radians.
    cos
);
float_fn!(
    /// Tangent of an angle in radians.
    tan
);
float_fn!(
    /// Arcsine in radians.
    asin
);
float_fn!(
    /// Arccosine in radians. NaN outside [-1, 1].
    acos
);
float_fn!(
    /// Arctangent in radians.
    atan
);
float_fn!(
    /// Square root. NaN for negative input.
    sqrt
);
float_fn!(
    /// Largest integer value not greater than `x`.
    floor
);

/// Four-quadrant arctangent of `y / x`, in radians.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Absolute value.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

#[inline]
fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle to [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let reduced = degrees % 360.0;
    let wrapped = if reduced < 0.0 { reduced + 360.0 } else { reduced };
    // -1e-15 % 360 + 360 rounds to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an hour difference into [-12, 12).
///
/// Values already in range are returned bit-for-bit.
pub fn wrap_hours_symmetric(hours: f64) -> f64 {
    if (-12.0..12.0).contains(&hours) {
        return hours;
    }
    let reduced = (hours + 12.0) % 24.0;
    let wrapped = if reduced < 0.0 { reduced + 24.0 } else { reduced };
    if wrapped >= 24.0 {
        -12.0
    } else {
        wrapped - 12.0
    }
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` with Horner's scheme.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .copied()
        .reduce(|acc, c| mul_add(acc, x, c))
        .unwrap_or(0.0)
}

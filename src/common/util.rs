//! Auxiliary functions.

use crate::common::consts::POWERS_OF_TEN;
use crate::defs::{F64_EXP_MAX, F64_EXP_MIN};

/// Returns `10^x`. Integral exponents inside the range of `f64` are taken from the table.
pub fn pow10(x: f64) -> f64 {
    if x.fract() == 0.0 && x >= F64_EXP_MIN as f64 && x <= F64_EXP_MAX as f64 {
        POWERS_OF_TEN[(x as i32 - F64_EXP_MIN) as usize]
    } else if x > F64_EXP_MAX as f64 + 1.0 {
        f64::INFINITY
    } else if x < F64_EXP_MIN as f64 - 1.0 {
        0.0
    } else {
        10f64.powf(x)
    }
}

/// Returns `m * 10^e` without overflowing intermediate powers of ten.
pub fn scale10(mut m: f64, mut e: f64) -> f64 {
    while e > 300.0 && m.is_finite() && m != 0.0 {
        m *= 1e300;
        e -= 300.0;
    }

    while e < -300.0 && m != 0.0 {
        m /= 1e300;
        e += 300.0;
    }

    if !m.is_finite() || m == 0.0 {
        m
    } else if e >= 0.0 {
        m * pow10(e)
    } else {
        m / pow10(-e)
    }
}

/// Returns `sign(x) * 10^|x|`.
pub fn signed_pow10(x: f64) -> f64 {
    if x < 0.0 {
        -pow10(-x)
    } else {
        pow10(x)
    }
}

/// Rounds `x` half away from zero to `decimals` digits after the point.
pub fn round_to(x: f64, decimals: usize) -> f64 {
    let p = pow10(decimals as f64);
    (x * p).round() / p
}

/// Number of decimal digits in the integer part of a non-negative `x`.
pub fn int_digits(x: f64) -> usize {
    if x < 1.0 {
        1
    } else {
        x.log10().floor() as usize + 1
    }
}

//! Other operations.

use crate::num::{LayeredNumber, ONE, ZERO};

// Below this exponent a value is too close to zero for f64 rounding to see its sign.
const TINY_EXPONENT: f64 = -300.0;

// Starting with this exponent a value has no fractional digits at f64 precision.
const INTEGRAL_EXPONENT: f64 = 15.0;

impl LayeredNumber {
    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            *self
        }
    }

    /// Returns the value with the opposite sign.
    pub fn neg(&self) -> Self {
        let (s, m, e, layer) = self.to_raw_parts();
        Self::normalize(s.invert(), m, e, layer)
    }

    /// Returns 1 for positive values, -1 for negative values, and 0 for zero.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            ZERO
        } else if self.is_negative() {
            ONE.neg()
        } else {
            ONE
        }
    }

    /// Returns the largest integer less than or equal to a number.
    pub fn floor(&self) -> Self {
        self.round_with(f64::floor)
    }

    /// Returns the smallest integer greater than or equal to a number.
    pub fn ceil(&self) -> Self {
        self.round_with(f64::ceil)
    }

    /// Returns the nearest integer, rounding half away from zero.
    pub fn round(&self) -> Self {
        self.round_with(f64::round)
    }

    /// Returns the integer part of a number.
    pub fn trunc(&self) -> Self {
        self.round_with(f64::trunc)
    }

    /// Returns the fractional part of a number,
    /// i.e. having self=12.345 it will return 0.345.
    pub fn fract(&self) -> Self {
        self.sub(&self.trunc())
    }

    fn round_with(&self, f: fn(f64) -> f64) -> Self {
        if self.is_zero() || self.layer() > 0 || self.exponent() >= INTEGRAL_EXPONENT {
            return *self;
        }

        let v = if self.exponent() < TINY_EXPONENT {
            self.sign().to_int() as f64 * 1e-300
        } else {
            self.to_f64()
        };

        Self::from_finite(f(v))
    }

    /// Returns the larger of `self` and `d2`.
    pub fn max(&self, d2: &Self) -> Self {
        if d2 > self {
            *d2
        } else {
            *self
        }
    }

    /// Returns the smaller of `self` and `d2`.
    pub fn min(&self, d2: &Self) -> Self {
        if d2 < self {
            *d2
        } else {
            *self
        }
    }

    /// Restricts `self` to the interval `[lo, hi]`.
    pub fn clamp(&self, lo: &Self, hi: &Self) -> Self {
        self.max(lo).min(hi)
    }
}

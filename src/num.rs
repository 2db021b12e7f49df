//! Layered number: representation, normalization, and comparison.

use crate::common::util::{pow10, scale10, signed_pow10};
use crate::defs::{
    Error, Sign, EQ_TOLERANCE, EXPONENT_LIMIT, F64_EXP_MAX, F64_EXP_MIN, LAYER_DOWN,
    MANTISSA_VISIBLE_LIMIT,
};
use core::cmp::Ordering;

// Largest f64 below 10.
const MANTISSA_MAX: f64 = 9.999999999999998;

// Units in the last place two slots above layer 0 may differ by and still compare equal.
const SLOT_ULPS: f64 = 16.0;

// Above layer 0 a mantissa out of range cannot be carried into the exponent.
fn clamp_mantissa(m: f64) -> f64 {
    m.clamp(1.0, MANTISSA_MAX)
}

/// A number of the form `sign * mantissa * 10^T`, where `T` is `exponent` with
/// `x -> 10^x` applied `layer` times.
///
/// At layer 0 the value is ordinary scientific notation. Every time the exponent
/// would leave the safe range of `f64` it is replaced by its own `log10` and the
/// layer is incremented. Values are small, `Copy`, and immutable: every operation
/// returns a new normalized value.
#[derive(Clone, Copy, Debug)]
pub struct LayeredNumber {
    sign: Sign,
    mantissa: f64,
    exponent: f64,
    layer: u64,
}

/// Zero.
pub const ZERO: LayeredNumber = LayeredNumber {
    sign: Sign::Zero,
    mantissa: 0.0,
    exponent: 0.0,
    layer: 0,
};

/// One.
pub const ONE: LayeredNumber = LayeredNumber {
    sign: Sign::Pos,
    mantissa: 1.0,
    exponent: 0.0,
    layer: 0,
};

/// Ten.
pub const TEN: LayeredNumber = LayeredNumber {
    sign: Sign::Pos,
    mantissa: 1.0,
    exponent: 1.0,
    layer: 0,
};

impl LayeredNumber {
    /// Zero.
    pub const ZERO: Self = ZERO;

    /// One.
    pub const ONE: Self = ONE;

    /// Ten.
    pub const TEN: Self = TEN;

    /// Restores the representation invariants for raw parts.
    /// The resulting sign is `sign` multiplied by the sign of `mantissa`.
    pub(crate) fn normalize(sign: Sign, mantissa: f64, exponent: f64, layer: u64) -> Self {
        if sign.is_zero() || mantissa == 0.0 || mantissa.is_nan() || exponent.is_nan() {
            return ZERO;
        }

        let sign = sign.mul(Sign::of(mantissa));
        let mut m = mantissa.abs();
        let mut e = exponent;
        let mut layer = layer;

        if m.is_infinite() {
            m = f64::MAX;
        }

        if e == f64::INFINITY {
            e = f64::MAX;
        }

        while layer > 0 && e < LAYER_DOWN {
            if e == f64::NEG_INFINITY {
                return ZERO;
            }

            e = signed_pow10(e);
            layer -= 1;
        }

        if layer == 0 {
            if e <= -EXPONENT_LIMIT {
                return ZERO;
            }

            let shift = m.log10().floor();
            if e + shift >= EXPONENT_LIMIT {
                // the lifted exponent cannot take a carry from the mantissa
                m = clamp_mantissa(m);
            } else {
                if shift != 0.0 {
                    m = scale10(m, -shift);
                    e += shift;
                }

                let whole = e.floor();
                if whole != e {
                    m *= pow10(e - whole);
                    e = whole;
                }

                while m >= 10.0 {
                    m /= 10.0;
                    e += 1.0;
                }

                while m < 1.0 {
                    m *= 10.0;
                    e -= 1.0;
                }
            }
        } else {
            m = clamp_mantissa(m);
        }

        while e >= EXPONENT_LIMIT {
            e = e.log10().max(LAYER_DOWN);
            layer = layer.saturating_add(1);
        }

        if layer == 0 && e <= -EXPONENT_LIMIT {
            return ZERO;
        }

        LayeredNumber {
            sign,
            mantissa: m,
            exponent: e,
            layer,
        }
    }

    /// Constructs a number from a float.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        Ok(Self::from_finite(f))
    }

    /// Constructs a number from a float that is known to be finite.
    pub(crate) fn from_finite(f: f64) -> Self {
        Self::normalize(Sign::Pos, f, 0.0, 0)
    }

    /// Constructs a number from raw parts: `mantissa * 10^T`, where `T` is `exponent`
    /// with `x -> 10^x` applied `layer` times. The sign is taken from `mantissa`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `mantissa` or `exponent` is NaN or infinite.
    pub fn from_parts(mantissa: f64, exponent: f64, layer: u64) -> Result<Self, Error> {
        if !mantissa.is_finite() || !exponent.is_finite() {
            return Err(Error::InvalidArgument);
        }

        Ok(Self::normalize(Sign::Pos, mantissa, exponent, layer))
    }

    /// Returns `sign * m * 10^t`.
    pub(crate) fn compose(sign: Sign, m: f64, t: &LayeredNumber) -> Self {
        if t.is_zero() {
            Self::normalize(sign, m, 0.0, 0)
        } else if t.layer == 0 && t.exponent < F64_EXP_MAX as f64 {
            Self::normalize(sign, m, t.sign.to_int() as f64 * scale10(t.mantissa, t.exponent), 0)
        } else if t.is_negative() {
            ZERO
        } else if t.layer == 0 {
            Self::normalize(sign, m, t.exponent + t.mantissa.log10(), 1)
        } else {
            Self::normalize(sign, m, t.exponent, t.layer + 1)
        }
    }

    /// Returns the power of ten applied to the mantissa as a number.
    /// For a value at layer `L >= 1` this is `10^exponent` lifted through `L - 1` layers.
    pub fn true_exponent(&self) -> Self {
        if self.layer == 0 {
            Self::from_finite(self.exponent)
        } else {
            Self::normalize(Sign::Pos, 1.0, self.exponent, self.layer - 1)
        }
    }

    /// Returns the sign.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the mantissa. It is in `[1, 10)` for non-zero values.
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Returns the exponent slot.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the layer.
    pub fn layer(&self) -> u64 {
        self.layer
    }

    /// Decomposes `self` into sign, mantissa, exponent, and layer.
    pub fn to_raw_parts(&self) -> (Sign, f64, f64, u64) {
        (self.sign, self.mantissa, self.exponent, self.layer)
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        self.sign.is_positive()
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns true if `self` is exactly one.
    pub fn is_one(&self) -> bool {
        self.sign.is_positive() && self.layer == 0 && self.exponent == 0.0 && self.mantissa == 1.0
    }

    /// Returns true if the mantissa still carries significant digits for display.
    pub(crate) fn mantissa_visible(&self) -> bool {
        self.layer == 0 || (self.layer == 1 && self.exponent < MANTISSA_VISIBLE_LIMIT)
    }

    /// Returns true if `self` fits into a finite `f64`.
    pub(crate) fn fits_f64(&self) -> bool {
        self.layer == 0
            && self.exponent >= F64_EXP_MIN as f64 - 1.0
            && self.exponent < F64_EXP_MAX as f64
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn cmp_abs(&self, d2: &Self) -> Ordering {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        self.layer
            .cmp(&d2.layer)
            .then_with(|| {
                if self.layer > 0 && self.slot_eq(d2) {
                    Ordering::Equal
                } else {
                    self.exponent.partial_cmp(&d2.exponent).unwrap_or(Ordering::Equal)
                }
            })
            .then(self.mantissa.partial_cmp(&d2.mantissa).unwrap_or(Ordering::Equal))
    }

    /// Returns true if the exponent slots of `self` and `d2` differ only by rounding noise.
    /// Meaningful above layer 0, where slots are not integers.
    pub(crate) fn slot_eq(&self, d2: &Self) -> bool {
        let tol = self.exponent.abs().max(d2.exponent.abs()) * f64::EPSILON * SLOT_ULPS;
        (self.exponent - d2.exponent).abs() <= tol
    }

    fn approx_eq(&self, d2: &Self) -> bool {
        if self.sign != d2.sign || self.layer != d2.layer {
            return false;
        }

        if self.is_zero() {
            return true;
        }

        if self.layer == 0 {
            // exponents are exact integers, the tolerance applies to the mantissa only
            let d = (self.exponent - d2.exponent) + (self.mantissa.log10() - d2.mantissa.log10());
            d.abs() <= EQ_TOLERANCE
        } else {
            self.slot_eq(d2)
                && (!self.mantissa_visible()
                    || (self.mantissa.log10() - d2.mantissa.log10()).abs() <= EQ_TOLERANCE)
        }
    }
}

impl PartialEq for LayeredNumber {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl PartialOrd for LayeredNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.approx_eq(other) {
            return Some(Ordering::Equal);
        }

        let ord = self.sign.cmp(&other.sign).then_with(|| {
            let abs = self.cmp_abs(other);
            if self.is_negative() {
                abs.reverse()
            } else {
                abs
            }
        });

        Some(ord)
    }
}

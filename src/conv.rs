//! Conversion utilities.

use crate::common::util::scale10;
use crate::defs::{Error, F64_EXP_MAX, F64_EXP_MIN};
use crate::num::LayeredNumber;

impl LayeredNumber {
    /// Converts `self` to `f64`.
    /// Values beyond the range of `f64` saturate to `f64::MAX` or `f64::MIN`,
    /// values too close to zero become zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let s = self.sign().to_int() as f64;

        if self.layer() > 0 || self.exponent() > F64_EXP_MAX as f64 {
            return s * f64::MAX;
        }

        if self.exponent() < F64_EXP_MIN as f64 - 1.0 {
            return 0.0;
        }

        let f = scale10(self.mantissa(), self.exponent());
        if f.is_finite() {
            s * f
        } else {
            s * f64::MAX
        }
    }

    /// Converts `self` to `f32`, saturating like `to_f64`.
    pub fn to_f32(&self) -> f32 {
        let f = self.to_f64();
        if f > f32::MAX as f64 {
            f32::MAX
        } else if f < f32::MIN as f64 {
            f32::MIN
        } else {
            f as f32
        }
    }

    // Integer part of the value. Values within a few ulps of an integer are snapped to it
    // to undo the rounding of the mantissa split.
    fn to_integral(&self) -> f64 {
        let f = self.to_f64();
        let r = f.round();
        if (f - r).abs() <= r.abs() * 4.0 * f64::EPSILON {
            r
        } else {
            f.trunc()
        }
    }

    /// Converts `self` to `i64`, truncating the fractional part.
    /// Out of range values saturate to `i64::MAX` or `i64::MIN`.
    pub fn to_i64(&self) -> i64 {
        self.to_integral() as i64
    }

    /// Converts `self` to `i32`, saturating like `to_i64`.
    pub fn to_i32(&self) -> i32 {
        self.to_integral() as i32
    }

    /// Converts `self` to `u64`, truncating the fractional part.
    /// Negative values become 0, values above the range become `u64::MAX`.
    pub fn to_u64(&self) -> u64 {
        self.to_integral() as u64
    }

    /// Converts `self` to `u32`, saturating like `to_u64`.
    pub fn to_u32(&self) -> u32 {
        self.to_integral() as u32
    }

    /// Converts `self` to `usize`, saturating like `to_u64`.
    pub fn to_usize(&self) -> usize {
        self.to_integral() as usize
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl LayeredNumber {
            /// Constructs a number from an integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::from_finite(i as f64)
            }
        }

        impl From<$s> for LayeredNumber {
            fn from(i: $s) -> Self {
                LayeredNumber::$from_s(i)
            }
        }
    };
}

impl_int_conv!(i8, from_i8);
impl_int_conv!(i16, from_i16);
impl_int_conv!(i32, from_i32);
impl_int_conv!(i64, from_i64);

impl_int_conv!(u8, from_u8);
impl_int_conv!(u16, from_u16);
impl_int_conv!(u32, from_u32);
impl_int_conv!(u64, from_u64);
impl_int_conv!(usize, from_usize);

impl TryFrom<f64> for LayeredNumber {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        LayeredNumber::from_f64(f)
    }
}

impl TryFrom<f32> for LayeredNumber {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self, Self::Error> {
        LayeredNumber::from_f64(f as f64)
    }
}

impl From<LayeredNumber> for f64 {
    fn from(n: LayeredNumber) -> Self {
        n.to_f64()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_float_conv() {
        for _ in 0..1000 {
            let i: i32 = random::<i32>() % 300;
            let mut f: f64 = random::<f64>() * 10f64.powi(i);
            if i & 1 == 0 {
                f = -f;
            }

            let d1 = LayeredNumber::from_f64(f).unwrap();
            let f2 = d1.to_f64();
            if f2 != 0.0 {
                assert!((1.0 - f / f2).abs() < 1e-14);
            } else {
                assert_eq!(f, 0.0);
            }
        }

        for _ in 0..1000 {
            let f: f32 = random::<f32>() * 1e30;
            let d1 = LayeredNumber::try_from(f).unwrap();
            let f2 = d1.to_f32();
            assert!((f - f2).abs() <= f * 1e-6);
        }

        assert_eq!(LayeredNumber::try_from(f64::NAN), Err(Error::InvalidArgument));
        assert_eq!(LayeredNumber::try_from(f32::NEG_INFINITY), Err(Error::InvalidArgument));
        assert!(LayeredNumber::from_f64(f64::MAX).unwrap().to_f64() > 1.79e308);
        assert_eq!(LayeredNumber::from_f64(5e-324).unwrap().to_f64(), 5e-324);
    }

    #[test]
    fn test_saturation() {
        let big = LayeredNumber::from_parts(1.0, 400.0, 0).unwrap();
        let huge = LayeredNumber::from_parts(1.0, 20.0, 3).unwrap();
        let tiny = LayeredNumber::from_parts(1.0, -400.0, 0).unwrap();

        assert_eq!(big.to_f64(), f64::MAX);
        assert_eq!(big.neg().to_f64(), f64::MIN);
        assert_eq!(huge.to_f64(), f64::MAX);
        assert_eq!(huge.neg().to_f64(), f64::MIN);
        assert_eq!(tiny.to_f64(), 0.0);
        assert_eq!(big.to_f32(), f32::MAX);
        assert_eq!(big.neg().to_f32(), f32::MIN);
        assert_eq!(LayeredNumber::from_f64(1e39).unwrap().to_f32(), f32::MAX);

        assert_eq!(big.to_i64(), i64::MAX);
        assert_eq!(big.neg().to_i64(), i64::MIN);
        assert_eq!(big.to_i32(), i32::MAX);
        assert_eq!(huge.neg().to_i32(), i32::MIN);
        assert_eq!(big.to_u64(), u64::MAX);
        assert_eq!(big.neg().to_u64(), 0);
        assert_eq!(huge.to_u32(), u32::MAX);
        assert_eq!(huge.to_usize(), usize::MAX);

        assert_eq!(LayeredNumber::from_f64(-12.9).unwrap().to_i32(), -12);
        assert_eq!(LayeredNumber::from_f64(3e9).unwrap().to_u32(), u32::MAX);
        assert_eq!(f64::from(LayeredNumber::from(7u8)), 7.0);
    }

    #[test]
    fn test_int_conv() {
        for _ in 0..1000 {
            let i = random::<i32>();
            assert_eq!(LayeredNumber::from(i).to_i32(), i);

            let u = random::<u32>();
            assert_eq!(LayeredNumber::from_u32(u).to_u32(), u);

            let i = random::<i64>() >> 20;
            assert_eq!(LayeredNumber::from_i64(i).to_i64(), i);
        }

        assert!(LayeredNumber::from(0u64).is_zero());
        assert_eq!(LayeredNumber::from(-1i8), LayeredNumber::from_f64(-1.0).unwrap());
        assert_eq!(LayeredNumber::from(123456789u32).to_u32(), 123456789);
        assert_eq!(LayeredNumber::from(-987654321i64).to_i64(), -987654321);
    }
}

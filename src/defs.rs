//! Definitions.

use core::fmt::Display;

/// The largest exponent slot value kept before folding one more `log10` into the layer.
pub const EXPONENT_LIMIT: f64 = 9e15;

/// The smallest exponent slot value kept at layer 1 and above (`log10(EXPONENT_LIMIT)`).
pub const LAYER_DOWN: f64 = 15.954242509439325;

/// Orders of magnitude beyond which the smaller operand of a sum is absorbed.
pub const SIGNIFICANCE_WINDOW: f64 = 15.0;

/// Tolerance used when comparing values for equality, in log10 units.
pub const EQ_TOLERANCE: f64 = 1e-10;

/// A layer 1 value keeps its mantissa visible in scientific notation while its slot is below this value.
pub const MANTISSA_VISIBLE_LIMIT: f64 = 1e15;

/// Upper bound on iterations performed by tetration.
pub const TETRATION_ITERATION_LIMIT: usize = 500;

/// Largest decimal exponent of a finite `f64`.
pub const F64_EXP_MAX: i32 = 308;

/// Smallest decimal exponent of a non-zero `f64`.
pub const F64_EXP_MIN: i32 = -323;

/// Sign.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Zero.
    Zero = 0,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        *self == Sign::Zero
    }

    /// Returns 1 for the positive sign, -1 for the negative sign, and 0 for zero.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Returns the sign of a float. Zero and NaN map to `Sign::Zero`.
    pub fn of(f: f64) -> Self {
        if f > 0.0 {
            Sign::Pos
        } else if f < 0.0 {
            Sign::Neg
        } else {
            Sign::Zero
        }
    }

    /// Returns the sign of a product of values with signs `self` and `other`.
    pub fn mul(&self, other: Sign) -> Self {
        match (*self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Pos,
            _ => Sign::Neg,
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Divisor is zero.
    DivideByZero,

    /// The operation is not defined for the given operand, e.g. root of a value at layer 1 or above.
    UnsupportedOperation,

    /// Invalid argument, e.g. a non-finite float or an unparseable exact string.
    InvalidArgument,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::DivideByZero => "division by zero",
            Error::UnsupportedOperation => "unsupported operation",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(Sign::Pos.invert(), Sign::Neg);
        assert_eq!(Sign::Neg.invert(), Sign::Pos);
        assert_eq!(Sign::Zero.invert(), Sign::Zero);

        assert_eq!(Sign::Neg.mul(Sign::Neg), Sign::Pos);
        assert_eq!(Sign::Neg.mul(Sign::Pos), Sign::Neg);
        assert_eq!(Sign::Zero.mul(Sign::Neg), Sign::Zero);

        assert_eq!(Sign::of(-0.5), Sign::Neg);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(f64::NAN), Sign::Zero);
        assert!(Sign::Neg < Sign::Zero && Sign::Zero < Sign::Pos);
        assert_eq!(Sign::Neg.to_int(), -1);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::DivideByZero.to_string(), "division by zero");
        assert_eq!(Error::UnsupportedOperation.to_string(), "unsupported operation");
        assert_eq!(Error::InvalidArgument.to_string(), "invalid argument");
    }

    #[test]
    fn test_thresholds() {
        assert!((EXPONENT_LIMIT.log10() - LAYER_DOWN).abs() < 1e-12);
    }
}

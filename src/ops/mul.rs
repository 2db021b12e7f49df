//! Multiplication and division.

use crate::defs::Error;
use crate::num::{LayeredNumber, ONE, ZERO};

impl LayeredNumber {
    /// Multiplies `self` by `d2` and returns the result of the operation.
    pub fn mul(&self, d2: &Self) -> Self {
        if self.is_zero() || d2.is_zero() {
            return ZERO;
        }

        if self.is_one() {
            return *d2;
        }

        if d2.is_one() {
            return *self;
        }

        let sign = self.sign().mul(d2.sign());
        let m = self.mantissa() * d2.mantissa();

        if self.layer() == 0 && d2.layer() == 0 {
            Self::normalize(sign, m, self.exponent() + d2.exponent(), 0)
        } else {
            let t = self.true_exponent().add(&d2.true_exponent());
            Self::compose(sign, m, &t)
        }
    }

    /// Divides `self` by `d2` and returns the result of the operation.
    ///
    /// ## Errors
    ///
    ///  - DivideByZero: the divisor is zero.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivideByZero);
        }

        if self.is_zero() {
            return Ok(ZERO);
        }

        if d2.is_one() {
            return Ok(*self);
        }

        let sign = self.sign().mul(d2.sign());
        let m = self.mantissa() / d2.mantissa();

        if self.layer() == 0 && d2.layer() == 0 {
            Ok(Self::normalize(sign, m, self.exponent() - d2.exponent(), 0))
        } else {
            let t = self.true_exponent().sub(&d2.true_exponent());
            Ok(Self::compose(sign, m, &t))
        }
    }

    /// Returns the reciprocal of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivideByZero: `self` is zero.
    pub fn recip(&self) -> Result<Self, Error> {
        ONE.div(self)
    }
}

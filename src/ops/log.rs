//! Logarithms.

use crate::defs::Error;
use crate::num::LayeredNumber;
use core::f64::consts::{LN_10, LOG2_10};

impl LayeredNumber {
    /// Returns logarithm of base 10 of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative or zero.
    pub fn log10(&self) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::InvalidArgument);
        }

        if self.layer() == 0 {
            Ok(Self::from_finite(self.exponent() + self.mantissa().log10()))
        } else {
            let m = Self::from_finite(self.mantissa().log10());
            Ok(self.true_exponent().add(&m))
        }
    }

    /// Returns logarithm of base `b` of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` or `b` is negative or zero.
    ///  - DivideByZero: `b` is equal to 1.
    pub fn log(&self, b: &Self) -> Result<Self, Error> {
        let n = self.log10()?;
        let d = b.log10()?;
        n.div(&d)
    }

    /// Returns natural logarithm of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative or zero.
    pub fn ln(&self) -> Result<Self, Error> {
        Ok(self.log10()?.mul(&Self::from_finite(LN_10)))
    }

    /// Returns logarithm of base 2 of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative or zero.
    pub fn log2(&self) -> Result<Self, Error> {
        Ok(self.log10()?.mul(&Self::from_finite(LOG2_10)))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::num::{ONE, TEN, ZERO};

    #[test]
    fn test_log() {
        let a = LayeredNumber::from_f64(10000.0).unwrap();
        let b = LayeredNumber::from_parts(1.0, 50.0, 0).unwrap();

        assert_eq!(a.log10().unwrap(), LayeredNumber::from_f64(4.0).unwrap());
        assert_eq!(b.log10().unwrap(), LayeredNumber::from_f64(50.0).unwrap());
        assert_eq!(b.log(&a).unwrap(), LayeredNumber::from_f64(12.5).unwrap());
        assert!(ONE.log10().unwrap().is_zero());

        let two = LayeredNumber::from_f64(2.0).unwrap();
        assert_eq!(LayeredNumber::from_f64(1024.0).unwrap().log2().unwrap(), LayeredNumber::from_f64(10.0).unwrap());
        assert_eq!(TEN.ln().unwrap(), LayeredNumber::from_f64(LN_10).unwrap());
        assert_eq!(two.log(&two).unwrap(), ONE);

        assert_eq!(ZERO.log10(), Err(Error::InvalidArgument));
        assert_eq!(two.neg().ln(), Err(Error::InvalidArgument));
        assert_eq!(a.log(&ZERO), Err(Error::InvalidArgument));
        assert_eq!(a.log(&ONE), Err(Error::DivideByZero));
    }

    #[test]
    fn test_log_layers() {
        // log10 of 10^(10^20) is 10^20
        let n = LayeredNumber::from_parts(1.0, 20.0, 1).unwrap();
        let l = n.log10().unwrap();
        assert_eq!(l.layer(), 0);
        assert_eq!(l, LayeredNumber::from_f64(1e20).unwrap());

        // log10 peels off one layer
        let n = LayeredNumber::from_parts(1.0, 100.0, 3).unwrap();
        let l = n.log10().unwrap();
        assert_eq!(l.layer(), 2);
        assert_eq!(l.exponent(), 100.0);

        let l = l.log10().unwrap().log10().unwrap();
        assert_eq!(l.layer(), 0);
        assert_eq!(l, LayeredNumber::from_parts(1.0, 100.0, 0).unwrap());
    }
}

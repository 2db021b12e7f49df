//! Exponentiation, roots, and tetration.

use crate::common::util::{pow10, scale10};
use crate::defs::{Error, Sign, TETRATION_ITERATION_LIMIT};
use crate::num::{LayeredNumber, ONE, ZERO};
use core::f64::consts::LOG10_E;
use log::{trace, warn};

impl LayeredNumber {
    /// Returns `10^self`.
    pub fn pow10(&self) -> Self {
        Self::compose(Sign::Pos, 1.0, self)
    }

    /// Returns `e^self`.
    pub fn exp(&self) -> Self {
        self.mul(&Self::from_finite(LOG10_E)).pow10()
    }

    /// Applies `x -> 10^x` to `self` `n` times.
    /// Once the value reaches layer 1 each further application adds one layer.
    pub fn iterated_pow10(&self, n: u64) -> Self {
        let mut acc = *self;
        let mut n = n;

        while n > 0 && (acc.layer() == 0 || acc.is_negative()) {
            acc = acc.pow10();
            n -= 1;
        }

        if n > 0 {
            acc = Self::normalize(Sign::Pos, 1.0, acc.exponent(), acc.layer().saturating_add(n));
        }

        acc
    }

    /// Returns `self` to the power of `d2`.
    ///
    /// ## Errors
    ///
    ///  - DivideByZero: `self` is zero and `d2` is negative.
    ///  - UnsupportedOperation: `self` is negative and `d2` is not an integer.
    pub fn pow(&self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() || self.is_one() {
            return Ok(ONE);
        }

        if self.is_zero() {
            return if d2.is_negative() {
                Err(Error::DivideByZero)
            } else {
                Ok(ZERO)
            };
        }

        if d2.is_one() {
            return Ok(*self);
        }

        let odd = if self.is_negative() {
            d2.integer_parity().ok_or(Error::UnsupportedOperation)?
        } else {
            false
        };

        if self.fits_f64()
            && d2.fits_f64()
            && self.exponent().abs() < 300.0
            && d2.exponent().abs() < 300.0
        {
            let r = self.to_f64().powf(d2.to_f64());
            if r.is_finite() && r.abs() >= f64::MIN_POSITIVE {
                return Ok(Self::from_finite(r));
            }
        }

        // 10^(log10|self| * d2), the exponent itself may be beyond f64
        let t = self.abs().log10()?.mul(d2);
        let r = t.pow10();

        if r.layer() > self.layer().max(d2.layer()) {
            trace!("power promoted to layer {}", r.layer());
        }

        Ok(if odd { r.neg() } else { r })
    }

    /// Returns `Some(true)` for odd integers, `Some(false)` for even integers, and `None` otherwise.
    fn integer_parity(&self) -> Option<bool> {
        // every f64 above 2^53 is even
        if self.layer() > 0 || self.exponent() >= 16.0 {
            return Some(false);
        }

        let f = self.to_f64();
        if f.fract() != 0.0 {
            None
        } else {
            Some((f % 2.0).abs() == 1.0)
        }
    }

    /// Returns the `n`-th root of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `n` is zero, or `n` is even and `self` is negative.
    ///  - UnsupportedOperation: `self` is at layer 1 or above.
    pub fn root(&self, n: u32) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidArgument);
        }

        if self.layer() > 0 {
            return Err(Error::UnsupportedOperation);
        }

        if self.is_zero() || n == 1 {
            return Ok(*self);
        }

        if self.is_negative() && n % 2 == 0 {
            return Err(Error::InvalidArgument);
        }

        let nf = n as f64;

        // make the exponent a multiple of n
        let rem = self.exponent().rem_euclid(nf);
        let e = (self.exponent() - rem) / nf;

        let m = if rem < 300.0 {
            scale10(self.mantissa(), rem).powf(1.0 / nf)
        } else {
            pow10((self.mantissa().log10() + rem) / nf)
        };

        Ok(Self::normalize(self.sign(), m, e, 0))
    }

    /// Returns the square root of a number.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative.
    ///  - UnsupportedOperation: `self` is at layer 1 or above.
    pub fn sqrt(&self) -> Result<Self, Error> {
        self.root(2)
    }

    /// Returns the cube root of a number.
    ///
    /// ## Errors
    ///
    ///  - UnsupportedOperation: `self` is at layer 1 or above.
    pub fn cbrt(&self) -> Result<Self, Error> {
        self.root(3)
    }

    /// Returns a power tower of `self` of the given height: `self^self^...^self`.
    ///
    /// The result is approximate. Iteration stops at a fixed point, switches to adding
    /// layers once the tower grows past layer 1, and gives up after a fixed number of steps.
    ///
    /// ## Errors
    ///
    ///  - UnsupportedOperation: `self` is zero or negative.
    pub fn tetrate(&self, height: u64) -> Result<Self, Error> {
        if height == 0 {
            return Ok(ONE);
        }

        if !self.is_positive() {
            return Err(Error::UnsupportedOperation);
        }

        let mut acc = *self;
        let mut remaining = height - 1;
        let mut iterations = 0;

        while remaining > 0 {
            if acc.layer() >= 2 {
                return Ok(Self::normalize(
                    Sign::Pos,
                    1.0,
                    acc.exponent(),
                    acc.layer().saturating_add(remaining),
                ));
            }

            if iterations == TETRATION_ITERATION_LIMIT {
                warn!("tetration stopped after {iterations} iterations, {remaining} levels left");
                break;
            }

            let next = self.pow(&acc)?;
            remaining -= 1;
            iterations += 1;

            if next == acc {
                return Ok(next);
            }

            acc = next;
        }

        Ok(acc)
    }
}

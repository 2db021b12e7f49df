//! Addition and subtraction.

use crate::common::util::pow10;
use crate::defs::SIGNIFICANCE_WINDOW;
use crate::num::LayeredNumber;
use core::cmp::Ordering;

impl LayeredNumber {
    /// Adds `d2` to `self` and returns the result of the operation.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, 1)
    }

    /// Subtracts `d2` from `self` and returns the result of the operation.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add_sub(d2, -1)
    }

    // add if op >= 0, subtract if op < 0
    fn add_sub(&self, d2: &Self, op: i8) -> Self {
        let d2 = if op < 0 { d2.neg() } else { *d2 };

        if self.is_zero() {
            return d2;
        }

        if d2.is_zero() {
            return *self;
        }

        // n1 is the operand with the larger magnitude
        let (n1, n2) = if self.cmp_abs(&d2) == Ordering::Less {
            (d2, *self)
        } else {
            (*self, d2)
        };

        let gap = match Self::magnitude_gap(&n1, &n2) {
            Some(gap) if gap <= SIGNIFICANCE_WINDOW => gap,
            _ => return n1,
        };

        let m2 = n2.mantissa() / pow10(gap);
        let m = if n1.sign() == n2.sign() {
            n1.mantissa() + m2
        } else {
            n1.mantissa() - m2
        };

        Self::normalize(n1.sign(), m, n1.exponent(), n1.layer())
    }

    // Difference in orders of magnitude between n1 and a smaller n2 measured in the
    // units of n1's mantissa, or None if it is too large to be represented.
    fn magnitude_gap(n1: &Self, n2: &Self) -> Option<f64> {
        match (n1.layer(), n2.layer()) {
            (0, 0) => Some(n1.exponent() - n2.exponent()),
            (1, 0) => {
                let t = pow10(n1.exponent());
                if t.is_finite() {
                    Some(t - n2.exponent())
                } else {
                    None
                }
            }
            (l1, l2) if l1 == l2 && n1.slot_eq(n2) => Some(0.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::num::{ONE, ZERO};

    #[test]
    fn test_add() {
        let a = LayeredNumber::from_f64(10000.0).unwrap();
        let b = LayeredNumber::from_parts(1.0, 50.0, 0).unwrap();

        // absorbed
        assert_eq!(a.add(&b).to_raw_parts(), b.to_raw_parts());
        assert_eq!(b.add(&a).to_raw_parts(), b.to_raw_parts());
        assert_eq!(a.sub(&b).to_raw_parts(), b.neg().to_raw_parts());
        assert_eq!(b.sub(&a).to_raw_parts(), b.to_raw_parts());

        let c = LayeredNumber::from_parts(1.0, 30.0, 0).unwrap();
        let d = LayeredNumber::from_parts(6.0, 29.0, 0).unwrap();
        assert_eq!(c.add(&d), LayeredNumber::from_parts(1.6, 30.0, 0).unwrap());
        assert_eq!(c.sub(&d), LayeredNumber::from_parts(4.0, 29.0, 0).unwrap());
        assert_eq!(d.sub(&c), LayeredNumber::from_parts(-4.0, 29.0, 0).unwrap());

        // exactly at the window
        let e = LayeredNumber::from_parts(1.0, 15.0, 0).unwrap();
        assert_eq!(e.add(&ONE), LayeredNumber::from_f64(1e15 + 1.0).unwrap());
        let f = LayeredNumber::from_parts(1.0, 16.0, 0).unwrap();
        assert_eq!(f.add(&ONE).to_raw_parts(), f.to_raw_parts());

        // identity and cancellation
        assert_eq!(a.add(&ZERO).to_raw_parts(), a.to_raw_parts());
        assert_eq!(ZERO.sub(&a).to_raw_parts(), a.neg().to_raw_parts());
        assert!(a.sub(&a).is_zero());
        assert_eq!(
            LayeredNumber::from_f64(0.1).unwrap().add(&LayeredNumber::from_f64(0.2).unwrap()),
            LayeredNumber::from_f64(0.3).unwrap()
        );
    }

    #[test]
    fn test_add_layers() {
        let big = LayeredNumber::from_parts(3.0, 20.0, 1).unwrap();
        let small = LayeredNumber::from_parts(5.0, 1e10, 0).unwrap();
        assert_eq!(big.add(&small).to_raw_parts(), big.to_raw_parts());
        assert_eq!(small.sub(&big).to_raw_parts(), big.neg().to_raw_parts());

        // same slot: mantissas combine
        let one_more = LayeredNumber::from_parts(1.0, 20.0, 1).unwrap();
        let sum = big.add(&one_more);
        assert_eq!(sum.layer(), 1);
        assert_eq!(sum.exponent(), 20.0);
        assert_eq!(sum.mantissa(), 4.0);
        assert!(big.sub(&big).is_zero());
    }
}

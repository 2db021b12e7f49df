//! Standard library traits for LayeredNumber.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::{LayeredNumber, ONE, ZERO};
use core::fmt::{Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

//
// ops traits
//

impl Add for LayeredNumber {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        LayeredNumber::add(&self, &rhs)
    }
}

impl AddAssign for LayeredNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = LayeredNumber::add(self, &rhs)
    }
}

impl Sub for LayeredNumber {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        LayeredNumber::sub(&self, &rhs)
    }
}

impl SubAssign for LayeredNumber {
    fn sub_assign(&mut self, rhs: Self) {
        *self = LayeredNumber::sub(self, &rhs)
    }
}

impl Mul for LayeredNumber {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        LayeredNumber::mul(&self, &rhs)
    }
}

impl MulAssign for LayeredNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = LayeredNumber::mul(self, &rhs)
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use `LayeredNumber::div` to get an error instead.
impl Div for LayeredNumber {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        div_or_panic(&self, &rhs)
    }
}

/// # Panics
///
/// Panics if the divisor is zero.
impl DivAssign for LayeredNumber {
    fn div_assign(&mut self, rhs: Self) {
        *self = div_or_panic(self, &rhs)
    }
}

impl Add<&LayeredNumber> for LayeredNumber {
    type Output = Self;
    fn add(self, rhs: &LayeredNumber) -> Self::Output {
        LayeredNumber::add(&self, rhs)
    }
}

impl AddAssign<&LayeredNumber> for LayeredNumber {
    fn add_assign(&mut self, rhs: &LayeredNumber) {
        *self = LayeredNumber::add(self, rhs)
    }
}

impl Sub<&LayeredNumber> for LayeredNumber {
    type Output = Self;
    fn sub(self, rhs: &LayeredNumber) -> Self::Output {
        LayeredNumber::sub(&self, rhs)
    }
}

impl SubAssign<&LayeredNumber> for LayeredNumber {
    fn sub_assign(&mut self, rhs: &LayeredNumber) {
        *self = LayeredNumber::sub(self, rhs)
    }
}

impl Mul<&LayeredNumber> for LayeredNumber {
    type Output = Self;
    fn mul(self, rhs: &LayeredNumber) -> Self::Output {
        LayeredNumber::mul(&self, rhs)
    }
}

impl MulAssign<&LayeredNumber> for LayeredNumber {
    fn mul_assign(&mut self, rhs: &LayeredNumber) {
        *self = LayeredNumber::mul(self, rhs)
    }
}

impl Div<&LayeredNumber> for LayeredNumber {
    type Output = Self;
    fn div(self, rhs: &LayeredNumber) -> Self::Output {
        div_or_panic(&self, rhs)
    }
}

impl DivAssign<&LayeredNumber> for LayeredNumber {
    fn div_assign(&mut self, rhs: &LayeredNumber) {
        *self = div_or_panic(self, rhs)
    }
}

impl Neg for LayeredNumber {
    type Output = Self;
    fn neg(self) -> Self::Output {
        LayeredNumber::neg(&self)
    }
}

impl Neg for &LayeredNumber {
    type Output = LayeredNumber;
    fn neg(self) -> Self::Output {
        LayeredNumber::neg(self)
    }
}

fn div_or_panic(d1: &LayeredNumber, d2: &LayeredNumber) -> LayeredNumber {
    match LayeredNumber::div(d1, d2) {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

//
// other traits
//

impl Display for LayeredNumber {
    /// Formats the number with the default context.
    /// Precision, if given, sets the number of decimal places.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut ctx = Context::new();
        if let Some(p) = f.precision() {
            ctx.decimals(p);
        }
        f.write_str(&self.format(&ctx))
    }
}

impl Default for LayeredNumber {
    fn default() -> Self {
        ZERO
    }
}

impl FromStr for LayeredNumber {
    type Err = Error;

    /// Parses the number using the default context.
    fn from_str(src: &str) -> Result<LayeredNumber, Self::Err> {
        LayeredNumber::parse(src, &Context::new())
    }
}

impl Product for LayeredNumber {
    fn product<I: Iterator<Item = LayeredNumber>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl Sum for LayeredNumber {
    fn sum<I: Iterator<Item = LayeredNumber>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a LayeredNumber> for LayeredNumber {
    fn product<I: Iterator<Item = &'a LayeredNumber>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a LayeredNumber> for LayeredNumber {
    fn sum<I: Iterator<Item = &'a LayeredNumber>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::num::TEN;

    fn num(s: &str) -> LayeredNumber {
        s.parse().unwrap()
    }

    #[test]
    fn test_ops_traits() {
        let a = num("10000");
        let b = num("1e50");

        assert_eq!(a + b, b);
        assert_eq!(b - a, b);
        assert_eq!(a * b, num("1e54"));
        assert_eq!(a / b, num("1e-46"));
        assert_eq!(-a, num("-10000"));
        assert_eq!(-&a, num("-10000"));
        assert_eq!(a + &b, b);
        assert_eq!(a * &TEN, num("1e5"));

        let mut c = a;
        c += b;
        assert_eq!(c, b);
        c -= &b;
        assert!(c.is_zero());

        let mut c = TEN;
        c *= TEN;
        c *= &TEN;
        assert_eq!(c, num("1000"));
        c /= TEN;
        c /= &TEN;
        assert_eq!(c, TEN);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = ONE / ZERO;
    }

    #[test]
    fn test_display() {
        assert_eq!(num("12345.678").to_string(), "12,345.68");
        assert_eq!(format!("{:.4}", num("1.23456789e30")), "1.2346e30");
        assert_eq!(format!("{:.0}", num("2.5e1e20")), "3ee20");
        assert_eq!(LayeredNumber::default().to_string(), "0");
        assert_eq!(num("1e1e30").to_string(), "1ee30");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.5e3".parse::<LayeredNumber>(), Ok(num("1500")));
        assert_eq!(LayeredNumber::from_str("1enan"), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_sum_product() {
        let v = [num("2"), num("3"), num("1e100")];

        let s: LayeredNumber = v.iter().sum();
        assert_eq!(s, num("1e100"));
        let p: LayeredNumber = v.iter().product();
        assert_eq!(p, num("6e100"));

        let s: LayeredNumber = v.into_iter().take(2).sum();
        assert_eq!(s, num("5"));
        let p: LayeredNumber = v.into_iter().take(2).product();
        assert_eq!(p, num("6"));

        let empty: [LayeredNumber; 0] = [];
        assert!(empty.iter().sum::<LayeredNumber>().is_zero());
        assert!(empty.iter().product::<LayeredNumber>().is_one());
    }
}

//! Layered-num is a library of numbers far beyond the range of `f64`, and of their tiered text notation.
//!
//! A value is stored as `sign * mantissa * 10^T`, where `T` is an `f64` exponent with `x -> 10^x`
//! applied `layer` times. At layer 0 this is ordinary scientific notation. Once an exponent
//! leaves the safe range of `f64` it is replaced by its own `log10` and the layer grows,
//! so the scale reaches towers such as `10^10^10^20` without losing the magnitude.
//!
//! Precision is that of `f64`: about 15 significant digits are carried, smaller terms
//! are absorbed by larger ones, and equality is tolerant to rounding noise.
//!
//! ## Examples
//!
//! ```
//! use layered_num::{Context, LayeredNumber, Notation};
//!
//! let a = LayeredNumber::from_f64(10000.0).unwrap();
//! let b: LayeredNumber = "1e50".parse().unwrap();
//!
//! // Small terms are absorbed.
//! assert_eq!(a + b, b);
//! assert_eq!(a * b, "1e54".parse::<LayeredNumber>().unwrap());
//!
//! // Exponents beyond f64 move up a layer.
//! let t = LayeredNumber::from_parts(1.0, 1e30, 0).unwrap();
//! assert_eq!(t.layer(), 1);
//! assert_eq!(t.to_string(), "1ee30");
//!
//! // Formatting is configured with a context.
//! let mut ctx = Context::new();
//! ctx.notation(Notation::Engineering);
//! assert_eq!(b.mul(&a).mul(&LayeredNumber::TEN).format(&ctx), "10e54");
//!
//! // Division by zero is an error.
//! assert!(a.div(&LayeredNumber::ZERO).is_err());
//! ```
//!
//! ## Logging
//!
//! The library emits diagnostics through the `log` facade: malformed input that is read
//! leniently is reported at `debug` level, a tetration stopped by its iteration limit at `warn` level.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::ctx::Notation;
pub use crate::ctx::MAX_DECIMALS;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::num::LayeredNumber;
pub use crate::num::ONE;
pub use crate::num::TEN;
pub use crate::num::ZERO;

pub use crate::defs::EQ_TOLERANCE;
pub use crate::defs::EXPONENT_LIMIT;
pub use crate::defs::LAYER_DOWN;
pub use crate::defs::MANTISSA_VISIBLE_LIMIT;
pub use crate::defs::SIGNIFICANCE_WINDOW;
pub use crate::defs::TETRATION_ITERATION_LIMIT;

#[cfg(test)]
mod tests {

    #[test]
    fn test_layered_number() {
        use crate::{Context, LayeredNumber, Notation};

        let mut ctx = Context::new();
        ctx.decimals(3);

        // Start with a googol.
        let googol = LayeredNumber::from_parts(1.0, 100.0, 0).unwrap();
        assert_eq!(googol.format(&ctx), "1e100");

        // A googolplex is ten to the googol.
        let googolplex = googol.pow10();
        assert_eq!(googolplex.layer(), 1);
        assert_eq!(googolplex.format(&ctx), "1ee100");

        // Its square is ten to two googol.
        let sq = googolplex.mul(&googolplex);
        assert_eq!(sq, LayeredNumber::from_parts(1.0, 100.0 + 2f64.log10(), 1).unwrap());
        assert_eq!(sq.format(&ctx), "1e2e100");

        // The logarithm brings the value back.
        let l = googolplex.log10().unwrap();
        assert_eq!(l, googol);

        // Towers are printed compactly from some height on.
        let tower = googol.iterated_pow10(6);
        assert_eq!(tower.layer(), 6);
        assert_eq!(tower.format(&ctx), "(e^6)1e100");

        ctx.notation(Notation::Tower);
        assert_eq!(googolplex.pow10().format(&ctx), "(e^2)1e100");

        // And everything parses back.
        for n in [googol, googolplex, sq, tower] {
            assert_eq!(LayeredNumber::parse(&n.format(&ctx), &ctx).unwrap(), n);
        }
    }
}

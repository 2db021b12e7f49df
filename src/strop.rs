//! LayeredNumber formatting and parsing.

use crate::common::util::{int_digits, pow10, round_to};
use crate::ctx::{Context, Notation};
use crate::defs::{Error, Sign};
use crate::num::LayeredNumber;
use core::fmt::Write;
use itertools::Itertools;

// Significant decimal digits printed for a plain decimal.
const SIGNIFICANT_DIGITS: usize = 16;

impl LayeredNumber {
    /// Parses the number from the string `s` using separator and grouping of `ctx`.
    ///
    /// Accepted forms are plain decimals (`12,345.67`), scientific and chained notation
    /// (`1.5e30`, `2e1e20`, `ee30`), and tower notation (`(e^7)1e20`).
    /// The input is case-insensitive. Malformed segments are read as 1.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: a segment describes an infinite or NaN value.
    pub fn parse(s: &str, ctx: &Context) -> Result<Self, Error> {
        let ps = crate::parser::parse(s, ctx)?;

        let mut iter = ps.segments().iter().rev();
        let mut acc = match iter.next() {
            Some(v) => Self::from_finite(*v),
            None => Self::ONE,
        };

        for m in iter {
            acc = Self::compose(Sign::Pos, *m, &acc);
        }

        if ps.height() > 0 {
            acc = acc.iterated_pow10(ps.height());
        }

        if ps.sign().is_negative() {
            acc = acc.neg();
        }

        Ok(acc)
    }

    /// Formats the number using notation and parameters of `ctx`.
    pub fn format(&self, ctx: &Context) -> String {
        let mut s = String::new();
        self.write_notation(ctx, &mut s);

        if ctx.get_collapse_ones() {
            let sep = ctx.get_separator();
            let from = format!("{sep}1{sep}");
            let to = format!("{sep}{sep}");
            while s.contains(&from) {
                s = s.replace(&from, &to);
            }
        }

        s
    }

    fn write_notation(&self, ctx: &Context, out: &mut String) {
        if self.is_zero() {
            out.push('0');
            return;
        }

        if self.is_negative() {
            out.push('-');
        }

        let v = self.abs();
        let sep = ctx.get_separator();

        if v.layer() > 0
            && (v.layer() >= ctx.get_max_chain()
                || (ctx.get_notation() == Notation::Tower && !v.mantissa_visible()))
        {
            out.push('(');
            out.push(sep);
            out.push('^');
            let _ = write!(out, "{}", v.layer());
            out.push(')');

            Self::normalize(Sign::Pos, 1.0, v.exponent(), 0).write_notation(ctx, out);
            return;
        }

        if v.is_plain(ctx) {
            // below 1 the leading zeros do not count against the decimal places
            let d = if v.exponent() < 0.0 {
                ctx.get_decimals() + (-v.exponent()) as usize
            } else {
                ctx.get_decimals().min(SIGNIFICANT_DIGITS.saturating_sub(int_digits(v.to_f64())))
            };
            write_decimal(v.to_f64(), d, ctx.get_grouping(), out);
            return;
        }

        if v.layer() == 0 {
            let (step, limit) = if ctx.get_notation() == Notation::Engineering {
                (3.0, 1000.0)
            } else {
                (1.0, 10.0)
            };

            let shift = v.exponent().rem_euclid(step);
            let mut m = round_to(v.mantissa() * pow10(shift), ctx.get_decimals());
            let mut e = v.exponent() - shift;

            if m >= limit {
                m /= limit;
                e += step;
            }

            write_decimal(m, mantissa_decimals(m, ctx), None, out);
            out.push(sep);
            Self::from_finite(e).write_notation(ctx, out);
        } else {
            if v.mantissa_visible() {
                let mut m = round_to(v.mantissa(), ctx.get_decimals());
                if m >= 10.0 {
                    // the carry is below the precision of the exponent
                    m = (v.mantissa() * pow10(ctx.get_decimals() as f64)).floor()
                        / pow10(ctx.get_decimals() as f64);
                }
                write_decimal(m, mantissa_decimals(m, ctx), None, out);
            }

            out.push(sep);
            v.true_exponent().write_notation(ctx, out);
        }
    }

    // True if a positive `self` is rendered as a grouped decimal.
    fn is_plain(&self, ctx: &Context) -> bool {
        if self.layer() > 0 || self.exponent() < -(ctx.get_decimals() as f64) {
            return false;
        }

        match ctx.get_notation() {
            Notation::Plain => self.fits_f64(),
            _ => self.exponent() <= ctx.get_plain_max_exponent(),
        }
    }

    /// Formats the number as `<mantissa>_<exponent>_<layer>`, where the mantissa carries the sign.
    /// The output does not depend on any formatting parameters and is read back exactly by `from_exact_str`.
    pub fn to_exact_string(&self) -> String {
        let m = self.sign().to_int() as f64 * self.mantissa();
        format!("{:?}_{:?}_{}", m, self.exponent(), self.layer())
    }

    /// Parses a string produced by `to_exact_string`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not in the form `<mantissa>_<exponent>_<layer>`.
    pub fn from_exact_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.trim().split('_');

        let (m, e, layer) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(e), Some(layer), None) => (m, e, layer),
            _ => return Err(Error::InvalidArgument),
        };

        let m = m.parse::<f64>().map_err(|_| Error::InvalidArgument)?;
        let e = e.parse::<f64>().map_err(|_| Error::InvalidArgument)?;
        let layer = layer.parse::<u64>().map_err(|_| Error::InvalidArgument)?;

        Self::from_parts(m, e, layer)
    }
}

fn mantissa_decimals(m: f64, ctx: &Context) -> usize {
    ctx.get_decimals().min(SIGNIFICANT_DIGITS.saturating_sub(int_digits(m)))
}

// Writes a non-negative `f` with `decimals` places, trailing zeros removed.
fn write_decimal(f: f64, decimals: usize, grouping: Option<char>, out: &mut String) {
    let s = format!("{:.*}", decimals, f);

    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (s.as_str(), ""),
    };

    match grouping {
        Some(g) => {
            let grouped = int
                .chars()
                .rev()
                .chunks(3)
                .into_iter()
                .map(|c| c.collect::<String>())
                .join(&g.to_string());
            out.extend(grouped.chars().rev());
        }
        None => out.push_str(int),
    }

    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
}

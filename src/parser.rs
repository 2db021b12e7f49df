//! Parser parses numbers written in plain, scientific, chained, or tower notation.

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::Sign;
use core::str::Chars;
use log::debug;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    separator: char,
    grouping: Option<char>,
    sign: Sign,
    height: u64,
    segments: Vec<f64>,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str, ctx: &Context) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            separator: ctx.get_separator(),
            grouping: ctx.get_grouping(),
            sign: Sign::Pos,
            height: 0,
            segments: Vec::new(),
        }
    }

    // Returns next character of a string in lower case, skipping whitespace and
    // grouping characters, or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        loop {
            self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
            match self.cur_ch {
                Some(c) if c.is_whitespace() || Some(c) == self.grouping => continue,
                _ => return self.cur_ch,
            }
        }
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the number of `x -> 10^x` applications requested by a tower prefix.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Returns the parsed segments, outermost first.
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }

    fn parse_sign(&mut self) {
        match self.cur_char() {
            Some('-') => {
                self.sign = Sign::Neg;
                self.next_char();
            }
            Some('+') => {
                self.next_char();
            }
            _ => {}
        }
    }

    // (e^N)
    fn parse_tower(&mut self) {
        if self.cur_char() != Some('(') {
            return;
        }

        let mut inner = String::new();
        while let Some(c) = self.next_char() {
            if c == ')' {
                self.next_char();
                break;
            }
            inner.push(c);
        }

        let height = inner
            .strip_prefix(self.separator)
            .and_then(|s| s.strip_prefix('^'))
            .and_then(|s| s.parse::<u64>().ok());

        self.height = match height {
            Some(h) => h,
            None => {
                debug!("malformed tower height {inner:?}, using 1");
                1
            }
        };
    }

    fn parse_segments(&mut self) -> Result<(), Error> {
        let mut seg = String::new();

        while let Some(c) = self.cur_char() {
            if c == self.separator {
                self.push_segment(&seg)?;
                seg.clear();
            } else {
                seg.push(c);
            }
            self.next_char();
        }

        self.push_segment(&seg)
    }

    // Malformed segments default to 1, segments describing non-finite values are rejected.
    fn push_segment(&mut self, seg: &str) -> Result<(), Error> {
        let v = match seg.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            Ok(_) => return Err(Error::InvalidArgument),
            Err(_) => {
                if !seg.is_empty() {
                    debug!("malformed segment {seg:?}, using 1");
                }
                1.0
            }
        };

        self.segments.push(v);
        Ok(())
    }
}

/// Parse a number.
/// The separator splits the input into segments, each segment except the last one is
/// a mantissa of ten raised to the rest of the input.
pub fn parse<'a>(s: &'a str, ctx: &Context) -> Result<ParserState<'a>, Error> {
    let mut parser_state = ParserState::new(s, ctx);

    parser_state.next_char();
    parser_state.parse_sign();
    parser_state.parse_tower();
    parser_state.parse_segments()?;

    Ok(parser_state)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parser() {
        let ctx = Context::new();

        let ps = parse("12,345.5", &ctx).unwrap();
        assert_eq!(ps.sign(), Sign::Pos);
        assert_eq!(ps.height(), 0);
        assert_eq!(ps.segments(), &[12345.5]);

        let ps = parse(" -1.5E3 ", &ctx).unwrap();
        assert_eq!(ps.sign(), Sign::Neg);
        assert_eq!(ps.segments(), &[1.5, 3.0]);

        let ps = parse("+2e-1e10", &ctx).unwrap();
        assert_eq!(ps.sign(), Sign::Pos);
        assert_eq!(ps.segments(), &[2.0, -1.0, 10.0]);

        let ps = parse("ee30", &ctx).unwrap();
        assert_eq!(ps.segments(), &[1.0, 1.0, 30.0]);

        let ps = parse("-(e^12)1.5e20", &ctx).unwrap();
        assert_eq!(ps.sign(), Sign::Neg);
        assert_eq!(ps.height(), 12);
        assert_eq!(ps.segments(), &[1.5, 20.0]);

        // malformed parts default to 1
        let ps = parse("abc", &ctx).unwrap();
        assert_eq!(ps.segments(), &[1.0]);
        let ps = parse("(x)5", &ctx).unwrap();
        assert_eq!(ps.height(), 1);
        assert_eq!(ps.segments(), &[5.0]);
        let ps = parse("", &ctx).unwrap();
        assert_eq!(ps.segments(), &[1.0]);

        // non-finite segments
        assert!(matches!(parse("nan", &ctx), Err(Error::InvalidArgument)));
        assert!(matches!(parse("1einf", &ctx), Err(Error::InvalidArgument)));

        let mut ctx = Context::new();
        ctx.separator('x').grouping(Some('_'));
        let ps = parse("1_000x2.5e3", &ctx).unwrap();
        assert_eq!(ps.segments(), &[1000.0, 2500.0]);
        assert!(matches!(parse("1e999", &ctx), Err(Error::InvalidArgument)));
    }
}

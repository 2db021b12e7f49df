//! Formatting and parsing parameters.

/// Largest number of decimal places a formatted mantissa can carry.
pub const MAX_DECIMALS: usize = 15;

/// Notation used to render numbers as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Grouped decimal digits whenever the value fits into `f64`, scientific otherwise.
    Plain,

    /// `<mantissa>e<exponent>`, with the exponent formatted recursively.
    Scientific,

    /// Same as scientific, with the exponent lowered to a multiple of 3.
    Engineering,

    /// Same as scientific for moderate values, `(e^<layer>)<value>` once the mantissa is no longer meaningful.
    Tower,
}

/// Context holds the parameters of formatting and parsing.
/// It is passed explicitly to every call, so formatting has no global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    notation: Notation,
    separator: char,
    collapse_ones: bool,
    grouping: Option<char>,
    decimals: usize,
    plain_max_exponent: f64,
    max_chain: u64,
}

impl Context {
    /// Create a new context with default parameters:
    /// scientific notation, separator `e`, `e1e` collapsed into `ee`, `,` digit grouping,
    /// 2 decimal places, plain decimals up to `10^5`, and at most 5 chained separators.
    pub fn new() -> Self {
        Context {
            notation: Notation::Scientific,
            separator: 'e',
            collapse_ones: true,
            grouping: Some(','),
            decimals: 2,
            plain_max_exponent: 5.0,
            max_chain: 5,
        }
    }

    /// Sets the notation.
    pub fn notation(&mut self, notation: Notation) -> &mut Self {
        self.notation = notation;
        self
    }

    /// Sets the separator between a mantissa and its exponent. The separator is case-insensitive.
    pub fn separator(&mut self, separator: char) -> &mut Self {
        self.separator = separator.to_ascii_lowercase();
        self
    }

    /// Sets whether `e1e` chains are collapsed into `ee`.
    pub fn collapse_ones(&mut self, collapse_ones: bool) -> &mut Self {
        self.collapse_ones = collapse_ones;
        self
    }

    /// Sets the digit grouping character, or disables grouping.
    pub fn grouping(&mut self, grouping: Option<char>) -> &mut Self {
        self.grouping = grouping;
        self
    }

    /// Sets the number of decimal places, at most `MAX_DECIMALS`.
    pub fn decimals(&mut self, decimals: usize) -> &mut Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }

    /// Sets the largest exponent still rendered as a plain decimal.
    pub fn plain_max_exponent(&mut self, e: f64) -> &mut Self {
        self.plain_max_exponent = e;
        self
    }

    /// Sets the layer starting from which scientific and engineering notations switch to tower form.
    pub fn max_chain(&mut self, max_chain: u64) -> &mut Self {
        self.max_chain = max_chain;
        self
    }

    /// Returns the notation.
    pub fn get_notation(&self) -> Notation {
        self.notation
    }

    /// Returns the separator.
    pub fn get_separator(&self) -> char {
        self.separator
    }

    /// Returns true if `e1e` chains are collapsed.
    pub fn get_collapse_ones(&self) -> bool {
        self.collapse_ones
    }

    /// Returns the digit grouping character.
    pub fn get_grouping(&self) -> Option<char> {
        self.grouping
    }

    /// Returns the number of decimal places.
    pub fn get_decimals(&self) -> usize {
        self.decimals
    }

    /// Returns the largest exponent rendered as a plain decimal.
    pub fn get_plain_max_exponent(&self) -> f64 {
        self.plain_max_exponent
    }

    /// Returns the layer starting from which tower form is used.
    pub fn get_max_chain(&self) -> u64 {
        self.max_chain
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

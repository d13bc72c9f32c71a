//! Type definitions for money formatting
//!
//! This module defines the option record shared by every operation, the
//! format-template representation, and the tagged value types used at the
//! API boundary in place of runtime type sniffing.

/// Rounding direction applied when reducing a value to fixed precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round toward positive infinity (ceiling)
    Up,
    /// Round toward negative infinity (floor)
    Down,
    /// Round to the nearest value
    #[default]
    Nearest,
}

/// A single token of a format template parsed from a pattern string
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateToken {
    /// Currency symbol insertion point (%s)
    Symbol,
    /// Value insertion point (%v)
    Value,
    /// Literal character to display directly
    LiteralChar(char),
}

/// Format template selection: one pattern for all signs, or explicit
/// per-sign patterns.
///
/// A pattern is expected to contain the `%v` placeholder; one that does not
/// is rendered with the literal placeholder text left in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSpec {
    /// Single pattern; the negative variant is derived by moving a minus
    /// sign in front of `%v`, and zero amounts reuse the pattern unchanged
    Pattern(String),
    /// Explicit positive/negative/zero patterns; absent `neg`/`zero`
    /// fall back to `pos`
    BySign {
        pos: String,
        neg: Option<String>,
        zero: Option<String>,
    },
}

impl FormatSpec {
    /// Single pattern used for every sign
    pub fn pattern(pattern: impl Into<String>) -> Self {
        FormatSpec::Pattern(pattern.into())
    }

    /// Explicit per-sign patterns
    pub fn by_sign(pos: impl Into<String>, neg: Option<String>, zero: Option<String>) -> Self {
        FormatSpec::BySign {
            pos: pos.into(),
            neg,
            zero,
        }
    }
}

/// Fully resolved per-sign templates derived from a [`FormatSpec`]
#[derive(Debug, Clone, PartialEq)]
pub struct FormatTriple {
    /// Template for amounts greater than zero
    pub pos: String,
    /// Template for amounts less than zero
    pub neg: String,
    /// Template for amounts equal to zero
    pub zero: String,
}

/// Options controlling formatting and parsing
///
/// The record is a plain value: per-call overrides are expressed by cloning
/// a base (usually [`crate::settings::defaults`]) and applying `with_*`
/// setters, so no call ever mutates shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Currency display string
    pub symbol: String,
    /// Format template(s) with `%s`/`%v` placeholders
    pub format: FormatSpec,
    /// Decimal-point separator
    pub decimal: String,
    /// Thousands-group separator
    pub thousand: String,
    /// Number of decimal places to render and round to
    pub precision: usize,
    /// Digit group width; output logic supports groups of three
    pub grouping: usize,
    /// Trim trailing zero decimals and a dangling separator
    pub strip_zeros: bool,
    /// Value returned when parsing fails
    pub fallback: f64,
    /// Rounding direction for fixed-precision reduction
    pub round: Rounding,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            symbol: "$".to_string(),
            format: FormatSpec::Pattern("%s%v".to_string()),
            decimal: ".".to_string(),
            thousand: ",".to_string(),
            precision: 2,
            grouping: 3,
            strip_zeros: false,
            fallback: 0.0,
            round: Rounding::Nearest,
        }
    }
}

impl FormatOptions {
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = format;
        self
    }

    /// Shorthand for `with_format(FormatSpec::Pattern(..))`
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.format = FormatSpec::Pattern(pattern.into());
        self
    }

    pub fn with_decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = decimal.into();
        self
    }

    pub fn with_thousand(mut self, thousand: impl Into<String>) -> Self {
        self.thousand = thousand.into();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_grouping(mut self, grouping: usize) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_strip_zeros(mut self, strip_zeros: bool) -> Self {
        self.strip_zeros = strip_zeros;
        self
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_round(mut self, round: Rounding) -> Self {
        self.round = round;
        self
    }
}

/// Input accepted by the formatting and parsing entry points
///
/// A tagged variant resolved once at the API boundary, so no operation has
/// to detect value kinds at runtime. Lists may nest arbitrarily; every
/// operation preserves their shape and order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An amount already in numeric form
    Number(f64),
    /// Formatted or free-form text to be parsed
    Text(String),
    /// A sequence of further inputs
    List(Vec<Value>),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

/// Formatting output mirroring the nesting shape of the input
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted {
    /// A single rendered string
    Str(String),
    /// Element-wise results of a list input
    List(Vec<Formatted>),
}

impl Formatted {
    /// The rendered string, if this is a scalar result
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Formatted::Str(text) => Some(text),
            Formatted::List(_) => None,
        }
    }
}

/// Parsing output mirroring the nesting shape of the input
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// A single parsed number
    Number(f64),
    /// Element-wise results of a list input
    List(Vec<Parsed>),
}

impl Parsed {
    /// The parsed number, if this is a scalar result
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Parsed::Number(value) => Some(*value),
            Parsed::List(_) => None,
        }
    }
}

//! Runtime value types for field matching, ordering and display.
//!
//! The [`Value`] enum represents the value of a field borrowed from a record.
//! Three semantic types exist: text, numbers and booleans.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use roster_seeker::{Number, Value};
///
/// struct Player {
///     name: String,
///     age: f64,
/// }
///
/// fn name_of(player: &Player) -> Value<'_> {
///     Value::String(&player.name)
/// }
///
/// let player = Player { name: "Ana".into(), age: 30.0 };
/// assert_eq!(name_of(&player).search_text(), "ana");
/// assert_eq!(Value::Number(Number::F64(player.age)).to_text(), "30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Bool(bool),
    /// The record has nothing in this column.
    None,
}

impl<'a> Value<'a> {
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// The borrowed text of a string value.
    pub fn as_str(&self) -> Option<&'a str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Plain text representation.
    ///
    /// Strings are borrowed, numbers print the way a script runtime prints them
    /// (`30`, `0.873`, `NaN`), booleans as `true` / `false`, and `None` as empty.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Lowercased text used by search and column filters.
    ///
    /// Booleans read as `yes` / `no` so a query for "yes" finds true cells.
    pub fn search_text(&self) -> String {
        match self {
            Value::Bool(true) => "yes".to_string(),
            Value::Bool(false) => "no".to_string(),
            other => other.to_text().to_lowercase(),
        }
    }
}

/// Numeric value.
///
/// Integers keep their exact representation; records coerced from loosely typed
/// input use `F64`, which can hold NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Widens to `f64`; very large integers may lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::F64(x) => x,
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
        }
    }

    /// Returns `true` for NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Returns `true` if the number has no fractional part.
    ///
    /// NaN and infinities are not integers.
    pub fn is_integer(self) -> bool {
        match self {
            Number::I64(_) | Number::U64(_) => true,
            Number::F64(n) => n.is_finite() && n.fract() == 0.0,
        }
    }

    /// Numeric comparison across representations; `None` if either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(x), Number::I64(y)) => Some(x.cmp(&y)),
            (Number::U64(x), Number::U64(y)) => Some(x.cmp(&y)),
            (x, y) => x.to_f64().partial_cmp(&y.to_f64()),
        }
    }

    /// Total ordering used for sorting.
    ///
    /// NaN ranks above every number and equal to another NaN.
    pub fn sort_cmp(self, other: Number) -> Ordering {
        match self.compare(other) {
            Some(ordering) => ordering,
            None => self.is_nan().cmp(&other.is_nan()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n == f64::INFINITY => f.write_str("Infinity"),
            Number::F64(n) if n == f64::NEG_INFINITY => f.write_str("-Infinity"),
            // -0 prints as 0
            Number::F64(n) if n == 0.0 => f.write_str("0"),
            Number::F64(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => write_exponent(f, n),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

/// Shortest exponent form with an explicit sign on positive exponents: `1e+21`, `1.5e-7`.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = format!("{x:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&text),
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::F64(x)
    }
}

/// Parses text the way loosely typed numeric coercion does.
///
/// Surrounding whitespace is ignored and blank text is zero. `Infinity` with an
/// optional sign is accepted; anything other than decimal float syntax is NaN.
///
/// ```
/// use roster_seeker::parse_number;
///
/// assert_eq!(parse_number(" 42 "), 42.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert!(parse_number("4x2").is_nan());
/// assert!(parse_number("inf").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

//! Cell text for display and the column widths derived from it.

use roster_seeker::{Number, Seekable, Value};
use unicode_width::UnicodeWidthStr;

use crate::athlete::{Athlete, Field};

/// Extra columns added to every measured width.
const COLUMN_PADDING: usize = 2;

/// Formats one cell for display.
///
/// - booleans: `Yes` / `No`
/// - non-integer numbers: read as a rate, `0.873` → `87.30%`
/// - integers above one million: grouped, `1234567` → `1,234,567`
/// - everything else: plain text
///
/// ```
/// use roster::format_cell;
/// use roster_seeker::{Number, Value};
///
/// assert_eq!(format_cell(&Value::Number(Number::F64(0.873))), "87.30%");
/// assert_eq!(format_cell(&Value::Number(Number::F64(1234567.0))), "1,234,567");
/// assert_eq!(format_cell(&Value::Bool(true)), "Yes");
/// ```
pub fn format_cell(value: &Value<'_>) -> String {
    match value {
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) if !n.is_integer() => format_rate(n.to_f64()),
        Value::Number(n) if n.to_f64() > 1_000_000.0 => group_thousands(&integer_digits(*n)),
        other => other.to_text().into_owned(),
    }
}

/// Formats an athlete's cell in `field`.
pub fn format_field(athlete: &Athlete, field: Field) -> String {
    format_cell(&athlete.field_value(field))
}

fn format_rate(rate: f64) -> String {
    let percent = rate * 100.0;
    if percent.is_finite() {
        format!("{}%", two_decimals(percent))
    } else {
        format!("{}%", Number::F64(percent))
    }
}

/// Two fractional digits, with exact half-cent ties rounded away from zero.
///
/// `{:.2}` rounds the exact binary value correctly but sends ties to even;
/// table cells round `50.125` up to `50.13`.
fn two_decimals(x: f64) -> String {
    // x is an exact half-cent tie iff 8x is an odd integer. Odd integers in
    // f64 are below 2^53, so the cast is exact.
    let eighths = x.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (eighths as u64 * 25 + 1) / 2;
        let sign = if x < 0.0 { "-" } else { "" };
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{x:.2}")
    }
}

/// Full decimal digits of an integral number, never exponent form.
fn integer_digits(n: Number) -> String {
    match n {
        Number::F64(x) => format!("{x:.0}"),
        other => other.to_string(),
    }
}

/// Inserts `,` between groups of three digits in an integer's text.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Minimum display width of every column for the given rows.
///
/// Each width is the wider of the label and the widest formatted cell, plus
/// padding, in terminal columns.
pub fn column_min_widths<'a, I>(rows: I) -> Vec<(Field, usize)>
where
    I: IntoIterator<Item = &'a Athlete>,
    I::IntoIter: Clone,
{
    let rows = rows.into_iter();
    Field::ALL
        .into_iter()
        .map(|field| {
            let widest = rows
                .clone()
                .map(|athlete| format_field(athlete, field).width())
                .fold(field.label().width(), usize::max);
            (field, widest + COLUMN_PADDING)
        })
        .collect()
}

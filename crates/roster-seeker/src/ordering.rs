//! Ordering types for result sorting.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for a field plus direction,
//! and [`compare_values`], the type-aware comparator behind every sort.

use std::cmp::Ordering;

use crate::natural::natural_cmp;
use crate::traits::Seekable;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    pub fn flipped(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }

    /// Header indicator for a sorted column.
    pub fn arrow(self) -> &'static str {
        match self {
            Dir::Asc => "↑",
            Dir::Desc => "↓",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field and the direction to sort it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub dir: Dir,
}

impl<F: Copy> OrderBy<F> {
    pub fn new(field: F, dir: Dir) -> Self {
        OrderBy { field, dir }
    }

    pub fn asc(field: F) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: F) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Compares two cell values in this ordering's direction.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.dir.apply(compare_values(a, b))
    }

    /// Compares two records on this ordering's field.
    pub fn compare_items<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: Seekable<Field = F>,
    {
        self.compare(&a.field_value(self.field), &b.field_value(self.field))
    }

    /// Sorts a sequence of record references in place.
    ///
    /// The sort is stable in both directions: records with equal keys keep
    /// their relative order, because descending reverses the comparator rather
    /// than the sequence.
    pub fn sort<T>(&self, items: &mut [&T])
    where
        T: Seekable<Field = F>,
    {
        items.sort_by(|a, b| self.compare_items(*a, *b));
    }
}

/// Compares two field values.
///
/// 1. number vs number: numeric, with NaN above every number
/// 2. bool vs bool: `false < true`
/// 3. anything else: both sides as text, in natural order
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.sort_cmp(*b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => natural_cmp(&a.to_text(), &b.to_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn descending_reverses_but_keeps_ties() {
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
    }

    #[test]
    fn dir_flip_and_display() {
        assert_eq!(Dir::Asc.flipped(), Dir::Desc);
        assert_eq!(Dir::Desc.flipped(), Dir::Asc);
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.arrow(), "↓");
    }

    #[test]
    fn compare_numbers() {
        let a = Value::Number(Number::F64(10.0));
        let b = Value::Number(Number::F64(20.0));
        assert_eq!(compare_values(&a, &b), Ordering::Less);
        assert_eq!(compare_values(&b, &a), Ordering::Greater);
    }

    #[test]
    fn compare_numbers_nan_last() {
        let nan = Value::Number(Number::F64(f64::NAN));
        let num = Value::Number(Number::F64(1e9));
        assert_eq!(compare_values(&nan, &num), Ordering::Greater);
        assert_eq!(compare_values(&num, &nan), Ordering::Less);
    }

    #[test]
    fn compare_bools() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert_eq!(compare_values(&f, &t), Ordering::Less);
        assert_eq!(compare_values(&t, &t), Ordering::Equal);
    }

    #[test]
    fn compare_strings_naturally() {
        let a = Value::String("ATH-9");
        let b = Value::String("ATH-10");
        assert_eq!(compare_values(&a, &b), Ordering::Less);
    }

    #[test]
    fn compare_mixed_falls_back_to_text() {
        let n = Value::Number(Number::I64(5));
        let s = Value::String("10 km");
        assert_eq!(compare_values(&n, &s), Ordering::Less);
        assert_eq!(compare_values(&Value::None, &s), Ordering::Less);
    }

    #[test]
    fn order_by_compare() {
        let lo = Value::String("Team 2");
        let hi = Value::String("Team 10");

        assert_eq!(OrderBy::asc(0u8).compare(&lo, &hi), Ordering::Less);
        assert_eq!(OrderBy::desc(0u8).compare(&lo, &hi), Ordering::Greater);
    }
}

//! Numeric-aware ("natural") string ordering.
//!
//! Runs of ASCII digits compare by numeric value, so `"item2"` sorts before
//! `"item10"`. Everything else compares one character at a time, ignoring case.

use std::cmp::Ordering;

/// Compares two strings in natural order.
///
/// Non-digit characters compare by their lowercased code point, and a digit
/// run ranks as the character `'0'` against any other character. So `!`, `-`
/// and `.` sort before digits, while `:`, `@`, `_` and `[` sort after them,
/// and letters outside ASCII (`é`, `ß`) sort after `z`. No locale collation
/// is applied.
///
/// Ties left after the case-insensitive pass are broken so that lowercase
/// precedes uppercase, then by code point. The result is a total order.
///
/// ```
/// use std::cmp::Ordering;
/// use roster_seeker::natural_cmp;
///
/// assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(natural_cmp("a", "A"), Ordering::Less);
/// assert_eq!(natural_cmp("-1", "1"), Ordering::Less);
/// assert_eq!(natural_cmp("_1", "1"), Ordering::Greater);
/// assert_eq!(natural_cmp("zed", "été"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    cmp_folded(a, b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    let mut left = Tokens { rest: a };
    let mut right = Tokens { rest: b };
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp_token(&y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A maximal run of ASCII digits.
    Digits(&'a str),
    /// A single non-digit character, lowercased.
    Char(char),
}

impl Token<'_> {
    fn cmp_token(&self, other: &Token<'_>) -> Ordering {
        match (self, other) {
            (Token::Digits(x), Token::Digits(y)) => cmp_digit_runs(x, y),
            // A lone char is never a digit, so any digit stands in for the run.
            (Token::Digits(_), Token::Char(c)) => '0'.cmp(c),
            (Token::Char(c), Token::Digits(_)) => c.cmp(&'0'),
            (Token::Char(x), Token::Char(y)) => x.cmp(y),
        }
    }
}

fn cmp_digit_runs(x: &str, y: &str) -> Ordering {
    let xs = x.trim_start_matches('0');
    let ys = y.trim_start_matches('0');
    xs.len()
        .cmp(&ys.len())
        .then_with(|| xs.cmp(ys))
        .then_with(|| x.len().cmp(&y.len()))
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (run, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Token::Digits(run))
        } else {
            self.rest = &self.rest[first.len_utf8()..];
            let folded = first.to_lowercase().next().unwrap_or(first);
            Some(Token::Char(folded))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("file9.txt", "file10.txt"), Ordering::Less);
        assert_eq!(natural_cmp("ATH-100", "ATH-20"), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_break_ties_only() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "8"), Ordering::Less);
    }

    #[test]
    fn case_is_secondary() {
        assert_eq!(natural_cmp("brazil", "Canada"), Ordering::Less);
        assert_eq!(natural_cmp("Brazil", "canada"), Ordering::Less);
        assert_eq!(natural_cmp("usa", "USA"), Ordering::Less);
        assert_eq!(natural_cmp("USA", "USA"), Ordering::Equal);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(natural_cmp("1a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("a10", "ab"), Ordering::Less);
    }

    #[test]
    fn symbols_split_around_digits_by_code_point() {
        assert_eq!(natural_cmp(".5", "5"), Ordering::Less);
        assert_eq!(natural_cmp("@home", "9"), Ordering::Greater);
        assert_eq!(natural_cmp(":", "0"), Ordering::Greater);
        assert_eq!(natural_cmp("Zürich", "Zurich"), Ordering::Greater);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("Ana", "Anabel"), Ordering::Less);
        assert_eq!(natural_cmp("x1", "x1y"), Ordering::Less);
    }

    #[test]
    fn iso_dates_order_chronologically() {
        assert_eq!(natural_cmp("1999-12-31", "2000-01-01"), Ordering::Less);
        assert_eq!(natural_cmp("2000-02-01", "2000-10-01"), Ordering::Less);
    }

    #[test]
    fn non_ascii_letters_fold() {
        assert_eq!(natural_cmp("Émile", "émile"), Ordering::Greater);
        assert_eq!(natural_cmp("éa", "Éb"), Ordering::Less);
    }
}

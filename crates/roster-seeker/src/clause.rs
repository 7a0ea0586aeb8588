//! Clause types for text predicates.
//!
//! A [`Clause`] is one query string against one field. A [`ClauseGroup`] is the
//! list of clauses a single column filter holds; the group passes when any of
//! its clauses does.

use crate::traits::SeekerField;
use crate::value::Value;

/// How a normalized query is compared against a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Field text contains the query.
    #[default]
    Contains,
    /// Field text equals the query.
    Exact,
}

impl MatchMode {
    /// Tests already-normalized field text against an already-normalized query.
    pub fn test(self, text: &str, query: &str) -> bool {
        match self {
            MatchMode::Contains => text.contains(query),
            MatchMode::Exact => text == query,
        }
    }
}

/// Normalizes raw query text: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A single text predicate.
///
/// The query is normalized once on construction. A blank query matches every
/// value.
///
/// # Example
///
/// ```
/// use roster_seeker::{Clause, MatchMode, Value};
///
/// let clause = Clause::new("firstName", MatchMode::Contains, "  AN ");
/// assert!(clause.matches(&Value::String("Ana")));
/// assert!(!clause.matches(&Value::String("Zoe")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<F> {
    /// The field to test.
    pub field: F,
    /// How the query is compared.
    pub mode: MatchMode,
    query: String,
}

impl<F> Clause<F> {
    /// Creates a new clause, normalizing `query`.
    pub fn new(field: F, mode: MatchMode, query: &str) -> Self {
        Clause {
            field,
            mode,
            query: normalize_query(query),
        }
    }

    /// The normalized query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if the query is blank and so matches everything.
    pub fn is_vacuous(&self) -> bool {
        self.query.is_empty()
    }

    /// Evaluates this clause against a field value.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        if self.is_vacuous() {
            return true;
        }
        self.mode.test(&value.search_text(), &self.query)
    }
}

impl<F: SeekerField> Clause<F> {
    /// Creates a clause using the field's own match mode.
    pub fn for_field(field: F, query: &str) -> Self {
        Clause::new(field, field.match_mode(), query)
    }
}

/// Clauses on one field, OR-combined.
///
/// An empty group imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseGroup<F> {
    /// The field every clause in the group tests.
    pub field: F,
    clauses: Vec<Clause<F>>,
}

impl<F: SeekerField> ClauseGroup<F> {
    /// Builds a group from raw query strings.
    pub fn any_of<I, S>(field: F, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clauses = queries
            .into_iter()
            .map(|q| Clause::for_field(field, q.as_ref()))
            .collect();
        ClauseGroup { field, clauses }
    }

    /// Returns the clauses in this group.
    pub fn clauses(&self) -> &[Clause<F>] {
        &self.clauses
    }

    /// Returns `true` if the group has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluates the group against a field value.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        if self.clauses.is_empty() {
            return true;
        }
        // One normalization of the cell serves every clause.
        let text = value.search_text();
        self.clauses
            .iter()
            .any(|clause| clause.is_vacuous() || clause.mode.test(&text, &clause.query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum F {
        Name,
        Gender,
    }

    impl SeekerField for F {
        fn match_mode(self) -> MatchMode {
            match self {
                F::Gender => MatchMode::Exact,
                F::Name => MatchMode::Contains,
            }
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let clause = Clause::for_field(F::Name, "an");
        assert!(clause.matches(&Value::String("Ana")));
        assert!(clause.matches(&Value::String("JOAN")));
        assert!(!clause.matches(&Value::String("Zoe")));
    }

    #[test]
    fn exact_is_case_insensitive_but_not_substring() {
        let clause = Clause::for_field(F::Gender, "f");
        assert!(clause.matches(&Value::String("F")));

        let clause = Clause::for_field(F::Gender, "fe");
        assert!(!clause.matches(&Value::String("F")));
        assert!(!clause.matches(&Value::String("Female Open")));
    }

    #[test]
    fn blank_query_is_vacuous() {
        let clause = Clause::for_field(F::Name, "   ");
        assert!(clause.is_vacuous());
        assert!(clause.matches(&Value::String("anything")));
        assert!(clause.matches(&Value::None));
    }

    #[test]
    fn query_is_trimmed() {
        let clause = Clause::for_field(F::Gender, " M ");
        assert_eq!(clause.query(), "m");
        assert!(clause.matches(&Value::String("M")));
    }

    #[test]
    fn numbers_and_bools_match_as_text() {
        let clause = Clause::new(F::Name, MatchMode::Contains, "12");
        assert!(clause.matches(&Value::Number(Number::F64(2012.0))));
        assert!(!clause.matches(&Value::Number(Number::F64(21.0))));

        let yes = Clause::new(F::Name, MatchMode::Exact, "Yes");
        assert!(yes.matches(&Value::Bool(true)));
        assert!(!yes.matches(&Value::Bool(false)));
    }

    #[test]
    fn group_is_or_within_field() {
        let group = ClauseGroup::any_of(F::Name, ["usa", "brazil"]);
        assert!(group.matches(&Value::String("Brazil")));
        assert!(group.matches(&Value::String("USA")));
        assert!(!group.matches(&Value::String("Chile")));
    }

    #[test]
    fn empty_group_and_blank_entry_pass() {
        let empty = ClauseGroup::any_of(F::Name, Vec::<String>::new());
        assert!(empty.is_empty());
        assert!(empty.matches(&Value::String("x")));

        let with_blank = ClauseGroup::any_of(F::Name, ["zz", ""]);
        assert!(with_blank.matches(&Value::String("x")));
    }

    #[test]
    fn group_uses_field_mode() {
        let group = ClauseGroup::any_of(F::Gender, ["f"]);
        assert!(group.matches(&Value::String("F")));
        assert!(!group.matches(&Value::String("Mf")));
    }
}

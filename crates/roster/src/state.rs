//! Query state held by the table: search, column filters and sort.

use std::collections::BTreeMap;

use roster_seeker::{Dir, OrderBy, Query};
use serde::{Deserialize, Serialize};

use crate::athlete::Field;

/// Per-column filter queries.
///
/// Each column's queries are OR-combined; columns are AND-combined. A column
/// with no entry, or with an empty list, is not filtered.
pub type ColumnFilters = BTreeMap<Field, Vec<String>>;

/// Which field to search and the raw query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    pub field: Field,
    pub query: String,
}

impl SearchState {
    pub fn new(field: Field, query: impl Into<String>) -> Self {
        SearchState {
            field,
            query: query.into(),
        }
    }

    /// An empty search on `field`.
    pub fn empty(field: Field) -> Self {
        SearchState::new(field, "")
    }

    /// Returns `true` if the query is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::empty(Field::FirstName)
    }
}

/// The sorted column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: Field,
    pub dir: Dir,
}

impl SortState {
    /// The next sort state after a click on `key`'s header.
    ///
    /// The same column flips direction; a new column starts ascending.
    pub fn toggle(current: Option<SortState>, key: Field) -> SortState {
        match current {
            Some(sort) if sort.key == key => SortState {
                key,
                dir: sort.dir.flipped(),
            },
            _ => SortState { key, dir: Dir::Asc },
        }
    }

    pub fn order_by(self) -> OrderBy<Field> {
        OrderBy::new(self.key, self.dir)
    }
}

/// Total number of query values across all columns.
pub fn applied_count(filters: &ColumnFilters) -> usize {
    filters.values().map(Vec::len).sum()
}

/// Returns `true` if any column has at least one query.
pub fn has_column_filters(filters: &ColumnFilters) -> bool {
    filters.values().any(|queries| !queries.is_empty())
}

/// Assembles the engine query for the current state.
pub fn build_query(
    search: &SearchState,
    filters: &ColumnFilters,
    sort: Option<SortState>,
) -> Query<Field> {
    filters
        .iter()
        .fold(
            Query::new().search(search.field, &search.query),
            |query, (field, queries)| query.any_of(*field, queries),
        )
        .ordering(sort.map(SortState::order_by))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_same_key() {
        let first = SortState::toggle(None, Field::Age);
        assert_eq!(first.dir, Dir::Asc);

        let second = SortState::toggle(Some(first), Field::Age);
        assert_eq!(second.dir, Dir::Desc);

        let third = SortState::toggle(Some(second), Field::Age);
        assert_eq!(third.dir, Dir::Asc);
    }

    #[test]
    fn toggle_new_key_resets_to_ascending() {
        let desc = SortState {
            key: Field::Age,
            dir: Dir::Desc,
        };
        let next = SortState::toggle(Some(desc), Field::Country);
        assert_eq!(
            next,
            SortState {
                key: Field::Country,
                dir: Dir::Asc
            }
        );
    }

    #[test]
    fn counts_and_activity() {
        let mut filters = ColumnFilters::new();
        assert!(!has_column_filters(&filters));

        filters.insert(Field::Sport, Vec::new());
        assert!(!has_column_filters(&filters));

        filters.insert(Field::Country, vec!["USA".into(), "Brazil".into()]);
        filters.insert(Field::Gender, vec!["F".into()]);
        assert!(has_column_filters(&filters));
        assert_eq!(applied_count(&filters), 3);
    }

    #[test]
    fn search_blankness() {
        assert!(SearchState::default().is_blank());
        assert!(SearchState::new(Field::Team, "  ").is_blank());
        assert!(!SearchState::new(Field::Team, " a ").is_blank());
        assert_eq!(SearchState::default().field, Field::FirstName);
    }

    #[test]
    fn build_query_skips_empty_lists() {
        let mut filters = ColumnFilters::new();
        filters.insert(Field::Sport, Vec::new());
        filters.insert(Field::Country, vec!["USA".into()]);

        let query = build_query(&SearchState::default(), &filters, None);
        assert_eq!(query.filter_groups().len(), 1);
        assert!(query.get_ordering().is_none());
    }
}

//! Query builder and executor.
//!
//! A [`Query`] composes the three stages of a derived view:
//!
//! ```text
//! search (one field) → column filters (AND of per-field OR groups) → sort
//! ```
//!
//! Search and filters never reorder; only the sort does.

use log::trace;

use crate::clause::{Clause, ClauseGroup};
use crate::ordering::{Dir, OrderBy};
use crate::traits::{Seekable, SeekerField};

/// A search, a set of column filters and an optional ordering.
///
/// # Example
///
/// ```
/// use roster_seeker::{Dir, Number, Query, Seekable, SeekerField, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Col {
///     Country,
///     Age,
/// }
///
/// impl SeekerField for Col {}
///
/// struct Row {
///     country: String,
///     age: f64,
/// }
///
/// impl Seekable for Row {
///     type Field = Col;
///
///     fn field_value(&self, field: Col) -> Value<'_> {
///         match field {
///             Col::Country => Value::String(&self.country),
///             Col::Age => Value::Number(Number::F64(self.age)),
///         }
///     }
/// }
///
/// let rows = vec![
///     Row { country: "Brazil".into(), age: 30.0 },
///     Row { country: "USA".into(), age: 25.0 },
///     Row { country: "Chile".into(), age: 22.0 },
/// ];
///
/// let query = Query::new()
///     .any_of(Col::Country, ["usa", "brazil"])
///     .order_by(Col::Age, Dir::Asc)
///     .build();
///
/// let results = query.filter(&rows);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].country, "USA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F> {
    search: Option<Clause<F>>,
    filters: Vec<ClauseGroup<F>>,
    ordering: Option<OrderBy<F>>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Query {
            search: None,
            filters: Vec::new(),
            ordering: None,
        }
    }
}

impl<F: SeekerField> Query<F> {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items in input order.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the single-field search.
    ///
    /// A blank query leaves every item in.
    pub fn search(mut self, field: F, query: &str) -> Self {
        self.search = Some(Clause::for_field(field, query));
        self
    }

    /// Adds a column filter: at least one of `queries` must match `field`.
    ///
    /// An empty list adds no constraint.
    pub fn any_of<I, S>(mut self, field: F, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group = ClauseGroup::any_of(field, queries);
        if !group.is_empty() {
            self.filters.push(group);
        }
        self
    }

    /// Sets the ordering.
    pub fn order_by(mut self, field: F, dir: Dir) -> Self {
        self.ordering = Some(OrderBy::new(field, dir));
        self
    }

    /// Sets or clears the ordering.
    pub fn ordering(mut self, ordering: Option<OrderBy<F>>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the search clause, if any.
    pub fn search_clause(&self) -> Option<&Clause<F>> {
        self.search.as_ref()
    }

    /// Returns the column filter groups.
    pub fn filter_groups(&self) -> &[ClauseGroup<F>] {
        &self.filters
    }

    /// Returns the ordering, if set.
    pub fn get_ordering(&self) -> Option<OrderBy<F>> {
        self.ordering
    }

    /// Returns `true` if no item can be excluded by this query.
    pub fn is_empty(&self) -> bool {
        self.search.as_ref().map_or(true, Clause::is_vacuous) && self.filters.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests an item against the search clause alone.
    pub fn matches_search<T>(&self, item: &T) -> bool
    where
        T: Seekable<Field = F>,
    {
        match &self.search {
            Some(clause) => clause.matches(&item.field_value(clause.field)),
            None => true,
        }
    }

    /// Tests an item against every column filter.
    pub fn matches_filters<T>(&self, item: &T) -> bool
    where
        T: Seekable<Field = F>,
    {
        self.filters
            .iter()
            .all(|group| group.matches(&item.field_value(group.field)))
    }

    /// Tests if a single item passes both search and column filters.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Seekable<Field = F>,
    {
        self.matches_search(item) && self.matches_filters(item)
    }

    /// Runs the query, returning references to matching items in result order.
    pub fn filter<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Seekable<Field = F>,
    {
        let searched: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches_search(*item))
            .collect();
        let mut results: Vec<&'a T> = searched
            .into_iter()
            .filter(|item| self.matches_filters(*item))
            .collect();

        if let Some(ordering) = &self.ordering {
            ordering.sort(&mut results);
        }
        trace!(
            "query kept {} of {} items (ordering: {:?})",
            results.len(),
            items.len(),
            self.ordering
        );
        results
    }

    /// Runs the query, returning indices into `items` in result order.
    ///
    /// Indices give the caller a stable handle on each record without
    /// borrowing the slice.
    pub fn filter_indices<T>(&self, items: &[T]) -> Vec<usize>
    where
        T: Seekable<Field = F>,
    {
        let mut indices: Vec<usize> = (0..items.len())
            .filter(|&i| self.matches(&items[i]))
            .collect();

        if let Some(ordering) = &self.ordering {
            indices.sort_by(|&a, &b| ordering.compare_items(&items[a], &items[b]));
        }
        indices
    }

    /// Counts the number of matching items.
    pub fn count<T>(&self, items: &[T]) -> usize
    where
        T: Seekable<Field = F>,
    {
        items.iter().filter(|item| self.matches(*item)).count()
    }
}

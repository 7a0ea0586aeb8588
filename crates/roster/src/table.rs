//! The table coordinator: owns query state and derives the visible page.
//!
//! [`AthleteTable`] holds an immutable record set plus the search, column
//! filter, sort and page state. Every state change marks the derived view
//! stale; [`AthleteTable::refresh`] reruns the pipeline
//!
//! ```text
//! records -> search -> column filters -> sort -> page
//! ```
//!
//! Search text is debounced: [`AthleteTable::set_search`] echoes the raw input
//! at once, and [`AthleteTable::tick`] applies the query after the configured
//! quiet period.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use roster::{AthleteTable, Field, SearchState, TableConfig};
//!
//! let mut table = AthleteTable::new(Vec::new(), TableConfig::default());
//! let t0 = Instant::now();
//!
//! table.set_search(SearchState::new(Field::Country, "bra"), t0);
//! assert_eq!(table.search_input().query, "bra");
//! assert_eq!(table.applied_search().query, "");
//!
//! assert!(table.tick(t0 + Duration::from_millis(300)));
//! assert_eq!(table.applied_search().query, "bra");
//! assert_eq!(table.current_view().total_count, 0);
//! ```

use std::ops::Range;
use std::time::Instant;

use log::debug;
use roster_seeker::{clamp_page, parse_page_input, Page};

use crate::athlete::{Athlete, Field};
use crate::config::TableConfig;
use crate::debounce::Debouncer;
use crate::state::{build_query, has_column_filters, ColumnFilters, SearchState, SortState};

/// Read-only snapshot of the derived view.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    /// Records on the current page, in display order.
    pub rows: Vec<&'a Athlete>,
    /// Records that passed search and filters.
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based.
    pub current_page: usize,
    /// Positions of `rows` within the filtered sequence.
    pub visible_range: Range<usize>,
    /// `true` if state changed since the view was computed.
    pub is_recomputing: bool,
}

impl TableView<'_> {
    /// Footer text such as `(101–200 of 250)`.
    pub fn status_line(&self) -> String {
        format!(
            "({}–{} of {})",
            self.visible_range.start + 1,
            self.visible_range.end,
            self.total_count
        )
    }

    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Coordinates search, column filters, sort and paging over a record set.
#[derive(Debug, Clone)]
pub struct AthleteTable {
    records: Vec<Athlete>,
    config: TableConfig,
    search_input: SearchState,
    applied_search: SearchState,
    debouncer: Debouncer<String>,
    column_filters: ColumnFilters,
    sort: Option<SortState>,
    /// Indices into `records` that survived the last pipeline run, in order.
    derived: Vec<usize>,
    page: usize,
    page_input: String,
    stale: bool,
}

impl AthleteTable {
    /// Builds a table over `records` and computes the initial view.
    pub fn new(records: Vec<Athlete>, config: TableConfig) -> Self {
        let search = SearchState::empty(config.default_search_field);
        let mut table = AthleteTable {
            debouncer: Debouncer::new(config.debounce()),
            derived: (0..records.len()).collect(),
            records,
            config,
            search_input: search.clone(),
            applied_search: search,
            column_filters: ColumnFilters::new(),
            sort: None,
            page: 1,
            page_input: "1".to_string(),
            stale: true,
        };
        table.refresh();
        table
    }

    pub fn records(&self) -> &[Athlete] {
        &self.records
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The search as typed.
    pub fn search_input(&self) -> &SearchState {
        &self.search_input
    }

    /// The search the derived view is filtered by.
    pub fn applied_search(&self) -> &SearchState {
        &self.applied_search
    }

    pub fn column_filters(&self) -> &ColumnFilters {
        &self.column_filters
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Text for the page number box.
    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    /// Returns `true` if the typed search or any column filter is active.
    pub fn has_active_filters(&self) -> bool {
        !self.search_input.is_blank() || has_column_filters(&self.column_filters)
    }

    /// Updates the search.
    ///
    /// The input is echoed immediately. A field change applies immediately;
    /// a query change is applied by [`tick`](Self::tick) once the debounce
    /// delay passes with no further calls.
    pub fn set_search(&mut self, search: SearchState, now: Instant) {
        if search.field != self.applied_search.field {
            debug!("search field -> {}", search.field);
            self.applied_search.field = search.field;
            self.stale = true;
        }
        if search.query == self.applied_search.query {
            self.debouncer.cancel();
        } else if search.query != self.search_input.query || !self.debouncer.is_pending() {
            // Only new text restarts the quiet period.
            self.debouncer.schedule(search.query.clone(), now);
        }
        self.search_input = search;
    }

    /// Applies a due debounced query. Returns `true` if the applied search changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) if query != self.applied_search.query => {
                debug!("applying search {:?} on {}", query, self.applied_search.field);
                self.applied_search.query = query;
                self.stale = true;
                true
            }
            _ => false,
        }
    }

    /// When the pending search query becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Replaces the column filters.
    pub fn apply_column_filters(&mut self, filters: ColumnFilters) {
        self.column_filters = filters;
        self.stale = true;
    }

    pub fn clear_column_filters(&mut self) {
        self.column_filters.clear();
        self.stale = true;
    }

    /// Sorts by `field`, or flips the direction if already sorted by it.
    pub fn toggle_sort(&mut self, field: Field) {
        self.sort = Some(SortState::toggle(self.sort, field));
        self.stale = true;
    }

    fn total_pages(&self) -> usize {
        roster_seeker::total_pages(self.derived.len(), self.config.page_size)
    }

    fn set_page(&mut self, page: usize) {
        self.page = page;
        self.page_input = page.to_string();
    }

    /// Moves to page `n`, clamped into the valid range.
    pub fn go_to_page(&mut self, n: i64) {
        let page = clamp_page(n, self.total_pages());
        self.set_page(page);
    }

    pub fn next_page(&mut self) {
        let page = (self.page + 1).min(self.total_pages());
        self.set_page(page);
    }

    pub fn prev_page(&mut self) {
        let page = self.page.saturating_sub(1).max(1);
        self.set_page(page);
    }

    /// Moves to a typed page number.
    ///
    /// Blank or non-numeric input leaves the page unchanged and returns
    /// `false`. Either way the page box is reset to the current page.
    pub fn submit_page_input(&mut self, input: &str) -> bool {
        match parse_page_input(input) {
            Ok(n) => {
                self.go_to_page(n);
                true
            }
            Err(err) => {
                debug!("{err}");
                self.page_input = self.page.to_string();
                false
            }
        }
    }

    /// Clears search, column filters and sort, cancels any pending search and
    /// returns to page 1.
    pub fn reset_all(&mut self) {
        let search = SearchState::empty(self.config.default_search_field);
        self.debouncer.cancel();
        self.search_input = search.clone();
        self.applied_search = search;
        self.column_filters.clear();
        self.sort = None;
        self.set_page(1);
        self.stale = true;
    }

    /// Returns `true` while state has changed but the view is not recomputed.
    pub fn is_recomputing(&self) -> bool {
        self.stale
    }

    /// Reruns the pipeline if state changed since the last run.
    ///
    /// The page returns to 1 whenever the number of filtered records changes.
    pub fn refresh(&mut self) {
        if !self.stale {
            return;
        }
        let query = build_query(&self.applied_search, &self.column_filters, self.sort);
        let derived = query.filter_indices(&self.records);
        if derived.len() != self.derived.len() {
            debug!(
                "filtered count {} -> {}; back to page 1",
                self.derived.len(),
                derived.len()
            );
            self.set_page(1);
        }
        debug!(
            "recomputed view: {} of {} records",
            derived.len(),
            self.records.len()
        );
        self.derived = derived;
        self.stale = false;
        let page = clamp_page(self.page as i64, self.total_pages());
        self.set_page(page);
    }

    /// The last computed view.
    pub fn view(&self) -> TableView<'_> {
        let page = Page::new(self.derived.len(), self.config.page_size, self.page);
        let rows = page
            .slice(&self.derived)
            .iter()
            .filter_map(|&i| self.records.get(i))
            .collect();
        TableView {
            rows,
            total_count: page.total,
            total_pages: page.total_pages,
            current_page: page.number,
            visible_range: page.range(),
            is_recomputing: self.stale,
        }
    }

    /// Refreshes, then returns the view.
    pub fn current_view(&mut self) -> TableView<'_> {
        self.refresh();
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn athlete(id: f64, first_name: &str) -> Athlete {
        crate::validate::parse_one(&serde_json::json!({
            "id": id, "athleteCode": format!("A{id}"), "firstName": first_name,
            "lastName": "Silva", "gender": "F", "age": 25, "dateOfBirth": "1999-01-01",
            "country": "Brazil", "sport": "Judo", "position": "Open", "team": "Club",
            "ranking": 1, "medals": 0, "matchesPlayed": 10, "wins": 5, "losses": 5,
            "winRate": 0.5, "heightCm": 170, "weightKg": 60, "yearsPro": 3,
            "salaryUsd": 50000, "isOlympian": false, "status": "Active",
            "lastUpdated": "2024-01-01"
        }))
        .unwrap()
    }

    fn table(n: usize, page_size: usize) -> AthleteTable {
        let records = (0..n).map(|i| athlete(i as f64, "Ana")).collect();
        let config = TableConfig {
            page_size,
            ..TableConfig::default()
        };
        AthleteTable::new(records, config)
    }

    #[test]
    fn new_table_is_fresh() {
        let table = table(3, 100);
        assert!(!table.is_recomputing());
        let view = table.view();
        assert_eq!(view.total_count, 3);
        assert_eq!(view.current_page, 1);
        assert!(!view.has_pagination());
        assert_eq!(view.status_line(), "(1–3 of 3)");
    }

    #[test]
    fn state_changes_mark_stale_until_refresh() {
        let mut table = table(3, 100);
        table.toggle_sort(Field::Id);
        assert!(table.is_recomputing());
        assert!(table.view().is_recomputing);
        table.refresh();
        assert!(!table.is_recomputing());
    }

    #[test]
    fn page_navigation_clamps() {
        let mut table = table(25, 10);
        table.prev_page();
        assert_eq!(table.current_page(), 1);
        table.next_page();
        table.next_page();
        table.next_page();
        assert_eq!(table.current_page(), 3);
        assert_eq!(table.page_input(), "3");
        assert_eq!(table.view().visible_range, 20..25);
    }

    #[test]
    fn rejected_page_input_restores_box() {
        let mut table = table(25, 10);
        table.go_to_page(2);
        assert!(!table.submit_page_input("two"));
        assert_eq!(table.current_page(), 2);
        assert_eq!(table.page_input(), "2");

        assert!(table.submit_page_input("3.9"));
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn typing_back_to_applied_query_cancels_timer() {
        let mut table = table(2, 100);
        let t0 = Instant::now();
        table.set_search(SearchState::new(Field::FirstName, "x"), t0);
        assert!(table.next_deadline().is_some());
        table.set_search(SearchState::new(Field::FirstName, ""), t0);
        assert!(table.next_deadline().is_none());
        assert!(!table.tick(t0 + Duration::from_secs(1)));
        assert!(!table.is_recomputing());
    }

    #[test]
    fn field_change_keeps_pending_deadline() {
        let mut table = table(2, 100);
        let t0 = Instant::now();
        table.set_search(SearchState::new(Field::FirstName, "ana"), t0);
        table.set_search(
            SearchState::new(Field::Country, "ana"),
            t0 + Duration::from_millis(200),
        );

        assert_eq!(table.applied_search().field, Field::Country);
        assert_eq!(table.next_deadline(), Some(t0 + Duration::from_millis(300)));
        assert!(table.tick(t0 + Duration::from_millis(300)));
        assert_eq!(table.applied_search(), &SearchState::new(Field::Country, "ana"));
    }

    #[test]
    fn field_change_applies_immediately() {
        let mut table = table(2, 100);
        table.set_search(SearchState::new(Field::Country, ""), Instant::now());
        assert_eq!(table.applied_search().field, Field::Country);
        assert!(table.is_recomputing());
    }
}

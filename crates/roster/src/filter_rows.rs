//! Editable rows behind the column-filter panel.
//!
//! Each row pairs a column with one query value. Rows are edited freely; they
//! only become [`ColumnFilters`] when the caller applies them, except that
//! removing a row applies the remaining rows at once.

use log::debug;

use crate::athlete::Field;
use crate::state::ColumnFilters;

/// Identifier of a filter row, unique within one [`FilterRows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

/// One editable filter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub id: RowId,
    pub field: Field,
    pub value: String,
}

/// The list of filter rows being edited.
///
/// Row ids come from a counter owned by this list, so two panels never share
/// id space and ids are never reused within one panel.
#[derive(Debug, Clone, Default)]
pub struct FilterRows {
    rows: Vec<FilterRow>,
    next_id: u64,
}

impl FilterRows {
    pub fn new() -> Self {
        FilterRows::default()
    }

    /// Seeds one row per applied query value.
    pub fn from_applied(filters: &ColumnFilters) -> Self {
        let mut rows = FilterRows::new();
        for (field, values) in filters {
            for value in values {
                rows.push(*field, value.clone());
            }
        }
        rows
    }

    fn push(&mut self, field: Field, value: String) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(FilterRow { id, field, value });
        id
    }

    /// Appends a row on the first column with an empty value.
    pub fn add_row(&mut self) -> RowId {
        self.push(Field::ALL[0], String::new())
    }

    pub fn rows(&self) -> &[FilterRow] {
        &self.rows
    }

    pub fn get(&self, id: RowId) -> Option<&FilterRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Changes a row's column. Unknown ids are ignored.
    pub fn update_field(&mut self, id: RowId, field: Field) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.field = field;
        }
    }

    /// Changes a row's value. Unknown ids are ignored.
    pub fn update_value(&mut self, id: RowId, value: impl Into<String>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.value = value.into();
        }
    }

    /// Removes a row and returns the filters the remaining rows describe.
    pub fn remove_row(&mut self, id: RowId) -> ColumnFilters {
        self.rows.retain(|row| row.id != id);
        self.to_filters()
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Builds filters from the rows.
    ///
    /// Values are trimmed; blank values are skipped. Values for the same
    /// column keep row order.
    pub fn to_filters(&self) -> ColumnFilters {
        let mut filters = ColumnFilters::new();
        for row in &self.rows {
            let value = row.value.trim();
            if !value.is_empty() {
                filters
                    .entry(row.field)
                    .or_default()
                    .push(value.to_string());
            }
        }
        debug!(
            "built filters for {} column(s) from {} row(s)",
            filters.len(),
            self.rows.len()
        );
        filters
    }
}

//! # Roster - searchable, filterable, sortable athlete tables
//!
//! `roster` turns loosely typed athlete JSON into validated records and keeps
//! the state of an interactive table over them: one debounced search box,
//! per-column filters, a sortable column and fixed-size pages.
//!
//! The query engine itself lives in [`roster_seeker`]; this crate supplies the
//! athlete schema, the coordinator that owns table state, and display helpers.
//!
//! ## Quick Start
//!
//! ```
//! use roster::{AthleteTable, ColumnFilters, Field, TableConfig};
//!
//! let json = r#"[{
//!     "id": 1, "athleteCode": "ATH-1", "firstName": "Ana", "lastName": "Lima",
//!     "gender": "F", "age": 24, "dateOfBirth": "2000-02-01", "country": "Brazil",
//!     "sport": "Judo", "position": "-63kg", "team": "Pinheiros", "ranking": 3,
//!     "medals": 2, "matchesPlayed": 40, "wins": 31, "losses": 9, "winRate": 0.775,
//!     "heightCm": 165, "weightKg": 62, "yearsPro": 6, "salaryUsd": 85000,
//!     "isOlympian": true, "status": "Active", "lastUpdated": "2024-06-01"
//! }, {"id": 2}]"#;
//!
//! let records = roster::from_json_str(json)?;
//! assert_eq!(records.len(), 1);
//!
//! let mut table = AthleteTable::new(records, TableConfig::default());
//! let mut filters = ColumnFilters::new();
//! filters.insert(Field::Sport, vec!["judo".into()]);
//! table.apply_column_filters(filters);
//!
//! let view = table.current_view();
//! assert_eq!(view.total_count, 1);
//! assert_eq!(roster::format_field(view.rows[0], Field::WinRate), "77.50%");
//! # Ok::<(), roster::RosterError>(())
//! ```
//!
//! ## Modules
//!
//! - [`athlete`]: the record type and the column table
//! - [`validate`]: JSON to records, dropping malformed items
//! - [`table`]: the coordinator and its derived view
//! - [`filter_rows`]: the editable rows behind the filter panel
//! - [`config`]: page size, debounce delay, default search column
//! - [`format`]: cell text and column widths

pub mod athlete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter_rows;
pub mod format;
pub mod state;
pub mod table;
pub mod validate;

// Re-export public API
pub use athlete::{Athlete, Field, FieldKind, FieldSpec};
pub use config::{EnvReader, MockEnv, RealEnv, TableConfig};
pub use debounce::{Debouncer, TimerHandle};
pub use error::{Result, RosterError};
pub use filter_rows::{FilterRow, FilterRows, RowId};
pub use format::{column_min_widths, format_cell, format_field};
pub use state::{applied_count, build_query, ColumnFilters, SearchState, SortState};
pub use table::{AthleteTable, TableView};
pub use validate::{from_json_str, parse_athletes, validate};

pub use roster_seeker::{Dir, MatchMode};

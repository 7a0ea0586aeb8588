//! Seeker - search, filter, sort and page in-memory record collections.
//!
//! A derived view of a record set is built in one direction:
//!
//! ```text
//! records → search → column filters → sort → page
//! ```
//!
//! - **Search**: one field, one query. Blank queries match everything.
//! - **Column filters**: per field, a list of queries. A record must satisfy
//!   every field, and within a field any one query.
//! - **Sort**: one field, ascending or descending, stable.
//! - **Page**: fixed-size slices with out-of-range page numbers clamped.
//!
//! # Matching
//!
//! Queries and cell text are trimmed and lowercased. Fields whose
//! [`SeekerField::match_mode`] is [`MatchMode::Exact`] compare by equality;
//! all others by substring containment. Booleans read as `yes` / `no`.
//!
//! # Ordering
//!
//! | Cells | Comparison |
//! |-------|------------|
//! | number, number | numeric; NaN after every number |
//! | bool, bool | `false < true` |
//! | anything else | text, in natural (numeric-aware) order |
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{paginate, Dir, Number, Query, Seekable, SeekerField, Value};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Col {
//!     Name,
//!     Priority,
//! }
//!
//! impl SeekerField for Col {}
//!
//! struct Task {
//!     name: String,
//!     priority: i64,
//! }
//!
//! impl Seekable for Task {
//!     type Field = Col;
//!
//!     fn field_value(&self, field: Col) -> Value<'_> {
//!         match field {
//!             Col::Name => Value::String(&self.name),
//!             Col::Priority => Value::Number(Number::I64(self.priority)),
//!         }
//!     }
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3 },
//!     Task { name: "Fix bug".into(), priority: 5 },
//!     Task { name: "Fix typo".into(), priority: 1 },
//! ];
//!
//! let query = Query::new()
//!     .search(Col::Name, "fix")
//!     .order_by(Col::Priority, Dir::Desc)
//!     .build();
//!
//! let results = query.filter(&tasks);
//! let page = paginate(&results, 100, 1);
//! assert_eq!(page.page.total_pages, 1);
//! assert_eq!(page.visible[0].name, "Fix bug");
//! ```

mod clause;
mod error;
mod natural;
mod ordering;
mod pagination;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::{normalize_query, Clause, ClauseGroup, MatchMode};
pub use error::{Result, SeekerError};
pub use natural::natural_cmp;
pub use ordering::{compare_values, Dir, OrderBy};
pub use pagination::{
    clamp_page, paginate, parse_page_input, total_pages, Page, Paged, DEFAULT_PAGE_SIZE,
};
pub use query::Query;
pub use traits::{Seekable, SeekerField};
pub use value::{parse_number, Number, Value};

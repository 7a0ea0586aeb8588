//! Traits that connect a record type to the query engine.
//!
//! A record exposes its fields through [`Seekable`], keyed by a small enum
//! implementing [`SeekerField`]. There is no lookup by field name at query time.

use std::fmt::Debug;

use crate::clause::MatchMode;
use crate::value::Value;

/// A field key of some record type.
///
/// Implemented by a fieldless enum naming every queryable column.
///
/// # Example
///
/// ```
/// use roster_seeker::{MatchMode, SeekerField};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum TaskField {
///     Name,
///     Status,
/// }
///
/// impl SeekerField for TaskField {
///     fn match_mode(self) -> MatchMode {
///         match self {
///             TaskField::Status => MatchMode::Exact,
///             TaskField::Name => MatchMode::Contains,
///         }
///     }
/// }
///
/// assert_eq!(TaskField::Status.match_mode(), MatchMode::Exact);
/// ```
pub trait SeekerField: Copy + Eq + Debug {
    /// How text queries against this field are matched.
    ///
    /// Categorical fields use [`MatchMode::Exact`]; the default is substring
    /// containment.
    fn match_mode(self) -> MatchMode {
        MatchMode::Contains
    }
}

/// Trait for records that can be searched, filtered and sorted.
///
/// # Example
///
/// ```
/// use roster_seeker::{Number, Seekable, SeekerField, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum TaskField {
///     Name,
///     Priority,
/// }
///
/// impl SeekerField for TaskField {}
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Seekable for Task {
///     type Field = TaskField;
///
///     fn field_value(&self, field: TaskField) -> Value<'_> {
///         match field {
///             TaskField::Name => Value::String(&self.name),
///             TaskField::Priority => Value::Number(Number::U64(self.priority as u64)),
///         }
///     }
/// }
///
/// let task = Task { name: "Write docs".into(), priority: 3 };
/// assert_eq!(task.field_value(TaskField::Name), Value::String("Write docs"));
/// ```
pub trait Seekable {
    /// The field key type.
    type Field: SeekerField;

    /// Returns the value of a field for matching and comparison.
    fn field_value(&self, field: Self::Field) -> Value<'_>;
}

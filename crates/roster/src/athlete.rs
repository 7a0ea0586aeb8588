//! The athlete record and its column table.
//!
//! Every column is a [`Field`] variant. [`Field::spec`] is the single lookup
//! table mapping a column to its wire key, label, semantic kind and match mode;
//! record access goes through [`Seekable::field_value`].

use std::fmt;
use std::str::FromStr;

use roster_seeker::{MatchMode, Number, Seekable, SeekerError, SeekerField, Value};
use serde::{Deserialize, Serialize};

/// One validated athlete entry.
///
/// Numeric columns are `f64` so values that failed numeric coercion can be
/// held as NaN. Records are never mutated after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: f64,
    pub athlete_code: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: f64,
    pub date_of_birth: String,
    pub country: String,
    pub sport: String,
    pub position: String,
    pub team: String,
    pub ranking: f64,
    pub medals: f64,
    pub matches_played: f64,
    pub wins: f64,
    pub losses: f64,
    pub win_rate: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub years_pro: f64,
    pub salary_usd: f64,
    pub is_olympian: bool,
    pub status: String,
    pub last_updated: String,
}

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Number,
    Text,
    Bool,
}

/// Static description of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in the input data.
    pub key: &'static str,
    /// Column header.
    pub label: &'static str,
    pub kind: FieldKind,
    pub match_mode: MatchMode,
}

const fn spec(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind,
        match_mode: MatchMode::Contains,
    }
}

/// A column of the athlete table.
///
/// Serializes as its wire key (`"firstName"`, `"salaryUsd"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    AthleteCode,
    FirstName,
    LastName,
    Gender,
    Age,
    DateOfBirth,
    Country,
    Sport,
    Position,
    Team,
    Ranking,
    Medals,
    MatchesPlayed,
    Wins,
    Losses,
    WinRate,
    HeightCm,
    WeightKg,
    YearsPro,
    SalaryUsd,
    IsOlympian,
    Status,
    LastUpdated,
}

/// Column table, indexed by `Field as usize`.
static SPECS: [FieldSpec; 24] = [
    spec("id", "ID", FieldKind::Number),
    spec("athleteCode", "Code", FieldKind::Text),
    spec("firstName", "First name", FieldKind::Text),
    spec("lastName", "Last name", FieldKind::Text),
    FieldSpec {
        key: "gender",
        label: "Gender",
        kind: FieldKind::Text,
        match_mode: MatchMode::Exact,
    },
    spec("age", "Age", FieldKind::Number),
    spec("dateOfBirth", "DOB", FieldKind::Text),
    spec("country", "Country", FieldKind::Text),
    spec("sport", "Sport", FieldKind::Text),
    spec("position", "Position", FieldKind::Text),
    spec("team", "Team", FieldKind::Text),
    spec("ranking", "Ranking", FieldKind::Number),
    spec("medals", "Medals", FieldKind::Number),
    spec("matchesPlayed", "Matches", FieldKind::Number),
    spec("wins", "Wins", FieldKind::Number),
    spec("losses", "Losses", FieldKind::Number),
    spec("winRate", "Win rate", FieldKind::Number),
    spec("heightCm", "Height (cm)", FieldKind::Number),
    spec("weightKg", "Weight (kg)", FieldKind::Number),
    spec("yearsPro", "Years pro", FieldKind::Number),
    spec("salaryUsd", "Salary (USD)", FieldKind::Number),
    spec("isOlympian", "Olympian", FieldKind::Bool),
    spec("status", "Status", FieldKind::Text),
    spec("lastUpdated", "Updated", FieldKind::Text),
];

impl Field {
    /// Every column, in display order.
    pub const ALL: [Field; 24] = [
        Field::Id,
        Field::AthleteCode,
        Field::FirstName,
        Field::LastName,
        Field::Gender,
        Field::Age,
        Field::DateOfBirth,
        Field::Country,
        Field::Sport,
        Field::Position,
        Field::Team,
        Field::Ranking,
        Field::Medals,
        Field::MatchesPlayed,
        Field::Wins,
        Field::Losses,
        Field::WinRate,
        Field::HeightCm,
        Field::WeightKg,
        Field::YearsPro,
        Field::SalaryUsd,
        Field::IsOlympian,
        Field::Status,
        Field::LastUpdated,
    ];

    /// Columns offered by the search field selector, in menu order.
    pub const SEARCHABLE: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::AthleteCode,
        Field::Country,
        Field::Sport,
        Field::Position,
        Field::Team,
        Field::Gender,
        Field::Status,
        Field::Id,
        Field::Ranking,
        Field::Age,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &SPECS[self as usize]
    }

    /// Key used in the input data.
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Column header.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    /// Returns `true` if the search selector offers this column.
    pub fn is_searchable(self) -> bool {
        Field::SEARCHABLE.contains(&self)
    }
}

impl SeekerField for Field {
    fn match_mode(self) -> MatchMode {
        self.spec().match_mode
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| SeekerError::UnknownField(s.to_string()))
    }
}

impl Seekable for Athlete {
    type Field = Field;

    fn field_value(&self, field: Field) -> Value<'_> {
        let num = |n: f64| Value::Number(Number::F64(n));
        match field {
            Field::Id => num(self.id),
            Field::AthleteCode => Value::String(&self.athlete_code),
            Field::FirstName => Value::String(&self.first_name),
            Field::LastName => Value::String(&self.last_name),
            Field::Gender => Value::String(&self.gender),
            Field::Age => num(self.age),
            Field::DateOfBirth => Value::String(&self.date_of_birth),
            Field::Country => Value::String(&self.country),
            Field::Sport => Value::String(&self.sport),
            Field::Position => Value::String(&self.position),
            Field::Team => Value::String(&self.team),
            Field::Ranking => num(self.ranking),
            Field::Medals => num(self.medals),
            Field::MatchesPlayed => num(self.matches_played),
            Field::Wins => num(self.wins),
            Field::Losses => num(self.losses),
            Field::WinRate => num(self.win_rate),
            Field::HeightCm => num(self.height_cm),
            Field::WeightKg => num(self.weight_kg),
            Field::YearsPro => num(self.years_pro),
            Field::SalaryUsd => num(self.salary_usd),
            Field::IsOlympian => Value::Bool(self.is_olympian),
            Field::Status => Value::String(&self.status),
            Field::LastUpdated => Value::String(&self.last_updated),
        }
    }
}

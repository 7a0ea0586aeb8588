//! Record validation: untyped JSON in, typed [`Athlete`] records out.
//!
//! Items that are not objects, or that lack any of the 24 column keys, are
//! dropped without error. Present values are coerced to the column's type the
//! way a loosely typed runtime would: numbers may end up NaN, booleans follow
//! truthiness, text is the value's string form.

use log::{debug, trace};
use roster_seeker::{parse_number, Number};
use serde_json::Value as JsonValue;

use crate::athlete::{Athlete, Field};
use crate::error::Result;

/// Parses JSON text and validates the top-level array.
pub fn from_json_str(text: &str) -> Result<Vec<Athlete>> {
    let raw: JsonValue = serde_json::from_str(text)?;
    Ok(parse_athletes(&raw))
}

/// Validates a whole input document.
///
/// Anything other than an array yields no records.
pub fn parse_athletes(raw: &JsonValue) -> Vec<Athlete> {
    match raw.as_array() {
        Some(items) => validate(items),
        None => {
            debug!("athlete input is not an array; no records loaded");
            Vec::new()
        }
    }
}

/// Validates each item, keeping input order and dropping malformed entries.
///
/// Duplicate ids are kept.
pub fn validate(items: &[JsonValue]) -> Vec<Athlete> {
    let records: Vec<Athlete> = items.iter().filter_map(parse_one).collect();
    let dropped = items.len() - records.len();
    if dropped > 0 {
        debug!("dropped {dropped} malformed athlete record(s) of {}", items.len());
    }
    records
}

/// Validates one item.
pub fn parse_one(raw: &JsonValue) -> Option<Athlete> {
    let Some(obj) = raw.as_object() else {
        trace!("skipping non-object item");
        return None;
    };
    if let Some(missing) = Field::ALL.iter().find(|f| !obj.contains_key(f.key())) {
        trace!("skipping item missing '{}'", missing.key());
        return None;
    }

    let get = |field: Field| obj.get(field.key());
    let num = |field: Field| get(field).map(coerce_number);
    let text = |field: Field| get(field).map(coerce_text);

    Some(Athlete {
        id: num(Field::Id)?,
        athlete_code: text(Field::AthleteCode)?,
        first_name: text(Field::FirstName)?,
        last_name: text(Field::LastName)?,
        gender: text(Field::Gender)?,
        age: num(Field::Age)?,
        date_of_birth: text(Field::DateOfBirth)?,
        country: text(Field::Country)?,
        sport: text(Field::Sport)?,
        position: text(Field::Position)?,
        team: text(Field::Team)?,
        ranking: num(Field::Ranking)?,
        medals: num(Field::Medals)?,
        matches_played: num(Field::MatchesPlayed)?,
        wins: num(Field::Wins)?,
        losses: num(Field::Losses)?,
        win_rate: num(Field::WinRate)?,
        height_cm: num(Field::HeightCm)?,
        weight_kg: num(Field::WeightKg)?,
        years_pro: num(Field::YearsPro)?,
        salary_usd: num(Field::SalaryUsd)?,
        is_olympian: get(Field::IsOlympian).map(coerce_bool)?,
        status: text(Field::Status)?,
        last_updated: text(Field::LastUpdated)?,
    })
}

/// Numeric coercion. Values with no numeric reading become NaN.
pub fn coerce_number(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Null => 0.0,
        JsonValue::Bool(b) => f64::from(u8::from(*b)),
        JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        JsonValue::String(s) => parse_number(s),
        JsonValue::Array(_) | JsonValue::Object(_) => f64::NAN,
    }
}

/// Truthiness coercion.
pub fn coerce_bool(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Text coercion.
pub fn coerce_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => match n.as_f64() {
            Some(x) => Number::F64(x).to_string(),
            None => n.to_string(),
        },
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Null => String::new(),
                other => coerce_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => "[object Object]".to_string(),
    }
}

//! Public API tests across the search, filter, sort and page stages.

use std::cmp::Ordering;

use roster_seeker::{
    compare_values, natural_cmp, normalize_query, paginate, Clause, ClauseGroup, Dir, MatchMode,
    Number, OrderBy, Page, Query, Seekable, SeekerError, SeekerField, Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Col {
    Code,
    Level,
    Rate,
    Active,
    Tier,
}

impl SeekerField for Col {
    fn match_mode(self) -> MatchMode {
        match self {
            Col::Tier => MatchMode::Exact,
            _ => MatchMode::Contains,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    code: String,
    level: f64,
    rate: f64,
    active: bool,
    tier: String,
}

impl Seekable for Entry {
    type Field = Col;

    fn field_value(&self, field: Col) -> Value<'_> {
        match field {
            Col::Code => Value::String(&self.code),
            Col::Level => Value::Number(Number::F64(self.level)),
            Col::Rate => Value::Number(Number::F64(self.rate)),
            Col::Active => Value::Bool(self.active),
            Col::Tier => Value::String(&self.tier),
        }
    }
}

fn entry(code: &str, level: f64, rate: f64, active: bool, tier: &str) -> Entry {
    Entry {
        code: code.to_string(),
        level,
        rate,
        active,
        tier: tier.to_string(),
    }
}

fn entries() -> Vec<Entry> {
    vec![
        entry("ATH-10", 3.0, 0.5, true, "Gold"),
        entry("ATH-2", f64::NAN, 0.25, false, "Silver"),
        entry("ATH-1", 1.0, 0.75, true, "Gold"),
        entry("ath-3", 2.0, 0.5, false, "gold"),
    ]
}

fn codes(results: &[&Entry]) -> Vec<String> {
    results.iter().map(|e| e.code.clone()).collect()
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn normalize_query_trims_and_lowercases() {
    assert_eq!(normalize_query("  MiXeD Case "), "mixed case");
    assert_eq!(normalize_query("\t\n"), "");
}

#[test]
fn clause_on_bool_uses_yes_no() {
    let items = entries();
    let query = Query::new().search(Col::Active, "YES").build();
    assert_eq!(codes(&query.filter(&items)), vec!["ATH-10", "ATH-1"]);

    let query = Query::new().search(Col::Active, "n").build();
    assert_eq!(codes(&query.filter(&items)), vec!["ATH-2", "ath-3"]);
}

#[test]
fn exact_field_ignores_case_only() {
    let items = entries();
    let query = Query::new().search(Col::Tier, "GOLD").build();
    assert_eq!(query.count(&items), 3);

    let query = Query::new().search(Col::Tier, "gol").build();
    assert_eq!(query.count(&items), 0);
}

#[test]
fn nan_cells_search_as_nan_text() {
    let items = entries();
    let query = Query::new().search(Col::Level, "nan").build();
    assert_eq!(codes(&query.filter(&items)), vec!["ATH-2"]);
}

#[test]
fn group_with_only_blank_queries_passes_everything() {
    let group = ClauseGroup::any_of(Col::Code, ["", "  "]);
    assert!(group.matches(&Value::String("anything")));

    let clause = Clause::new(Col::Code, MatchMode::Exact, "");
    assert!(clause.matches(&Value::Bool(false)));
}

#[test]
fn filters_compose_with_search() {
    let items = entries();
    let query = Query::new()
        .search(Col::Code, "ath-1")
        .any_of(Col::Tier, ["gold"])
        .any_of(Col::Active, ["yes"])
        .build();
    assert_eq!(codes(&query.filter(&items)), vec!["ATH-10", "ATH-1"]);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn natural_sort_of_codes() {
    let items = entries();
    let query = Query::new().order_by(Col::Code, Dir::Asc).build();
    assert_eq!(
        codes(&query.filter(&items)),
        vec!["ATH-1", "ATH-2", "ath-3", "ATH-10"]
    );
}

#[test]
fn nan_sorts_last_ascending_first_descending() {
    let items = entries();

    let asc = Query::new().order_by(Col::Level, Dir::Asc).build();
    assert_eq!(
        codes(&asc.filter(&items)),
        vec!["ATH-1", "ath-3", "ATH-10", "ATH-2"]
    );

    let desc = Query::new().order_by(Col::Level, Dir::Desc).build();
    assert_eq!(
        codes(&desc.filter(&items)),
        vec!["ATH-2", "ATH-10", "ath-3", "ATH-1"]
    );
}

#[test]
fn equal_keys_keep_input_order_both_directions() {
    let items = entries();

    let asc = Query::new().order_by(Col::Rate, Dir::Asc).build();
    assert_eq!(
        codes(&asc.filter(&items)),
        vec!["ATH-2", "ATH-10", "ath-3", "ATH-1"]
    );

    let desc = Query::new().order_by(Col::Rate, Dir::Desc).build();
    assert_eq!(
        codes(&desc.filter(&items)),
        vec!["ATH-1", "ATH-10", "ath-3", "ATH-2"]
    );
}

#[test]
fn bool_sort_false_first() {
    let items = entries();
    let query = Query::new().order_by(Col::Active, Dir::Asc).build();
    assert_eq!(
        codes(&query.filter(&items)),
        vec!["ATH-2", "ath-3", "ATH-10", "ATH-1"]
    );
}

#[test]
fn compare_values_mixed_types_use_text() {
    assert_eq!(
        compare_values(&Value::Bool(true), &Value::String("false")),
        Ordering::Greater
    );
    assert_eq!(
        compare_values(&Value::Number(Number::I64(9)), &Value::String("10")),
        Ordering::Less
    );
}

#[test]
fn order_by_sort_in_place() {
    let items = entries();
    let mut refs: Vec<&Entry> = items.iter().collect();
    OrderBy::desc(Col::Code).sort(&mut refs);
    assert_eq!(codes(&refs), vec!["ATH-10", "ath-3", "ATH-2", "ATH-1"]);
}

#[test]
fn natural_cmp_is_public() {
    assert_eq!(natural_cmp("2024-1-9", "2024-1-10"), Ordering::Less);
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn paging_after_query() {
    let items: Vec<Entry> = (0..250)
        .map(|i| entry(&format!("ATH-{i}"), i as f64, 0.5, i % 2 == 0, "Gold"))
        .collect();
    let results = Query::new().order_by(Col::Level, Dir::Desc).build().filter(&items);

    let paged = paginate(&results, 100, 3);
    assert_eq!(paged.page.total_pages, 3);
    assert_eq!(paged.visible.len(), 50);
    assert_eq!(paged.visible[0].code, "ATH-49");

    let clamped = Page::new(results.len(), 100, 99);
    assert_eq!(clamped.number, 3);
}

#[test]
fn seeker_error_messages() {
    assert_eq!(
        SeekerError::UnknownField("nope".into()).to_string(),
        "unknown field 'nope'"
    );
    assert_eq!(
        SeekerError::InvalidPageInput("x".into()).to_string(),
        "invalid page number: \"x\""
    );
}

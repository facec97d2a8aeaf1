//! Integration tests covering the public surface end to end.

use std::collections::HashMap;

use keysift::{
    compare_scalars, filter_data, matches, resolve, resolve_and_match, FieldPath, Filter,
    FilterConfig, MatchMode, Matcher, Number, QueryValue, Record, SiftError, Value,
};
use serde_json::{json, Value as Json};

fn sample() -> Vec<Json> {
    vec![
        json!({"id": 1, "name": "test1", "comments": {"text": "hello world"}}),
        json!({"id": 12, "name": "test2"}),
        json!({"id": 123, "name": "test3", "comments": {"text": "Goodbye"}}),
    ]
}

fn ids(records: &[&Json]) -> Vec<i64> {
    records.iter().filter_map(|r| r["id"].as_i64()).collect()
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn equal_keeps_exact_match_only() {
    let records = sample();
    let results = filter_data("1", &records, &["id"], MatchMode::Equal);
    assert_eq!(ids(&results), vec![1]);
}

#[test]
fn fuzzy_keeps_every_subsequence_match() {
    let records = sample();
    let results = filter_data("1", &records, &["id"], MatchMode::Fuzzy);
    assert_eq!(ids(&results), vec![1, 12, 123]);
}

#[test]
fn default_mode_is_fuzzy() {
    let records = sample();
    let results = filter_data("13", &records, &["id"], MatchMode::default());
    assert_eq!(ids(&results), vec![123]);
}

#[test]
fn missing_field_excludes_record() {
    let records = vec![json!({"id": 1, "name": "x"})];
    assert!(filter_data("x", &records, &["missing"], MatchMode::Fuzzy).is_empty());
}

#[test]
fn nested_path_includes_record() {
    let records = vec![json!({"id": 1, "comments": {"text": "hello world"}})];
    let results = filter_data("hello", &records, &["comments.text"], MatchMode::Contains);
    assert_eq!(results.len(), 1);
}

#[test]
fn nested_path_skips_records_without_parent() {
    let records = sample();
    let results = filter_data("o", &records, &["comments.text"], MatchMode::Contains);
    assert_eq!(ids(&results), vec![1, 123]);
}

#[test]
fn any_specifier_is_enough() {
    let records = sample();
    let results = filter_data(
        "good",
        &records,
        &["name", "comments.text"],
        MatchMode::StartsWith,
    );
    assert_eq!(ids(&results), vec![123]);
}

#[test]
fn greater_keeps_larger_ids() {
    let records: Vec<Json> = [3, 10, 11, 42, -5].iter().map(|id| json!({"id": id})).collect();
    let results = filter_data(10, &records, &["id"], MatchMode::Greater);
    assert_eq!(ids(&results), vec![11, 42]);
}

#[test]
fn ordering_with_text_query_parses_number() {
    let records: Vec<Json> = [3, 10, 11].iter().map(|id| json!({"id": id})).collect();
    let results = filter_data("10", &records, &["id"], MatchMode::GreaterEqual);
    assert_eq!(ids(&results), vec![10, 11]);
}

#[test]
fn empty_specifier_list_matches_nothing() {
    let records = sample();
    let none: [&str; 0] = [];
    assert!(filter_data("1", &records, &none, MatchMode::Fuzzy).is_empty());
}

#[test]
fn path_through_scalar_is_no_match() {
    let records = sample();
    assert!(filter_data("t", &records, &["name.first"], MatchMode::Fuzzy).is_empty());
}

#[test]
fn null_leaf_is_no_match() {
    let records = vec![json!({"id": 1, "owner": null})];
    assert!(filter_data("", &records, &["owner"], MatchMode::Fuzzy).is_empty());
    assert!(filter_data("null", &records, &["owner"], MatchMode::Equal).is_empty());
}

#[test]
fn nested_record_leaf_is_no_match() {
    let records = sample();
    assert!(filter_data("", &records, &["comments"], MatchMode::Fuzzy).is_empty());
}

#[test]
fn array_elements_by_index() {
    let records = vec![
        json!({"tags": ["red", "blue"]}),
        json!({"tags": ["green"]}),
    ];
    let results = filter_data("blue", &records, &["tags.1"], MatchMode::Equal);
    assert_eq!(results.len(), 1);
    assert!(filter_data("red", &records, &["tags.9"], MatchMode::Equal).is_empty());
}

// ============================================================================
// Modes
// ============================================================================

#[test]
fn contains_strips_whitespace_from_both_sides() {
    assert!(matches(&Value::Text("a b c"), "abc", MatchMode::Contains));
    assert!(matches(&Value::Text("abc"), "a b c", MatchMode::Contains));
    assert!(matches(&Value::Text("Hello World"), "oworl", MatchMode::Contains));
}

#[test]
fn anchored_modes() {
    let value = Value::Text("  Hello World ");
    assert!(matches(&value, "hello", MatchMode::StartsWith));
    assert!(matches(&value, "hello", MatchMode::StartsWithNoSpace));
    assert!(matches(&value, "d", MatchMode::EndsWith));
    assert!(!matches(&value, "world", MatchMode::StartsWith));
    assert!(!matches(&value, "hello", MatchMode::EndsWith));
}

#[test]
fn query_metacharacters_are_literal() {
    assert!(matches(&Value::Text("a.b"), ".", MatchMode::Contains));
    assert!(!matches(&Value::Text("ab"), ".", MatchMode::Contains));
    assert!(matches(&Value::Text("f(x)"), "(x)", MatchMode::EndsWith));
    assert!(!matches(&Value::Text("abc"), "a*", MatchMode::Fuzzy));
}

#[test]
fn fuzzy_is_case_insensitive() {
    assert!(matches(&Value::Text("Keysift Filter"), "KSF", MatchMode::Fuzzy));
    assert!(!matches(&Value::Text("Keysift"), "fk", MatchMode::Fuzzy));
}

#[test]
fn equal_uses_text_forms() {
    assert!(matches(&Value::Bool(true), "TRUE", MatchMode::Equal));
    assert!(matches(&Value::Number(Number::F64(1.0)), "1", MatchMode::Equal));
    assert!(matches(&Value::Number(Number::F64(1.5)), 1.5, MatchMode::Equal));
    assert!(!matches(&Value::Text("abc"), "ab", MatchMode::Equal));
}

#[test]
fn null_and_records_never_match() {
    let nested = json!({"a": 1});
    for mode in MatchMode::ALL {
        assert!(!matches(&Value::Null, "", mode), "{} matched null", mode);
        assert!(
            !matches(&Value::Record(&nested), "", mode),
            "{} matched a record",
            mode
        );
    }
}

#[test]
fn ordering_mixed_kinds() {
    let ten = Value::Number(Number::I64(10));
    assert!(matches(&ten, "9.5", MatchMode::Greater));
    assert!(!matches(&ten, "ten", MatchMode::Greater));
    assert!(!matches(&ten, "ten", MatchMode::Less));
    assert!(matches(&Value::Number(Number::I64(1)), true, MatchMode::GreaterEqual));
    assert!(matches(&Value::Bool(false), true, MatchMode::Less));
    assert!(!matches(&Value::Text("b"), false, MatchMode::Greater));
}

#[test]
fn ordering_text_is_lexicographic() {
    assert!(matches(&Value::Text("b"), "a", MatchMode::Greater));
    assert!(matches(&Value::Text("9"), "10", MatchMode::Greater));
}

#[test]
fn compare_scalars_nan_is_incomparable() {
    let nan = Value::Number(Number::F64(f64::NAN));
    assert_eq!(compare_scalars(&nan, &Value::Number(Number::I64(1))), None);
    assert!(!matches(&nan, 1, MatchMode::LessEqual));
}

#[test]
fn mode_tags() {
    for mode in MatchMode::ALL {
        assert_eq!(mode.as_str().parse::<MatchMode>().unwrap(), mode);
        assert_eq!(MatchMode::from_tag(&mode.to_string()), mode);
    }
    assert_eq!(MatchMode::from_tag("nonsense"), MatchMode::Equal);
    assert!(matches!(
        "nonsense".parse::<MatchMode>(),
        Err(SiftError::UnknownMode(tag)) if tag == "nonsense"
    ));
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn field_path_parsing() {
    let path = FieldPath::parse("comments.text");
    assert!(path.is_nested());
    assert_eq!(path.segments(), &["comments".to_string(), "text".to_string()]);
    assert_eq!(path.to_string(), "comments.text");

    let empty = FieldPath::parse("a..b");
    assert_eq!(empty.segments().len(), 3);
}

#[test]
fn resolve_walks_nested_records() {
    let record = json!({"a": {"b": {"c": "deep"}}});
    assert_eq!(resolve(&record, &["a", "b", "c"]), Some(Value::Text("deep")));
    assert_eq!(resolve(&record, &["a", "x", "c"]), None);
    assert_eq!(resolve(&record, &["a", "b", "c", "d"]), None);
    let none: [&str; 0] = [];
    assert_eq!(resolve(&record, &none), None);
}

#[test]
fn resolve_and_match_uses_matcher() {
    let record = json!({"a": {"b": "Deep"}});
    let matcher = Matcher::new("deep", MatchMode::Equal).unwrap();
    assert!(resolve_and_match(&record, &["a", "b"], &matcher));
    assert!(!resolve_and_match(&record, &["a"], &matcher));
}

// ============================================================================
// Compiled filters
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: String,
    done: bool,
    priority: u8,
}

impl Record for Task {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "name" => Some(Value::Text(&self.name)),
            "done" => Some(Value::Bool(self.done)),
            "priority" => Some(Value::Number(Number::from(self.priority))),
            _ => None,
        }
    }
}

fn tasks() -> Vec<Task> {
    vec![
        Task { name: "Write docs".into(), done: false, priority: 2 },
        Task { name: "Fix bug".into(), done: true, priority: 5 },
        Task { name: "Review".into(), done: false, priority: 1 },
    ]
}

#[test]
fn filter_struct_records() {
    let tasks = tasks();
    let filter = Filter::builder(true).field("done").mode(MatchMode::Equal).build().unwrap();

    let done = filter.filter(&tasks);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].name, "Fix bug");
    assert_eq!(filter.position(&tasks), Some(1));
}

#[test]
fn filter_helpers() {
    let mut tasks = tasks();
    let filter = Filter::builder(2)
        .field("priority")
        .mode(MatchMode::GreaterEqual)
        .build()
        .unwrap();

    assert_eq!(filter.count(&tasks), 2);
    assert!(filter.any(&tasks));
    assert!(!filter.all(&tasks));
    assert_eq!(filter.find(&tasks).map(|t| t.priority), Some(2));
    assert_eq!(filter.filter_cloned(&tasks).len(), 2);

    filter.filter_mut(&mut tasks);
    let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Write docs", "Fix bug"]);
}

#[test]
fn filter_by_accessor() {
    let tasks = tasks();
    let filter = Filter::builder("rv").field("name").build().unwrap();

    let results = filter.filter_by(&tasks, |task, field| match field {
        "name" => Some(Value::Text(&task.name)),
        _ => None,
    });
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Review");

    assert!(filter.matches_by(&tasks[2], Task::accessor));
}

#[test]
fn filter_over_maps() {
    let mut first = HashMap::new();
    first.insert("city".to_string(), "Lisbon".to_string());
    let mut second = HashMap::new();
    second.insert("city".to_string(), "Oslo".to_string());
    let records = vec![first, second];

    let results = filter_data("lis", &records, &["city"], MatchMode::StartsWith);
    assert_eq!(results.len(), 1);
}

#[test]
fn filter_introspection() {
    let filter = Filter::builder("x")
        .fields(["a", "b.c"])
        .mode(MatchMode::EndsWith)
        .build()
        .unwrap();

    assert_eq!(filter.mode(), MatchMode::EndsWith);
    assert_eq!(filter.query(), &QueryValue::from("x"));
    assert_eq!(filter.fields().len(), 2);
    assert!(filter.matcher().pattern().is_some());
}

#[test]
fn filter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Filter>();
    assert_send_sync::<Matcher>();
    assert_send_sync::<FieldPath>();
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_from_yaml() {
    let config = FilterConfig::from_yaml_str(
        "query: hello\nfields: [name, comments.text]\nmode: contains\n",
    )
    .unwrap();

    assert_eq!(config.mode, MatchMode::Contains);
    let filter = config.build().unwrap();
    assert_eq!(filter.filter(&sample()).len(), 1);
}

#[test]
fn config_from_json_with_number_query() {
    let config =
        FilterConfig::from_json_str(r#"{"query": 10, "fields": ["id"], "mode": "greater"}"#)
            .unwrap();
    let records = sample();
    let filter = config.build().unwrap();
    assert_eq!(ids(&filter.filter(&records)), vec![12, 123]);
}

#[test]
fn config_defaults_and_fallbacks() {
    let config = FilterConfig::from_json_str(r#"{"query": "1", "fields": ["id"]}"#).unwrap();
    assert_eq!(config.mode, MatchMode::Fuzzy);

    let config =
        FilterConfig::from_json_str(r#"{"query": "1", "fields": ["id"], "mode": "regex"}"#)
            .unwrap();
    assert_eq!(config.mode, MatchMode::Equal);
}

#[test]
fn config_errors() {
    let err = FilterConfig::from_json_str(r#"{"query": "1", "extra": true}"#).unwrap_err();
    assert!(matches!(err, SiftError::Json(_)));

    let err = FilterConfig::from_yaml_str("query: [a, b]").unwrap_err();
    assert!(matches!(err, SiftError::Yaml(_)));
}

#[test]
fn config_round_trip_through_json() {
    let config = FilterConfig::new("abc", ["name", "comments.text"])
        .with_mode(MatchMode::StartsWithNoSpace);
    let json = config.to_json_string().unwrap();
    assert!(json.contains("starts-with-no-space"));
    assert_eq!(FilterConfig::from_json_str(&json).unwrap(), config);
}

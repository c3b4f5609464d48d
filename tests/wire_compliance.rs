// Wire Compliance Tests
//
// Payload shapes checked against the engine's documented query and
// aggregation DSL. Each section covers one behavior every builder shares.

use esdsl::{
    AvgAggregation, Clause, FuzzyQuery, HasChildQuery, Meta, TermsAggregation,
    ValueCountAggregation,
};
use serde_json::json;

fn keys(value: &serde_json::Value, path: &[&str]) -> Vec<String> {
    let mut node = value;
    for segment in path {
        node = &node[*segment];
    }
    node.as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

// ============================================================================
// Section: Reference Payloads
// ============================================================================

#[test]
fn value_count_with_field_only() {
    let agg = ValueCountAggregation::new().field("age");
    assert_eq!(agg.to_value(), json!({"value_count": {"field": "age"}}));
}

#[test]
fn value_count_with_format() {
    let agg = ValueCountAggregation::new().field("age").format("0.00");
    assert_eq!(
        agg.to_value(),
        json!({"value_count": {"field": "age", "format": "0.00"}})
    );
}

#[test]
fn fuzzy_with_fuzziness_and_boost() {
    let query = FuzzyQuery::new("name", "jon").fuzziness("AUTO").boost(2.0);
    assert_eq!(
        query.to_value(),
        json!({"fuzzy": {"name": {"value": "jon", "boost": 2.0, "fuzziness": "AUTO"}}})
    );
}

#[test]
fn has_child_with_min_children() {
    let query = HasChildQuery::new("comment", FuzzyQuery::new("name", "jon")).min_children(1);
    let value = query.to_value();

    assert_eq!(keys(&value, &["has_child"]), vec!["query", "type", "min_children"]);
    assert_eq!(value["has_child"]["type"], json!("comment"));
    assert_eq!(value["has_child"]["min_children"], json!(1));
    assert_eq!(
        value["has_child"]["query"],
        json!({"fuzzy": {"name": {"value": "jon"}}})
    );
    assert!(value["has_child"].get("max_children").is_none());
    assert!(value["has_child"].get("score_type").is_none());
}

// ============================================================================
// Section: Unset Fields Stay Absent
// ============================================================================

#[test]
fn fresh_fuzzy_has_only_mandatory_fields() {
    let query = FuzzyQuery::new("name", "jon");
    assert_eq!(query.to_value(), json!({"fuzzy": {"name": {"value": "jon"}}}));
}

#[test]
fn fresh_has_child_has_only_mandatory_fields() {
    let query = HasChildQuery::new("comment", FuzzyQuery::new("name", "jon"));
    assert_eq!(keys(&query.to_value(), &["has_child"]), vec!["query", "type"]);
}

#[test]
fn fresh_value_count_has_empty_body() {
    assert_eq!(ValueCountAggregation::new().to_value(), json!({"value_count": {}}));
}

#[test]
fn explicit_falsy_values_are_emitted() {
    let query = FuzzyQuery::new("name", "")
        .transpositions(false)
        .prefix_length(0)
        .rewrite("")
        .query_name("");
    assert_eq!(
        query.to_value(),
        json!({"fuzzy": {"name": {
            "value": "",
            "transpositions": false,
            "prefix_length": 0,
            "rewrite": "",
            "_name": ""
        }}})
    );
}

// ============================================================================
// Section: Every Setter Reaches The Wire
// ============================================================================

#[test]
fn fuzzy_all_setters_in_wire_order() {
    let query = FuzzyQuery::new("user.id", "ki")
        .query_name("fz")
        .rewrite("constant_score")
        .max_expansions(50)
        .prefix_length(1)
        .fuzziness(2)
        .transpositions(true)
        .boost(1.5);

    let value = query.to_value();
    assert_eq!(
        keys(&value, &["fuzzy", "user.id"]),
        vec![
            "value",
            "boost",
            "transpositions",
            "fuzziness",
            "prefix_length",
            "max_expansions",
            "rewrite",
            "_name"
        ]
    );
    assert_eq!(
        value,
        json!({"fuzzy": {"user.id": {
            "value": "ki",
            "boost": 1.5,
            "transpositions": true,
            "fuzziness": 2,
            "prefix_length": 1,
            "max_expansions": 50,
            "rewrite": "constant_score",
            "_name": "fz"
        }}})
    );
}

#[test]
fn has_child_all_setters_in_wire_order() {
    let query = HasChildQuery::new("answer", FuzzyQuery::new("body", "rust"))
        .query_name("hc")
        .short_circuit_cutoff(100)
        .max_children(10)
        .min_children(2)
        .score_type("max")
        .boost(3.0);

    let value = query.to_value();
    assert_eq!(
        keys(&value, &["has_child"]),
        vec![
            "query",
            "type",
            "boost",
            "score_type",
            "min_children",
            "max_children",
            "short_circuit_cutoff",
            "_name"
        ]
    );
    assert_eq!(value["has_child"]["short_circuit_cutoff"], json!(100));
    assert_eq!(value["has_child"]["_name"], json!("hc"));
}

#[test]
fn value_count_field_and_script_both_pass_through() {
    let agg = ValueCountAggregation::new()
        .field("age")
        .script("doc['age'].value");
    assert_eq!(
        agg.to_value(),
        json!({"value_count": {"field": "age", "script": {"source": "doc['age'].value"}}})
    );
}

// ============================================================================
// Section: Mixed-Type Parameters
// ============================================================================

#[test]
fn fuzziness_number_stays_number() {
    let value = FuzzyQuery::new("f", "v").fuzziness(1).to_value();
    assert_eq!(value["fuzzy"]["f"]["fuzziness"], json!(1));
}

#[test]
fn fuzziness_string_stays_string() {
    let value = FuzzyQuery::new("f", "v").fuzziness("1").to_value();
    assert_eq!(value["fuzzy"]["f"]["fuzziness"], json!("1"));
}

#[test]
fn fuzzy_value_keeps_numeric_type() {
    assert_eq!(
        FuzzyQuery::new("price", 12).to_value().to_string(),
        r#"{"fuzzy":{"price":{"value":12}}}"#
    );
    assert_eq!(
        FuzzyQuery::new("price", 12.0).to_value().to_string(),
        r#"{"fuzzy":{"price":{"value":12.0}}}"#
    );
}

// ============================================================================
// Section: Idempotence
// ============================================================================

#[test]
fn serializing_twice_is_identical() {
    let query = HasChildQuery::new("comment", FuzzyQuery::new("name", "jon").boost(2.0))
        .min_children(1);
    let first = query.to_value();
    let second = query.to_value();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn setters_after_serialization_change_later_output() {
    let agg = ValueCountAggregation::new().field("age");
    let before = agg.to_value();
    let agg = agg.format("0");
    assert_eq!(before, json!({"value_count": {"field": "age"}}));
    assert_eq!(agg.to_value(), json!({"value_count": {"field": "age", "format": "0"}}));
}

// ============================================================================
// Section: Sub-Aggregations and Meta
// ============================================================================

#[test]
fn same_name_sub_aggregation_overwrites() {
    let agg = ValueCountAggregation::new()
        .field("age")
        .sub_aggregation("inner", AvgAggregation::new().field("first"))
        .sub_aggregation("inner", AvgAggregation::new().field("second"));
    assert_eq!(
        agg.to_value(),
        json!({
            "value_count": {"field": "age"},
            "aggregations": {"inner": {"avg": {"field": "second"}}}
        })
    );
}

#[test]
fn distinct_sub_aggregations_are_all_kept() {
    let agg = TermsAggregation::new()
        .field("city")
        .sub_aggregation("count", ValueCountAggregation::new().field("age"))
        .sub_aggregation("avg", AvgAggregation::new().field("age"));
    let value = agg.to_value();
    assert_eq!(keys(&value, &["aggregations"]), vec!["count", "avg"]);
    assert_eq!(
        value["aggregations"]["count"],
        json!({"value_count": {"field": "age"}})
    );
    assert_eq!(value["aggregations"]["avg"], json!({"avg": {"field": "age"}}));
}

#[test]
fn sub_aggregations_nest_recursively() {
    let agg = TermsAggregation::new().field("country").sub_aggregation(
        "cities",
        TermsAggregation::new()
            .field("city")
            .sub_aggregation("ages", ValueCountAggregation::new().field("age")),
    );
    assert_eq!(
        agg.to_value(),
        json!({
            "terms": {"field": "country"},
            "aggregations": {
                "cities": {
                    "terms": {"field": "city"},
                    "aggregations": {"ages": {"value_count": {"field": "age"}}}
                }
            }
        })
    );
}

#[test]
fn meta_passes_through_after_children() {
    let mut meta = Meta::new();
    meta.insert("owner".to_string(), json!("reports"));
    meta.insert("weights".to_string(), json!([1, 2, 3]));

    let agg = ValueCountAggregation::new()
        .field("age")
        .sub_aggregation("avg", AvgAggregation::new().field("age"))
        .meta(meta);
    let value = agg.to_value();

    assert_eq!(keys(&value, &[]), vec!["value_count", "aggregations", "meta"]);
    assert_eq!(value["meta"], json!({"owner": "reports", "weights": [1, 2, 3]}));
}

#[test]
fn empty_meta_is_omitted() {
    let agg = ValueCountAggregation::new().field("age").meta(Meta::new());
    assert_eq!(agg.to_value(), json!({"value_count": {"field": "age"}}));
}

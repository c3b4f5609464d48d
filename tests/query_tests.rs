use esdsl::{
    BoolQuery, Clause, ConstantScoreQuery, ExistsQuery, FuzzyQuery, HasChildQuery,
    HasParentQuery, IdsQuery, InnerHits, MatchAllQuery, MatchQuery, NestedQuery, PrefixQuery,
    Query, RangeQuery, Sort, TermQuery, TermsQuery, WildcardQuery,
};
use serde_json::json;

#[test]
fn test_match_all_empty() {
    assert_eq!(MatchAllQuery::new().to_value(), json!({"match_all": {}}));
}

#[test]
fn test_match_all_boost_and_name() {
    let query = MatchAllQuery::new().boost(1.2).query_name("all");
    assert_eq!(
        query.to_value(),
        json!({"match_all": {"boost": 1.2, "_name": "all"}})
    );
}

#[test]
fn test_term_query() {
    let query = TermQuery::new("user.id", "kimchy");
    assert_eq!(
        query.to_value(),
        json!({"term": {"user.id": {"value": "kimchy"}}})
    );
}

#[test]
fn test_term_query_options() {
    let query = TermQuery::new("active", true)
        .case_insensitive(true)
        .boost(2.0)
        .query_name("t");
    assert_eq!(
        query.to_value(),
        json!({"term": {"active": {
            "value": true,
            "case_insensitive": true,
            "boost": 2.0,
            "_name": "t"
        }}})
    );
}

#[test]
fn test_terms_query() {
    let query = TermsQuery::new("tags", ["rust", "search"]).boost(1.0);
    assert_eq!(
        query.to_value(),
        json!({"terms": {"tags": ["rust", "search"], "boost": 1.0}})
    );
}

#[test]
fn test_terms_query_numbers() {
    let query = TermsQuery::new("year", vec![2023, 2024]);
    assert_eq!(query.to_value().to_string(), r#"{"terms":{"year":[2023,2024]}}"#);
}

#[test]
fn test_match_query() {
    let query = MatchQuery::new("message", "quick brown fox")
        .operator("and")
        .analyzer("standard")
        .fuzziness("AUTO")
        .prefix_length(2)
        .max_expansions(10)
        .minimum_should_match("75%")
        .boost(1.5)
        .query_name("msg");
    assert_eq!(
        query.to_value().to_string(),
        concat!(
            r#"{"match":{"message":{"query":"quick brown fox","operator":"and","#,
            r#""analyzer":"standard","fuzziness":"AUTO","prefix_length":2,"#,
            r#""max_expansions":10,"minimum_should_match":"75%","boost":1.5,"_name":"msg"}}}"#
        )
    );
}

#[test]
fn test_prefix_query() {
    let query = PrefixQuery::new("user.id", "ki").rewrite("constant_score").case_insensitive(true);
    assert_eq!(
        query.to_value(),
        json!({"prefix": {"user.id": {
            "value": "ki",
            "rewrite": "constant_score",
            "case_insensitive": true
        }}})
    );
}

#[test]
fn test_wildcard_query() {
    let query = WildcardQuery::new("user.id", "ki*y").boost(1.0);
    assert_eq!(
        query.to_value(),
        json!({"wildcard": {"user.id": {"value": "ki*y", "boost": 1.0}}})
    );
}

#[test]
fn test_range_query_subset_of_bounds() {
    let query = RangeQuery::new("age").gte(10).lt(20);
    assert_eq!(query.to_value(), json!({"range": {"age": {"gte": 10, "lt": 20}}}));
}

#[test]
fn test_range_query_dates() {
    let query = RangeQuery::new("timestamp")
        .gt("now-1d/d")
        .lte("now/d")
        .format("strict_date_optional_time")
        .time_zone("+01:00")
        .relation("WITHIN");
    assert_eq!(
        query.to_value(),
        json!({"range": {"timestamp": {
            "gt": "now-1d/d",
            "lte": "now/d",
            "format": "strict_date_optional_time",
            "time_zone": "+01:00",
            "relation": "WITHIN"
        }}})
    );
}

#[test]
fn test_range_query_without_bounds() {
    assert_eq!(RangeQuery::new("age").to_value(), json!({"range": {"age": {}}}));
}

#[test]
fn test_exists_query() {
    assert_eq!(
        ExistsQuery::new("email").query_name("has_email").to_value(),
        json!({"exists": {"field": "email", "_name": "has_email"}})
    );
}

#[test]
fn test_ids_query() {
    assert_eq!(
        IdsQuery::new(["1", "4", "100"]).to_value(),
        json!({"ids": {"values": ["1", "4", "100"]}})
    );
}

#[test]
fn test_bool_query_empty() {
    assert_eq!(BoolQuery::new().to_value(), json!({"bool": {}}));
}

#[test]
fn test_bool_query_lists_keep_insertion_order() {
    let query = BoolQuery::new()
        .should(TermQuery::new("tag", "c"))
        .must(TermQuery::new("tag", "a"))
        .should(TermQuery::new("tag", "b"))
        .must_not(ExistsQuery::new("deleted"))
        .filter(RangeQuery::new("age").gte(18))
        .minimum_should_match(1);
    assert_eq!(
        query.to_value(),
        json!({"bool": {
            "must": [{"term": {"tag": {"value": "a"}}}],
            "filter": [{"range": {"age": {"gte": 18}}}],
            "should": [
                {"term": {"tag": {"value": "c"}}},
                {"term": {"tag": {"value": "b"}}}
            ],
            "must_not": [{"exists": {"field": "deleted"}}],
            "minimum_should_match": 1
        }})
    );
}

#[test]
fn test_bool_query_omits_empty_lists() {
    let value = BoolQuery::new().filter(ExistsQuery::new("a")).boost(1.0).to_value();
    let keys: Vec<&String> = value["bool"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["filter", "boost"]);
}

#[test]
fn test_nested_bool_queries() {
    let query = BoolQuery::new().must(
        BoolQuery::new()
            .should(TermQuery::new("color", "red"))
            .should(TermQuery::new("color", "blue")),
    );
    assert_eq!(
        query.to_value(),
        json!({"bool": {"must": [{"bool": {"should": [
            {"term": {"color": {"value": "red"}}},
            {"term": {"color": {"value": "blue"}}}
        ]}}]}})
    );
}

#[test]
fn test_constant_score_query() {
    let query = ConstantScoreQuery::new(TermQuery::new("user.id", "kimchy")).boost(1.2);
    assert_eq!(
        query.to_value(),
        json!({"constant_score": {
            "filter": {"term": {"user.id": {"value": "kimchy"}}},
            "boost": 1.2
        }})
    );
}

#[test]
fn test_has_parent_query() {
    let query = HasParentQuery::new("blog", TermQuery::new("tag", "rust"))
        .score(true)
        .boost(2.0)
        .query_name("hp");
    assert_eq!(
        query.to_value(),
        json!({"has_parent": {
            "query": {"term": {"tag": {"value": "rust"}}},
            "parent_type": "blog",
            "boost": 2.0,
            "score": true,
            "_name": "hp"
        }})
    );
}

#[test]
fn test_nested_query() {
    let query = NestedQuery::new("comments", MatchQuery::new("comments.author", "jon"))
        .score_mode("avg")
        .ignore_unmapped(true);
    assert_eq!(
        query.to_value(),
        json!({"nested": {
            "query": {"match": {"comments.author": {"query": "jon"}}},
            "path": "comments",
            "score_mode": "avg",
            "ignore_unmapped": true
        }})
    );
}

#[test]
fn test_has_child_inner_hits() {
    let query = HasChildQuery::new("comment", MatchAllQuery::new()).inner_hits(
        InnerHits::new()
            .name("top_comments")
            .size(3)
            .sort(Sort::desc("date")),
    );
    assert_eq!(
        query.to_value(),
        json!({"has_child": {
            "query": {"match_all": {}},
            "type": "comment",
            "inner_hits": {
                "name": "top_comments",
                "size": 3,
                "sort": [{"date": {"order": "desc"}}]
            }
        }})
    );
}

#[test]
fn test_empty_inner_hits() {
    let query = NestedQuery::new("items", MatchAllQuery::new()).inner_hits(InnerHits::new());
    assert_eq!(query.to_value()["nested"]["inner_hits"], json!({}));
}

#[test]
fn test_boxed_queries_compose() {
    let queries: Vec<Box<dyn Query>> = vec![
        Box::new(TermQuery::new("a", 1)),
        Box::new(FuzzyQuery::new("b", "x")),
    ];
    let mut query = BoolQuery::new();
    for q in queries {
        query = query.should(q);
    }
    assert_eq!(
        query.to_value(),
        json!({"bool": {"should": [
            {"term": {"a": {"value": 1}}},
            {"fuzzy": {"b": {"value": "x"}}}
        ]}})
    );
}

#[test]
fn test_clause_kinds() {
    assert_eq!(FuzzyQuery::new("a", "b").kind(), "fuzzy");
    assert_eq!(HasChildQuery::new("c", MatchAllQuery::new()).kind(), "has_child");
    assert_eq!(BoolQuery::new().kind(), "bool");
    assert_eq!(ConstantScoreQuery::new(MatchAllQuery::new()).kind(), "constant_score");
}

//! Catalog of the builders the CLI can describe, each with a worked example.

use crate::aggregation::{
    AvgAggregation, CardinalityAggregation, FilterAggregation, HistogramAggregation,
    MaxAggregation, MinAggregation, NestedAggregation, SumAggregation, TermsAggregation,
    ValueCountAggregation,
};
use crate::clause::{Clause, Meta};
use crate::output;
use crate::query::{
    BoolQuery, ConstantScoreQuery, ExistsQuery, FuzzyQuery, HasChildQuery, HasParentQuery,
    IdsQuery, InnerHits, MatchAllQuery, MatchQuery, NestedQuery, PrefixQuery, RangeQuery,
    TermQuery, TermsQuery, WildcardQuery,
};
use crate::script::Script;
use crate::search::{SearchSource, Sort};
use crate::value::SortOrder;

use super::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseCategory {
    Query,
    Aggregation,
    Search,
}

impl ClauseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseCategory::Query => "query",
            ClauseCategory::Aggregation => "aggregation",
            ClauseCategory::Search => "search",
        }
    }
}

/// A built example, ready to render.
#[derive(Debug)]
pub enum Example {
    Clause(Box<dyn Clause>),
    Search(SearchSource),
}

impl Example {
    pub fn render(&self, pretty: bool) -> String {
        match (self, pretty) {
            (Example::Clause(clause), false) => output::to_json(clause.as_ref()),
            (Example::Clause(clause), true) => output::to_json_pretty(clause.as_ref()),
            (Example::Search(source), false) => output::source_to_json(source),
            (Example::Search(source), true) => output::source_to_json_pretty(source),
        }
    }
}

#[derive(Debug)]
pub struct CatalogEntry {
    /// Wire-format name
    pub name: &'static str,
    pub category: ClauseCategory,
    pub summary: &'static str,
    build: fn() -> Example,
}

impl CatalogEntry {
    /// `category/name`, unique across the catalog.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.category.as_str(), self.name)
    }

    pub fn example(&self) -> Example {
        (self.build)()
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "bool",
        category: ClauseCategory::Query,
        summary: "Combines queries with must, filter, should and must_not lists.",
        build: bool_example,
    },
    CatalogEntry {
        name: "constant_score",
        category: ClauseCategory::Query,
        summary: "Wraps a filter and gives every match the same score.",
        build: constant_score_example,
    },
    CatalogEntry {
        name: "exists",
        category: ClauseCategory::Query,
        summary: "Documents with an indexed value for a field.",
        build: exists_example,
    },
    CatalogEntry {
        name: "fuzzy",
        category: ClauseCategory::Query,
        summary: "Terms within an edit distance of a value.",
        build: fuzzy_example,
    },
    CatalogEntry {
        name: "has_child",
        category: ClauseCategory::Query,
        summary: "Parents whose children of a given type match a query.",
        build: has_child_example,
    },
    CatalogEntry {
        name: "has_parent",
        category: ClauseCategory::Query,
        summary: "Children whose parent of a given type matches a query.",
        build: has_parent_example,
    },
    CatalogEntry {
        name: "ids",
        category: ClauseCategory::Query,
        summary: "Documents by _id.",
        build: ids_example,
    },
    CatalogEntry {
        name: "match",
        category: ClauseCategory::Query,
        summary: "Analyzed full-text match on one field.",
        build: match_example,
    },
    CatalogEntry {
        name: "match_all",
        category: ClauseCategory::Query,
        summary: "Every document.",
        build: match_all_example,
    },
    CatalogEntry {
        name: "nested",
        category: ClauseCategory::Query,
        summary: "Query against objects under a nested mapping.",
        build: nested_query_example,
    },
    CatalogEntry {
        name: "prefix",
        category: ClauseCategory::Query,
        summary: "Terms starting with a prefix.",
        build: prefix_example,
    },
    CatalogEntry {
        name: "range",
        category: ClauseCategory::Query,
        summary: "Values within bounds.",
        build: range_example,
    },
    CatalogEntry {
        name: "term",
        category: ClauseCategory::Query,
        summary: "One exact, unanalyzed term.",
        build: term_example,
    },
    CatalogEntry {
        name: "terms",
        category: ClauseCategory::Query,
        summary: "Any of several exact terms.",
        build: terms_query_example,
    },
    CatalogEntry {
        name: "wildcard",
        category: ClauseCategory::Query,
        summary: "Terms matching a ? / * pattern.",
        build: wildcard_example,
    },
    CatalogEntry {
        name: "avg",
        category: ClauseCategory::Aggregation,
        summary: "Average of numeric values.",
        build: avg_example,
    },
    CatalogEntry {
        name: "cardinality",
        category: ClauseCategory::Aggregation,
        summary: "Approximate distinct count.",
        build: cardinality_example,
    },
    CatalogEntry {
        name: "filter",
        category: ClauseCategory::Aggregation,
        summary: "Single bucket of documents matching a query.",
        build: filter_example,
    },
    CatalogEntry {
        name: "histogram",
        category: ClauseCategory::Aggregation,
        summary: "Fixed-width numeric buckets.",
        build: histogram_example,
    },
    CatalogEntry {
        name: "max",
        category: ClauseCategory::Aggregation,
        summary: "Largest numeric value.",
        build: max_example,
    },
    CatalogEntry {
        name: "min",
        category: ClauseCategory::Aggregation,
        summary: "Smallest numeric value.",
        build: min_example,
    },
    CatalogEntry {
        name: "nested",
        category: ClauseCategory::Aggregation,
        summary: "Steps into nested objects for sub-aggregations.",
        build: nested_aggregation_example,
    },
    CatalogEntry {
        name: "sum",
        category: ClauseCategory::Aggregation,
        summary: "Sum of numeric values.",
        build: sum_example,
    },
    CatalogEntry {
        name: "terms",
        category: ClauseCategory::Aggregation,
        summary: "One bucket per unique value.",
        build: terms_aggregation_example,
    },
    CatalogEntry {
        name: "value_count",
        category: ClauseCategory::Aggregation,
        summary: "Number of values extracted from the documents.",
        build: value_count_example,
    },
    CatalogEntry {
        name: "search",
        category: ClauseCategory::Search,
        summary: "A complete _search request body.",
        build: search_example,
    },
];

/// Looks up an entry by `name` or `category/name`.
///
/// Dashes are accepted in place of underscores and case is ignored. A bare
/// name shared by a query and an aggregation is ambiguous.
pub fn find(name: &str) -> Result<&'static CatalogEntry, CliError> {
    let normalized = name.to_lowercase().replace('-', "_");
    let (category, bare) = match normalized.split_once('/') {
        Some((category, bare)) => (Some(category), bare),
        None => (None, normalized.as_str()),
    };

    let matches: Vec<&'static CatalogEntry> = CATALOG
        .iter()
        .filter(|entry| entry.name == bare)
        .filter(|entry| match category {
            Some("agg") => entry.category == ClauseCategory::Aggregation,
            Some(c) => entry.category.as_str() == c,
            None => true,
        })
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::UnknownClause(name.to_string())),
        [entry] => Ok(*entry),
        _ => Err(CliError::AmbiguousClause {
            name: name.to_string(),
            candidates: matches.iter().map(|e| e.qualified_name()).collect(),
        }),
    }
}

pub fn entries(category: ClauseCategory) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |entry| entry.category == category)
}

fn bool_example() -> Example {
    Example::Clause(Box::new(
        BoolQuery::new()
            .must(MatchQuery::new("title", "rust builders"))
            .filter(TermQuery::new("status", "published"))
            .should(RangeQuery::new("stars").gte(100))
            .must_not(ExistsQuery::new("deleted_at"))
            .minimum_should_match(1),
    ))
}

fn constant_score_example() -> Example {
    Example::Clause(Box::new(
        ConstantScoreQuery::new(TermQuery::new("user.id", "kimchy")).boost(1.2),
    ))
}

fn exists_example() -> Example {
    Example::Clause(Box::new(ExistsQuery::new("email")))
}

fn fuzzy_example() -> Example {
    Example::Clause(Box::new(
        FuzzyQuery::new("name", "jon")
            .fuzziness("AUTO")
            .prefix_length(1)
            .max_expansions(50)
            .boost(2.0),
    ))
}

fn has_child_example() -> Example {
    Example::Clause(Box::new(
        HasChildQuery::new("comment", FuzzyQuery::new("author", "jon").fuzziness("AUTO"))
            .score_type("max")
            .min_children(1)
            .max_children(10)
            .inner_hits(InnerHits::new().size(3)),
    ))
}

fn has_parent_example() -> Example {
    Example::Clause(Box::new(
        HasParentQuery::new("blog", TermQuery::new("tag", "rust")).score(true),
    ))
}

fn ids_example() -> Example {
    Example::Clause(Box::new(IdsQuery::new(["1", "4", "100"])))
}

fn match_example() -> Example {
    Example::Clause(Box::new(
        MatchQuery::new("message", "this is a test")
            .operator("and")
            .fuzziness(1),
    ))
}

fn match_all_example() -> Example {
    Example::Clause(Box::new(MatchAllQuery::new()))
}

fn nested_query_example() -> Example {
    Example::Clause(Box::new(
        NestedQuery::new(
            "comments",
            BoolQuery::new()
                .must(MatchQuery::new("comments.author", "jon"))
                .must(RangeQuery::new("comments.stars").gte(4)),
        )
        .score_mode("avg"),
    ))
}

fn prefix_example() -> Example {
    Example::Clause(Box::new(PrefixQuery::new("user.id", "ki")))
}

fn range_example() -> Example {
    Example::Clause(Box::new(
        RangeQuery::new("timestamp")
            .gte("now-1d/d")
            .lt("now/d")
            .time_zone("+01:00"),
    ))
}

fn term_example() -> Example {
    Example::Clause(Box::new(TermQuery::new("user.id", "kimchy").boost(1.0)))
}

fn terms_query_example() -> Example {
    Example::Clause(Box::new(TermsQuery::new("tags", ["rust", "search"])))
}

fn wildcard_example() -> Example {
    Example::Clause(Box::new(WildcardQuery::new("user.id", "ki*y")))
}

fn avg_example() -> Example {
    Example::Clause(Box::new(AvgAggregation::new().field("grade").missing(10)))
}

fn cardinality_example() -> Example {
    Example::Clause(Box::new(
        CardinalityAggregation::new().field("type").precision_threshold(100),
    ))
}

fn filter_example() -> Example {
    Example::Clause(Box::new(
        FilterAggregation::new(TermQuery::new("type", "t-shirt"))
            .sub_aggregation("avg_price", AvgAggregation::new().field("price")),
    ))
}

fn histogram_example() -> Example {
    Example::Clause(Box::new(HistogramAggregation::new("price", 50.0).min_doc_count(1)))
}

fn max_example() -> Example {
    Example::Clause(Box::new(MaxAggregation::new().field("price")))
}

fn min_example() -> Example {
    Example::Clause(Box::new(MinAggregation::new().field("price")))
}

fn nested_aggregation_example() -> Example {
    Example::Clause(Box::new(
        NestedAggregation::new("resellers")
            .sub_aggregation("min_price", MinAggregation::new().field("resellers.price")),
    ))
}

fn sum_example() -> Example {
    Example::Clause(Box::new(
        SumAggregation::new().script(Script::new("doc['price'].value * doc['qty'].value")),
    ))
}

fn terms_aggregation_example() -> Example {
    Example::Clause(Box::new(
        TermsAggregation::new()
            .field("genre")
            .size(10)
            .order("_count", SortOrder::Desc),
    ))
}

fn value_count_example() -> Example {
    let mut meta = Meta::new();
    meta.insert("color".to_string(), "blue".into());
    Example::Clause(Box::new(
        ValueCountAggregation::new().field("age").format("0.00").meta(meta),
    ))
}

fn search_example() -> Example {
    Example::Search(
        SearchSource::new()
            .query(BoolQuery::new().filter(TermQuery::new("status", "active")))
            .from(0)
            .size(20)
            .sort(Sort::desc("created_at"))
            .sort(Sort::new("_score"))
            .aggregation(
                "by_city",
                TermsAggregation::new()
                    .field("city")
                    .sub_aggregation("ages", ValueCountAggregation::new().field("age")),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names_are_unique() {
        let mut names: Vec<String> = CATALOG.iter().map(CatalogEntry::qualified_name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn every_example_renders_under_its_own_key() {
        for entry in CATALOG {
            if let Example::Clause(clause) = entry.example() {
                assert_eq!(clause.kind(), entry.name, "{}", entry.qualified_name());
                assert!(clause.to_value().get(entry.name).is_some());
            }
        }
    }

    #[test]
    fn find_normalizes_names() {
        assert_eq!(find("Has-Child").map(|e| e.name).ok(), Some("has_child"));
        assert_eq!(find("value-count").map(|e| e.name).ok(), Some("value_count"));
    }

    #[test]
    fn bare_shared_name_is_ambiguous() {
        match find("terms") {
            Err(CliError::AmbiguousClause { candidates, .. }) => {
                assert_eq!(candidates, vec!["query/terms", "aggregation/terms"]);
            }
            other => panic!("expected ambiguity, got {:?}", other.map(|e| e.name)),
        }
    }

    #[test]
    fn qualified_lookup_resolves_shared_name() {
        let entry = find("agg/terms").unwrap();
        assert_eq!(entry.category, ClauseCategory::Aggregation);
        let entry = find("query/nested").unwrap();
        assert_eq!(entry.category, ClauseCategory::Query);
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(find("geo_shape"), Err(CliError::UnknownClause(_))));
    }
}

//! Documentation content for esdsl CLI

use super::CliError;
use super::catalog::{self, ClauseCategory};

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Queries,
    Aggregations,
    Requests,
    Values,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "queries" | "query" => Some(Self::Queries),
            "aggregations" | "aggregation" | "aggs" => Some(Self::Aggregations),
            "requests" | "request" => Some(Self::Requests),
            "values" | "types" => Some(Self::Values),
            _ => None,
        }
    }

    fn catalog_category(&self) -> Option<ClauseCategory> {
        match self {
            Self::Queries => Some(ClauseCategory::Query),
            Self::Aggregations => Some(ClauseCategory::Aggregation),
            Self::Requests => Some(ClauseCategory::Search),
            Self::Values => None,
        }
    }

    fn text(&self) -> &'static str {
        match self {
            Self::Queries => QUERIES_DOC,
            Self::Aggregations => AGGREGATIONS_DOC,
            Self::Requests => REQUESTS_DOC,
            Self::Values => VALUES_DOC,
        }
    }
}

const OVERVIEW_HEADER: &str = r#"ESDSL DOCUMENTATION

esdsl builds Elasticsearch query and aggregation request bodies. Every
builder takes its required parameters up front, exposes one chained setter
per optional parameter, and renders only the parameters that were set.

DOCUMENTATION CATEGORIES

  queries           Query clauses and the conventions they share
  aggregations      Aggregations, sub-aggregations and meta
  requests          Full _search request bodies
  values            Scalar values, fuzziness and other mixed-type parameters
"#;

const OVERVIEW_FOOTER: &str = r#"
Run 'esdsl doc <category>' or 'esdsl doc <clause>' for details.
Run 'esdsl example <clause> --pretty' for just the rendered payload.
Names shared by a query and an aggregation need a prefix: query/terms, agg/terms.
"#;

/// Get the docs overview (category and clause listing)
pub fn get_docs_overview() -> String {
    let mut out = String::from(OVERVIEW_HEADER);
    for (title, category) in [
        ("QUERIES", ClauseCategory::Query),
        ("AGGREGATIONS", ClauseCategory::Aggregation),
        ("REQUESTS", ClauseCategory::Search),
    ] {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        out.push_str(&entry_listing(category));
    }
    out.push_str(OVERVIEW_FOOTER);
    out
}

/// Get documentation for a category or a single catalog entry
pub fn get_doc(name: &str) -> Result<String, CliError> {
    if let Some(category) = DocCategory::from_str(name) {
        let mut out = String::from(category.text());
        if let Some(clauses) = category.catalog_category() {
            out.push_str("\nAVAILABLE\n");
            out.push_str(&entry_listing(clauses));
        }
        return Ok(out);
    }

    let entry = catalog::find(name)?;
    Ok(format!(
        "{} ({})\n\n  {}\n\nEXAMPLE\n{}\n",
        entry.name.to_uppercase(),
        entry.category.as_str(),
        entry.summary,
        entry.example().render(true)
    ))
}

fn entry_listing(category: ClauseCategory) -> String {
    catalog::entries(category)
        .map(|entry| format!("  {:<18}{}\n", entry.name, entry.summary))
        .collect()
}

const QUERIES_DOC: &str = r#"QUERIES - Query Clauses

CONSTRUCTION
  Required parameters go to new(); everything else is a chained setter.

    FuzzyQuery::new("name", "jon").fuzziness("AUTO").boost(2.0)

  Renders:
    {"fuzzy": {"name": {"value": "jon", "boost": 2.0, "fuzziness": "AUTO"}}}

SHARED SETTERS
  boost(f64)            Relevance multiplier, rendered as "boost"
  query_name(str)       Tag reported back in matched_queries, rendered as "_name"

WRAPPING QUERIES
  has_child, has_parent, nested and constant_score take the wrapped query
  in new(). It cannot be replaced afterwards.

BOOL LISTS
  must(), filter(), should() and must_not() append. Each list renders in
  the order clauses were added; empty lists are left out.

UNSET MEANS ABSENT
  A setter that was never called leaves its key out. An explicit 0, false
  or "" is rendered as given.
"#;

const AGGREGATIONS_DOC: &str = r#"AGGREGATIONS - Metrics and Buckets

CONSTRUCTION
    ValueCountAggregation::new().field("age").format("0.00")

  Renders:
    {"value_count": {"field": "age", "format": "0.00"}}

SUB-AGGREGATIONS
  sub_aggregation(name, agg) nests a named child under "aggregations".
  Reusing a name replaces the earlier child; it keeps its position.

META
  meta(map) attaches opaque key/value pairs, rendered under "meta" when the
  map is not empty. The engine echoes them back in the response.

FIELD OR SCRIPT
  Metrics read a field or run a script. Both may be set; the engine
  decides whether that is valid.
"#;

const REQUESTS_DOC: &str = r#"REQUESTS - Search Bodies

  SearchSource::new()
      .query(TermQuery::new("status", "active"))
      .size(0)
      .aggregation("ages", ValueCountAggregation::new().field("age"))

  Keys render in this order when set:
    query, post_filter, from, size, timeout, min_score, track_total_hits,
    _source, sort, aggregations

SORT
  Sort::new("age")                 "age"
  Sort::desc("age")                {"age": {"order": "desc"}}
"#;

const VALUES_DOC: &str = r#"VALUES - Scalars and Mixed Types

TERM VALUES
  Term-level queries accept bool, integers, f64 and strings. Integers and
  floats stay distinct: 1 renders as 1, 1.0 as 1.0.

FUZZINESS
  An edit distance or a string, passed through unvalidated:
    fuzziness(2)          "fuzziness": 2
    fuzziness("AUTO")     "fuzziness": "AUTO"
    fuzziness("0..1")     "fuzziness": "0..1"

MINIMUM SHOULD MATCH
  A count or a string:
    minimum_should_match(2)        "minimum_should_match": 2
    minimum_should_match("75%")    "minimum_should_match": "75%"
"#;

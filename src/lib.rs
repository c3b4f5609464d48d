//! Fluent builders for Elasticsearch query and aggregation request bodies.
//!
//! Every builder takes its mandatory parameters in `new`, offers one chained
//! setter per optional parameter, and serializes through
//! [`Clause::to_value`]. Optional parameters that were never set are left out
//! of the output entirely.
//!
//! ```
//! use esdsl::{Clause, FuzzyQuery};
//! use serde_json::json;
//!
//! let query = FuzzyQuery::new("name", "jon").fuzziness("AUTO").boost(2.0);
//! assert_eq!(
//!     query.to_value(),
//!     json!({"fuzzy": {"name": {"value": "jon", "boost": 2.0, "fuzziness": "AUTO"}}})
//! );
//! ```

pub mod aggregation;
pub mod clause;
pub mod cli;
pub mod output;
pub mod query;
pub mod script;
pub mod search;
pub mod value;

pub use aggregation::{
    AvgAggregation, CardinalityAggregation, FilterAggregation, HistogramAggregation,
    MaxAggregation, MinAggregation, NestedAggregation, SumAggregation, TermsAggregation,
    ValueCountAggregation,
};
pub use clause::{Aggregation, Clause, Meta, Query, SubAggregations};
pub use output::{to_json, to_json_pretty};
pub use query::{
    BoolQuery, ConstantScoreQuery, ExistsQuery, FuzzyQuery, HasChildQuery, HasParentQuery,
    IdsQuery, InnerHits, MatchAllQuery, MatchQuery, NestedQuery, PrefixQuery, RangeQuery,
    TermQuery, TermsQuery, WildcardQuery,
};
pub use script::Script;
pub use search::{SearchSource, Sort, SourceFilter};
pub use value::{Fuzziness, MinimumShouldMatch, SortOrder, Value};

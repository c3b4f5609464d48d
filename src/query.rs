//! # Query clauses
//!
//! One builder per query type of the search DSL. Each builder takes its
//! mandatory parameters in `new`, exposes one chained setter per optional
//! parameter, and renders through [`Clause::to_value`](crate::Clause::to_value).
//!
//! ## Organization
//!
//! - **Term-level** - [`TermQuery`], [`TermsQuery`], [`PrefixQuery`],
//!   [`WildcardQuery`], [`RangeQuery`], [`ExistsQuery`], [`IdsQuery`],
//!   [`FuzzyQuery`]
//! - **Full text** - [`MatchQuery`], [`MatchAllQuery`]
//! - **Compound** - [`BoolQuery`], [`ConstantScoreQuery`]
//! - **Joining** - [`HasChildQuery`], [`HasParentQuery`], [`NestedQuery`],
//!   with [`InnerHits`] for returning the matching inner documents
//!
//! ## Example
//!
//! ```
//! use esdsl::{Clause, FuzzyQuery, HasChildQuery};
//! use serde_json::json;
//!
//! let query = HasChildQuery::new("comment", FuzzyQuery::new("author", "jon").fuzziness("AUTO"))
//!     .min_children(1);
//!
//! assert_eq!(
//!     query.to_value(),
//!     json!({
//!         "has_child": {
//!             "query": {"fuzzy": {"author": {"value": "jon", "fuzziness": "AUTO"}}},
//!             "type": "comment",
//!             "min_children": 1
//!         }
//!     })
//! );
//! ```

pub mod bool_query;
pub mod constant_score;
pub mod exists;
pub mod fuzzy;
pub mod has_child;
pub mod has_parent;
pub mod ids;
pub mod inner_hits;
pub mod match_all;
pub mod match_query;
pub mod nested;
pub mod prefix;
pub mod range;
pub mod term;
pub mod terms;
pub mod wildcard;

pub use bool_query::BoolQuery;
pub use constant_score::ConstantScoreQuery;
pub use exists::ExistsQuery;
pub use fuzzy::FuzzyQuery;
pub use has_child::HasChildQuery;
pub use has_parent::HasParentQuery;
pub use ids::IdsQuery;
pub use inner_hits::InnerHits;
pub use match_all::MatchAllQuery;
pub use match_query::MatchQuery;
pub use nested::NestedQuery;
pub use prefix::PrefixQuery;
pub use range::RangeQuery;
pub use term::TermQuery;
pub use terms::TermsQuery;
pub use wildcard::WildcardQuery;

//! # Aggregation clauses
//!
//! Builders for the aggregation half of the DSL. Every aggregation can carry
//! named sub-aggregations and an opaque `meta` object; both are rendered
//! after the aggregation's own body:
//!
//! ```text
//! {<kind>: {...}, "aggregations": {<name>: {...}, ...}, "meta": {...}}
//! ```
//!
//! ## Organization
//!
//! - **Metrics** - [`ValueCountAggregation`], [`AvgAggregation`],
//!   [`SumAggregation`], [`MinAggregation`], [`MaxAggregation`],
//!   [`CardinalityAggregation`]
//! - **Bucket** - [`TermsAggregation`], [`FilterAggregation`],
//!   [`HistogramAggregation`], [`NestedAggregation`]
//!
//! ## Example
//!
//! ```
//! use esdsl::{AvgAggregation, Clause, TermsAggregation};
//! use serde_json::json;
//!
//! let by_city = TermsAggregation::new()
//!     .field("city")
//!     .size(5)
//!     .sub_aggregation("avg_age", AvgAggregation::new().field("age"));
//!
//! assert_eq!(
//!     by_city.to_value(),
//!     json!({
//!         "terms": {"field": "city", "size": 5},
//!         "aggregations": {"avg_age": {"avg": {"field": "age"}}}
//!     })
//! );
//! ```

pub mod cardinality;
pub mod filter;
pub mod histogram;
pub mod metrics;
pub mod nested;
pub mod terms;
pub mod value_count;

pub use cardinality::CardinalityAggregation;
pub use filter::FilterAggregation;
pub use histogram::HistogramAggregation;
pub use metrics::{AvgAggregation, MaxAggregation, MinAggregation, SumAggregation};
pub use nested::NestedAggregation;
pub use terms::TermsAggregation;
pub use value_count::ValueCountAggregation;

//! Rendering clauses and search bodies to JSON text.
//!
//! Both output forms keep the key order the builders produce, which follows
//! the engine's documented schema.
//!
//! - **Compact output** via [`to_json()`] - no whitespace, for request bodies
//! - **Pretty output** via [`to_json_pretty()`] - 2-space indentation, for
//!   logs and humans
//!
//! # Examples
//!
//! ```
//! use esdsl::ValueCountAggregation;
//! use esdsl::output::{to_json, to_json_pretty};
//!
//! let count = ValueCountAggregation::new().field("age");
//!
//! assert_eq!(to_json(&count), r#"{"value_count":{"field":"age"}}"#);
//! assert_eq!(
//!     to_json_pretty(&count),
//!     "{\n  \"value_count\": {\n    \"field\": \"age\"\n  }\n}"
//! );
//! ```

use crate::clause::Clause;
use crate::search::SearchSource;

/// Renders a clause as compact JSON.
pub fn to_json(clause: &dyn Clause) -> String {
    tracing::debug!(kind = clause.kind(), "rendering clause");
    clause.to_value().to_string()
}

/// Renders a clause as pretty-printed JSON with 2-space indentation.
pub fn to_json_pretty(clause: &dyn Clause) -> String {
    tracing::debug!(kind = clause.kind(), pretty = true, "rendering clause");
    format!("{:#}", clause.to_value())
}

/// Renders a full search body as compact JSON.
pub fn source_to_json(source: &SearchSource) -> String {
    tracing::debug!("rendering search body");
    source.to_value().to_string()
}

/// Renders a full search body as pretty-printed JSON.
pub fn source_to_json_pretty(source: &SearchSource) -> String {
    tracing::debug!(pretty = true, "rendering search body");
    format!("{:#}", source.to_value())
}

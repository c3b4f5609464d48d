use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::query::InnerHits;

/// Runs a query against child documents of the given type and returns the
/// parents of the children that matched.
///
/// The child type and the wrapped query are fixed at construction.
#[derive(Debug)]
pub struct HasChildQuery {
    query: Box<dyn Query>,
    child_type: String,
    boost: Option<f64>,
    score_type: Option<String>,
    min_children: Option<u32>,
    max_children: Option<u32>,
    short_circuit_cutoff: Option<u32>,
    inner_hits: Option<InnerHits>,
    query_name: Option<String>,
}

impl HasChildQuery {
    pub fn new(child_type: impl Into<String>, query: impl Query + 'static) -> Self {
        HasChildQuery {
            query: Box::new(query),
            child_type: child_type.into(),
            boost: None,
            score_type: None,
            min_children: None,
            max_children: None,
            short_circuit_cutoff: None,
            inner_hits: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// How child scores are folded into the parent score, e.g. `"max"`,
    /// `"sum"`, `"avg"` or `"none"`.
    pub fn score_type(mut self, score_type: impl Into<String>) -> Self {
        self.score_type = Some(score_type.into());
        self
    }

    pub fn min_children(mut self, min_children: u32) -> Self {
        self.min_children = Some(min_children);
        self
    }

    pub fn max_children(mut self, max_children: u32) -> Self {
        self.max_children = Some(max_children);
        self
    }

    pub fn short_circuit_cutoff(mut self, short_circuit_cutoff: u32) -> Self {
        self.short_circuit_cutoff = Some(short_circuit_cutoff);
        self
    }

    pub fn inner_hits(mut self, inner_hits: InnerHits) -> Self {
        self.inner_hits = Some(inner_hits);
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

impl Sealed for HasChildQuery {}

impl Clause for HasChildQuery {
    fn kind(&self) -> &'static str {
        "has_child"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("query", self.query.to_value())
            .set("type", self.child_type.as_str())
            .set_opt("boost", self.boost)
            .set_opt("score_type", self.score_type.as_deref())
            .set_opt("min_children", self.min_children)
            .set_opt("max_children", self.max_children)
            .set_opt("short_circuit_cutoff", self.short_circuit_cutoff)
            .set_opt("inner_hits", self.inner_hits.as_ref().map(InnerHits::to_json))
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for HasChildQuery {}

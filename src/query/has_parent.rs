use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::query::InnerHits;

/// Returns child documents whose parent of the given type matches the query.
#[derive(Debug)]
pub struct HasParentQuery {
    query: Box<dyn Query>,
    parent_type: String,
    boost: Option<f64>,
    score: Option<bool>,
    inner_hits: Option<InnerHits>,
    query_name: Option<String>,
}

impl HasParentQuery {
    pub fn new(parent_type: impl Into<String>, query: impl Query + 'static) -> Self {
        HasParentQuery {
            query: Box::new(query),
            parent_type: parent_type.into(),
            boost: None,
            score: None,
            inner_hits: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Whether the parent's relevance score is propagated to the children.
    pub fn score(mut self, score: bool) -> Self {
        self.score = Some(score);
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

impl Sealed for HasParentQuery {}

impl Clause for HasParentQuery {
    fn kind(&self) -> &'static str {
        "has_parent"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("query", self.query.to_value())
            .set("parent_type", self.parent_type.as_str())
            .set_opt("boost", self.boost)
            .set_opt("score", self.score)
            .set_opt("inner_hits", self.inner_hits.as_ref().map(InnerHits::to_json))
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for HasParentQuery {}

use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::query::InnerHits;

/// Runs a query against objects stored under a `nested` field mapping.
#[derive(Debug)]
pub struct NestedQuery {
    query: Box<dyn Query>,
    path: String,
    boost: Option<f64>,
    score_mode: Option<String>,
    ignore_unmapped: Option<bool>,
    inner_hits: Option<InnerHits>,
    query_name: Option<String>,
}

impl NestedQuery {
    pub fn new(path: impl Into<String>, query: impl Query + 'static) -> Self {
        NestedQuery {
            query: Box::new(query),
            path: path.into(),
            boost: None,
            score_mode: None,
            ignore_unmapped: None,
            inner_hits: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// `"avg"`, `"max"`, `"min"`, `"sum"` or `"none"`.
    pub fn score_mode(mut self, score_mode: impl Into<String>) -> Self {
        self.score_mode = Some(score_mode.into());
        self
    }

    pub fn ignore_unmapped(mut self, ignore_unmapped: bool) -> Self {
        self.ignore_unmapped = Some(ignore_unmapped);
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

impl Sealed for NestedQuery {}

impl Clause for NestedQuery {
    fn kind(&self) -> &'static str {
        "nested"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("query", self.query.to_value())
            .set("path", self.path.as_str())
            .set_opt("boost", self.boost)
            .set_opt("score_mode", self.score_mode.as_deref())
            .set_opt("ignore_unmapped", self.ignore_unmapped)
            .set_opt("inner_hits", self.inner_hits.as_ref().map(InnerHits::to_json))
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for NestedQuery {}

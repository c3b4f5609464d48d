use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};

/// Matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchAllQuery {
    boost: Option<f64>,
    query_name: Option<String>,
}

impl MatchAllQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

impl Sealed for MatchAllQuery {}

impl Clause for MatchAllQuery {
    fn kind(&self) -> &'static str {
        "match_all"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for MatchAllQuery {}

use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};

/// Wraps a filter and gives every matching document the same score.
#[derive(Debug)]
pub struct ConstantScoreQuery {
    filter: Box<dyn Query>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl ConstantScoreQuery {
    pub fn new(filter: impl Query + 'static) -> Self {
        ConstantScoreQuery {
            filter: Box::new(filter),
            boost: None,
            query_name: None,
        }
    }

    /// The constant score given to matches.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

impl Sealed for ConstantScoreQuery {}

impl Clause for ConstantScoreQuery {
    fn kind(&self) -> &'static str {
        "constant_score"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("filter", self.filter.to_value())
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for ConstantScoreQuery {}

use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};

/// Matches documents that have an indexed value for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsQuery {
    field: String,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl ExistsQuery {
    pub fn new(field: impl Into<String>) -> Self {
        ExistsQuery {
            field: field.into(),
            boost: None,
            query_name: None,
        }
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

impl Sealed for ExistsQuery {}

impl Clause for ExistsQuery {
    fn kind(&self) -> &'static str {
        "exists"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("field", self.field.as_str())
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for ExistsQuery {}

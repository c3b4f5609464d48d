use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};

/// Matches documents by `_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdsQuery {
    values: Vec<String>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl IdsQuery {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IdsQuery {
            values: ids.into_iter().map(Into::into).collect(),
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

impl Sealed for IdsQuery {}

impl Clause for IdsQuery {
    fn kind(&self) -> &'static str {
        "ids"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("values", self.values.clone())
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for IdsQuery {}

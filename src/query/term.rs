use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::value::Value;

/// Exact match against the indexed term; the value is not analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    field: String,
    value: Value,
    case_insensitive: Option<bool>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl TermQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        TermQuery {
            field: field.into(),
            value: value.into(),
            case_insensitive: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
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

impl Sealed for TermQuery {}

impl Clause for TermQuery {
    fn kind(&self) -> &'static str {
        "term"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("value", self.value.to_json())
            .set_opt("case_insensitive", self.case_insensitive)
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), wrap(&self.field, body.into_value()))
    }
}

impl Query for TermQuery {}

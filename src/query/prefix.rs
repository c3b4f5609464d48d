use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};

/// Matches terms that start with the given prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixQuery {
    field: String,
    prefix: String,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl PrefixQuery {
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        PrefixQuery {
            field: field.into(),
            prefix: prefix.into(),
            rewrite: None,
            case_insensitive: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
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

impl Sealed for PrefixQuery {}

impl Clause for PrefixQuery {
    fn kind(&self) -> &'static str {
        "prefix"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("value", self.prefix.as_str())
            .set_opt("rewrite", self.rewrite.as_deref())
            .set_opt("case_insensitive", self.case_insensitive)
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), wrap(&self.field, body.into_value()))
    }
}

impl Query for PrefixQuery {}

use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::value::Value;

/// Matches field values within bounds. Any subset of the four bounds may be
/// set; none are required.
///
/// Bounds are [`Value`]s so dates can be passed as strings (`"now-1d/d"`)
/// and numbers keep their integer or float form.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    field: String,
    gt: Option<Value>,
    gte: Option<Value>,
    lt: Option<Value>,
    lte: Option<Value>,
    format: Option<String>,
    time_zone: Option<String>,
    relation: Option<String>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl RangeQuery {
    pub fn new(field: impl Into<String>) -> Self {
        RangeQuery {
            field: field.into(),
            gt: None,
            gte: None,
            lt: None,
            lte: None,
            format: None,
            time_zone: None,
            relation: None,
            boost: None,
            query_name: None,
        }
    }

    pub fn gt(mut self, bound: impl Into<Value>) -> Self {
        self.gt = Some(bound.into());
        self
    }

    pub fn gte(mut self, bound: impl Into<Value>) -> Self {
        self.gte = Some(bound.into());
        self
    }

    pub fn lt(mut self, bound: impl Into<Value>) -> Self {
        self.lt = Some(bound.into());
        self
    }

    pub fn lte(mut self, bound: impl Into<Value>) -> Self {
        self.lte = Some(bound.into());
        self
    }

    /// Date format used to parse string bounds.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// For range fields: `"INTERSECTS"`, `"CONTAINS"` or `"WITHIN"`.
    pub fn relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
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

impl Sealed for RangeQuery {}

impl Clause for RangeQuery {
    fn kind(&self) -> &'static str {
        "range"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("gt", self.gt.as_ref().map(Value::to_json))
            .set_opt("gte", self.gte.as_ref().map(Value::to_json))
            .set_opt("lt", self.lt.as_ref().map(Value::to_json))
            .set_opt("lte", self.lte.as_ref().map(Value::to_json))
            .set_opt("format", self.format.as_deref())
            .set_opt("time_zone", self.time_zone.as_deref())
            .set_opt("relation", self.relation.as_deref())
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), wrap(&self.field, body.into_value()))
    }
}

impl Query for RangeQuery {}

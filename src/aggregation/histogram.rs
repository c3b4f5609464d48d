use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope};
use crate::value::Value;

/// Fixed-width numeric buckets.
#[derive(Debug)]
pub struct HistogramAggregation {
    field: String,
    interval: f64,
    offset: Option<f64>,
    min_doc_count: Option<u64>,
    missing: Option<Value>,
    keyed: Option<bool>,
    format: Option<String>,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl HistogramAggregation {
    pub fn new(field: impl Into<String>, interval: f64) -> Self {
        HistogramAggregation {
            field: field.into(),
            interval,
            offset: None,
            min_doc_count: None,
            missing: None,
            keyed: None,
            format: None,
            sub_aggregations: SubAggregations::new(),
            meta: Meta::new(),
        }
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn min_doc_count(mut self, min_doc_count: u64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    /// Return buckets as an object keyed by bucket key instead of an array.
    pub fn keyed(mut self, keyed: bool) -> Self {
        self.keyed = Some(keyed);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn sub_aggregation(mut self, name: impl Into<String>, aggregation: impl Aggregation + 'static) -> Self {
        self.sub_aggregations.insert(name, aggregation);
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

impl Sealed for HistogramAggregation {}

impl Clause for HistogramAggregation {
    fn kind(&self) -> &'static str {
        "histogram"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("field", self.field.as_str())
            .set("interval", self.interval)
            .set_opt("offset", self.offset)
            .set_opt("min_doc_count", self.min_doc_count)
            .set_opt("missing", self.missing.as_ref().map(Value::to_json))
            .set_opt("keyed", self.keyed)
            .set_opt("format", self.format.as_deref());
        aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for HistogramAggregation {}

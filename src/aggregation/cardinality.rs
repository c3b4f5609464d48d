use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope};
use crate::script::Script;
use crate::value::Value;

/// Approximate count of distinct values.
#[derive(Debug, Default)]
pub struct CardinalityAggregation {
    field: Option<String>,
    script: Option<Script>,
    missing: Option<Value>,
    precision_threshold: Option<u64>,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl CardinalityAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn script(mut self, script: impl Into<Script>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    /// Counts below this threshold are expected to be close to exact.
    pub fn precision_threshold(mut self, threshold: u64) -> Self {
        self.precision_threshold = Some(threshold);
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

impl Sealed for CardinalityAggregation {}

impl Clause for CardinalityAggregation {
    fn kind(&self) -> &'static str {
        "cardinality"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("field", self.field.as_deref())
            .set_opt("script", self.script.as_ref().map(Script::to_json))
            .set_opt("missing", self.missing.as_ref().map(Value::to_json))
            .set_opt("precision_threshold", self.precision_threshold);
        aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for CardinalityAggregation {}

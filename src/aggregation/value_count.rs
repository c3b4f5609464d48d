use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope};
use crate::script::Script;

/// Single-value metric counting the values extracted from the aggregated
/// documents, read from a field or produced by a script.
///
/// Usually paired with another single-value metric, e.g. to report how many
/// values an average was computed over.
///
/// # Examples
///
/// ```
/// use esdsl::{Clause, ValueCountAggregation};
/// use serde_json::json;
///
/// let count = ValueCountAggregation::new().field("age").format("0.00");
/// assert_eq!(count.to_value(), json!({"value_count": {"field": "age", "format": "0.00"}}));
/// ```
#[derive(Debug, Default)]
pub struct ValueCountAggregation {
    field: Option<String>,
    script: Option<Script>,
    format: Option<String>,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl ValueCountAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Counts script-produced values. Setting both `field` and `script` is
    /// passed through; the engine decides what to do with it.
    pub fn script(mut self, script: impl Into<Script>) -> Self {
        self.script = Some(script.into());
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

impl Sealed for ValueCountAggregation {}

impl Clause for ValueCountAggregation {
    fn kind(&self) -> &'static str {
        "value_count"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("field", self.field.as_deref())
            .set_opt("script", self.script.as_ref().map(Script::to_json))
            .set_opt("format", self.format.as_deref());
        aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for ValueCountAggregation {}

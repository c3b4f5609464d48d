//! Numeric single-value metrics that share one body layout:
//! `{field, script, format, missing}`.

use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope};
use crate::script::Script;
use crate::value::Value;

macro_rules! single_value_metric {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Default)]
        pub struct $name {
            field: Option<String>,
            script: Option<Script>,
            format: Option<String>,
            missing: Option<Value>,
            sub_aggregations: SubAggregations,
            meta: Meta,
        }

        impl $name {
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

            pub fn format(mut self, format: impl Into<String>) -> Self {
                self.format = Some(format.into());
                self
            }

            /// Value used for documents that lack the field.
            pub fn missing(mut self, missing: impl Into<Value>) -> Self {
                self.missing = Some(missing.into());
                self
            }

            pub fn sub_aggregation(
                mut self,
                name: impl Into<String>,
                aggregation: impl Aggregation + 'static,
            ) -> Self {
                self.sub_aggregations.insert(name, aggregation);
                self
            }

            pub fn meta(mut self, meta: Meta) -> Self {
                self.meta = meta;
                self
            }
        }

        impl Sealed for $name {}

        impl Clause for $name {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn to_value(&self) -> Json {
                let body = Body::new()
                    .set_opt("field", self.field.as_deref())
                    .set_opt("script", self.script.as_ref().map(Script::to_json))
                    .set_opt("format", self.format.as_deref())
                    .set_opt("missing", self.missing.as_ref().map(Value::to_json));
                aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
            }
        }

        impl Aggregation for $name {}
    };
}

single_value_metric!(
    /// Average of the numeric values extracted from the aggregated documents.
    AvgAggregation,
    "avg"
);

single_value_metric!(
    /// Sum of the numeric values extracted from the aggregated documents.
    SumAggregation,
    "sum"
);

single_value_metric!(
    /// Smallest numeric value among the aggregated documents.
    MinAggregation,
    "min"
);

single_value_metric!(
    /// Largest numeric value among the aggregated documents.
    MaxAggregation,
    "max"
);

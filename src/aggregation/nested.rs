use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope};

/// Steps into `nested` objects at `path`; sub-aggregations then run over
/// those objects.
#[derive(Debug)]
pub struct NestedAggregation {
    path: String,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl NestedAggregation {
    pub fn new(path: impl Into<String>) -> Self {
        NestedAggregation {
            path: path.into(),
            sub_aggregations: SubAggregations::new(),
            meta: Meta::new(),
        }
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

impl Sealed for NestedAggregation {}

impl Clause for NestedAggregation {
    fn kind(&self) -> &'static str {
        "nested"
    }

    fn to_value(&self) -> Json {
        let body = Body::new().set("path", self.path.as_str());
        aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for NestedAggregation {}

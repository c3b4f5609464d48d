use serde_json::Value as Json;

use crate::clause::{Aggregation, Clause, Meta, Query, Sealed, SubAggregations, aggregation_envelope};

/// A single bucket holding the documents that match a query. The query is
/// fixed at construction and rendered as the aggregation body.
#[derive(Debug)]
pub struct FilterAggregation {
    filter: Box<dyn Query>,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl FilterAggregation {
    pub fn new(filter: impl Query + 'static) -> Self {
        FilterAggregation {
            filter: Box::new(filter),
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

impl Sealed for FilterAggregation {}

impl Clause for FilterAggregation {
    fn kind(&self) -> &'static str {
        "filter"
    }

    fn to_value(&self) -> Json {
        aggregation_envelope(self.kind(), self.filter.to_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for FilterAggregation {}

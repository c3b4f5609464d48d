use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Meta, Sealed, SubAggregations, aggregation_envelope, wrap};
use crate::script::Script;
use crate::value::{SortOrder, Value};

/// One bucket per unique value of a field.
///
/// Bucket ordering keys are kept in the order given. A single ordering is
/// rendered as an object (`{"_count": "desc"}`), several as an array of
/// such objects.
#[derive(Debug, Default)]
pub struct TermsAggregation {
    field: Option<String>,
    script: Option<Script>,
    size: Option<u64>,
    shard_size: Option<u64>,
    min_doc_count: Option<u64>,
    order: Vec<(String, SortOrder)>,
    missing: Option<Value>,
    include: Option<String>,
    exclude: Option<String>,
    sub_aggregations: SubAggregations,
    meta: Meta,
}

impl TermsAggregation {
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

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shard_size(mut self, shard_size: u64) -> Self {
        self.shard_size = Some(shard_size);
        self
    }

    pub fn min_doc_count(mut self, min_doc_count: u64) -> Self {
        self.min_doc_count = Some(min_doc_count);
        self
    }

    /// Adds an ordering key such as `"_count"`, `"_key"` or a sub-aggregation name.
    pub fn order(mut self, key: impl Into<String>, order: SortOrder) -> Self {
        self.order.push((key.into(), order));
        self
    }

    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    /// Regular expression selecting the terms to bucket.
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
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

    fn order_json(&self) -> Option<Json> {
        let mut entries: Vec<Json> = self
            .order
            .iter()
            .map(|(key, order)| wrap(key, Json::from(order.as_str())))
            .collect();
        match entries.len() {
            0 => None,
            1 => entries.pop(),
            _ => Some(Json::Array(entries)),
        }
    }
}

impl Sealed for TermsAggregation {}

impl Clause for TermsAggregation {
    fn kind(&self) -> &'static str {
        "terms"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("field", self.field.as_deref())
            .set_opt("script", self.script.as_ref().map(Script::to_json))
            .set_opt("size", self.size)
            .set_opt("shard_size", self.shard_size)
            .set_opt("min_doc_count", self.min_doc_count)
            .set_opt("order", self.order_json())
            .set_opt("missing", self.missing.as_ref().map(Value::to_json))
            .set_opt("include", self.include.as_deref())
            .set_opt("exclude", self.exclude.as_deref());
        aggregation_envelope(self.kind(), body.into_value(), &self.sub_aggregations, &self.meta)
    }
}

impl Aggregation for TermsAggregation {}

//! Full search request bodies.

use serde_json::Value as Json;

use crate::clause::{Aggregation, Body, Clause, Query, SubAggregations, wrap};
use crate::value::{SortOrder, Value};

/// One sort criterion.
///
/// A criterion with nothing but a field name is rendered as the bare name
/// (`"age"`); any option turns it into `{"age": {...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    field: String,
    order: Option<SortOrder>,
    missing: Option<Value>,
    mode: Option<String>,
}

impl Sort {
    pub fn new(field: impl Into<String>) -> Self {
        Sort {
            field: field.into(),
            order: None,
            missing: None,
            mode: None,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Sort::new(field).order(SortOrder::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Sort::new(field).order(SortOrder::Desc)
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// `"_first"`, `"_last"` or a substitute value.
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    /// How multi-valued fields are reduced: `"min"`, `"max"`, `"sum"`, `"avg"`, `"median"`.
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn to_json(&self) -> Json {
        if self.order.is_none() && self.missing.is_none() && self.mode.is_none() {
            return Json::String(self.field.clone());
        }
        let body = Body::new()
            .set_opt("order", self.order.map(|o| o.as_str()))
            .set_opt("missing", self.missing.as_ref().map(Value::to_json))
            .set_opt("mode", self.mode.as_deref());
        wrap(&self.field, body.into_value())
    }
}

/// Source filtering: `_source: false` or an include list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFilter {
    Enabled(bool),
    Includes(Vec<String>),
}

impl SourceFilter {
    pub fn to_json(&self) -> Json {
        match self {
            SourceFilter::Enabled(enabled) => Json::Bool(*enabled),
            SourceFilter::Includes(fields) => Json::from(fields.clone()),
        }
    }
}

/// The body of a `_search` request: a query, paging, sorting and named
/// top-level aggregations.
///
/// # Examples
///
/// ```
/// use esdsl::{SearchSource, TermQuery, ValueCountAggregation};
/// use serde_json::json;
///
/// let body = SearchSource::new()
///     .query(TermQuery::new("status", "active"))
///     .size(0)
///     .aggregation("ages", ValueCountAggregation::new().field("age"));
///
/// assert_eq!(
///     body.to_value(),
///     json!({
///         "query": {"term": {"status": {"value": "active"}}},
///         "size": 0,
///         "aggregations": {"ages": {"value_count": {"field": "age"}}}
///     })
/// );
/// ```
#[derive(Debug, Default)]
pub struct SearchSource {
    query: Option<Box<dyn Query>>,
    post_filter: Option<Box<dyn Query>>,
    from: Option<u64>,
    size: Option<u64>,
    timeout: Option<String>,
    min_score: Option<f64>,
    track_total_hits: Option<bool>,
    source: Option<SourceFilter>,
    sort: Vec<Sort>,
    aggregations: SubAggregations,
}

impl SearchSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Query + 'static) -> Self {
        self.query = Some(Box::new(query));
        self
    }

    /// Filter applied to hits after aggregations were computed.
    pub fn post_filter(mut self, filter: impl Query + 'static) -> Self {
        self.post_filter = Some(Box::new(filter));
        self
    }

    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Engine time unit string, e.g. `"2s"`.
    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn track_total_hits(mut self, track: bool) -> Self {
        self.track_total_hits = Some(track);
        self
    }

    pub fn fetch_source(mut self, enabled: bool) -> Self {
        self.source = Some(SourceFilter::Enabled(enabled));
        self
    }

    pub fn source_includes<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(SourceFilter::Includes(fields.into_iter().map(Into::into).collect()));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Adds a named top-level aggregation, replacing any earlier one with the same name.
    pub fn aggregation(mut self, name: impl Into<String>, aggregation: impl Aggregation + 'static) -> Self {
        self.aggregations.insert(name, aggregation);
        self
    }

    pub fn to_value(&self) -> Json {
        tracing::trace!(
            has_query = self.query.is_some(),
            sorts = self.sort.len(),
            aggregations = self.aggregations.len(),
            "assembling search body"
        );

        let mut body = Body::new()
            .set_opt("query", self.query.as_ref().map(|q| q.to_value()))
            .set_opt("post_filter", self.post_filter.as_ref().map(|q| q.to_value()))
            .set_opt("from", self.from)
            .set_opt("size", self.size)
            .set_opt("timeout", self.timeout.as_deref())
            .set_opt("min_score", self.min_score)
            .set_opt("track_total_hits", self.track_total_hits)
            .set_opt("_source", self.source.as_ref().map(SourceFilter::to_json));
        if !self.sort.is_empty() {
            body = body.set("sort", self.sort.iter().map(Sort::to_json).collect::<Vec<_>>());
        }
        if !self.aggregations.is_empty() {
            body = body.set("aggregations", self.aggregations.to_value());
        }
        body.into_value()
    }
}

//! The shared capability behind every query and aggregation builder.
//!
//! A clause is a value holder: a few mandatory fields taken by its
//! constructor, a set of independently optional fields filled in by chained
//! setters, and possibly nested clauses. [`Clause::to_value`] turns the
//! current state into the engine's wire shape, emitting only the optional
//! fields that were explicitly set.
//!
//! The set of clause variants is closed: [`Clause`] is sealed, so only the
//! builders in this crate implement it.

use std::fmt;

use serde_json::{Map, Value as Json};

mod sealed {
    pub trait Sealed {}

    impl<T: Sealed + ?Sized> Sealed for Box<T> {}
}

pub(crate) use sealed::Sealed;

/// Opaque key-value pairs attached to an aggregation and echoed back by the
/// engine in the response. Never inspected by this crate.
pub type Meta = Map<String, Json>;

/// Anything that can produce a DSL fragment.
pub trait Clause: fmt::Debug + Sealed {
    /// The clause's wire-format name, e.g. `"fuzzy"` or `"value_count"`.
    fn kind(&self) -> &'static str;

    /// Builds the serialized form. Calling it does not change the clause.
    fn to_value(&self) -> Json;
}

/// A clause usable wherever the DSL expects a query.
pub trait Query: Clause {}

/// A clause usable wherever the DSL expects an aggregation.
pub trait Aggregation: Clause {}

impl<T: Clause + ?Sized> Clause for Box<T> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn to_value(&self) -> Json {
        (**self).to_value()
    }
}

impl<T: Query + ?Sized> Query for Box<T> {}

impl<T: Aggregation + ?Sized> Aggregation for Box<T> {}

/// Insertion-ordered object under construction.
///
/// Keys are written in call order, which is how clause bodies get the key
/// order the engine documents.
#[derive(Debug, Default)]
pub(crate) struct Body(Map<String, Json>);

impl Body {
    pub(crate) fn new() -> Self {
        Body(Map::new())
    }

    pub(crate) fn set(mut self, key: &str, value: impl Into<Json>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn set_opt<T: Into<Json>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub(crate) fn into_value(self) -> Json {
        Json::Object(self.0)
    }
}

/// `{ key: body }`
pub(crate) fn wrap(key: &str, body: Json) -> Json {
    let mut map = Map::new();
    map.insert(key.to_string(), body);
    Json::Object(map)
}

/// Named child aggregations.
///
/// Names are unique: attaching a second aggregation under an existing name
/// replaces the first one in place, so the name keeps its first position.
#[derive(Debug, Default)]
pub struct SubAggregations {
    entries: Vec<(String, Box<dyn Aggregation>)>,
}

impl SubAggregations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, aggregation: impl Aggregation + 'static) {
        let name = name.into();
        let aggregation: Box<dyn Aggregation> = Box::new(aggregation);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = aggregation,
            None => self.entries.push((name, aggregation)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Aggregation> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, agg)| agg.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `{ name: serialized child, ... }` in insertion order.
    pub fn to_value(&self) -> Json {
        let map = self
            .entries
            .iter()
            .map(|(name, agg)| (name.clone(), agg.to_value()))
            .collect();
        Json::Object(map)
    }
}

/// Wraps an aggregation body in the common aggregation envelope:
/// `{ kind: body, "aggregations": {...}, "meta": {...} }`, where the last two
/// keys only appear when non-empty.
pub(crate) fn aggregation_envelope(
    kind: &str,
    body: Json,
    sub_aggregations: &SubAggregations,
    meta: &Meta,
) -> Json {
    let mut result = Body::new().set(kind, body);
    if !sub_aggregations.is_empty() {
        result = result.set("aggregations", sub_aggregations.to_value());
    }
    if !meta.is_empty() {
        result = result.set("meta", Json::Object(meta.clone()));
    }
    result.into_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{AvgAggregation, ValueCountAggregation};
    use serde_json::json;

    #[test]
    fn body_skips_unset_options() {
        let body = Body::new()
            .set("field", "age")
            .set_opt::<String>("format", None)
            .set_opt("size", Some(0))
            .into_value();
        assert_eq!(body, json!({"field": "age", "size": 0}));
    }

    #[test]
    fn body_preserves_call_order() {
        let body = Body::new().set("z", 1).set("a", 2).set("m", 3).into_value();
        assert_eq!(body.to_string(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn sub_aggregations_overwrite_in_place() {
        let mut subs = SubAggregations::new();
        subs.insert("first", ValueCountAggregation::new().field("a"));
        subs.insert("second", AvgAggregation::new().field("b"));
        subs.insert("first", ValueCountAggregation::new().field("c"));

        assert_eq!(subs.len(), 2);
        assert_eq!(subs.names().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(
            subs.get("first").map(|agg| agg.to_value()),
            Some(json!({"value_count": {"field": "c"}}))
        );
    }

    #[test]
    fn envelope_omits_empty_children_and_meta() {
        let value = aggregation_envelope(
            "value_count",
            json!({"field": "age"}),
            &SubAggregations::new(),
            &Meta::new(),
        );
        assert_eq!(value, json!({"value_count": {"field": "age"}}));
    }

    #[test]
    fn boxed_clause_forwards() {
        let boxed: Box<dyn Aggregation> = Box::new(ValueCountAggregation::new().field("age"));
        assert_eq!(boxed.kind(), "value_count");
        assert_eq!(boxed.to_value(), json!({"value_count": {"field": "age"}}));
    }
}

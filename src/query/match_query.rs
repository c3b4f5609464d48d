use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::value::{Fuzziness, MinimumShouldMatch, Value};

/// Standard full-text query: the text is analyzed and matched against the
/// field's terms.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    field: String,
    query: Value,
    operator: Option<String>,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    prefix_length: Option<u32>,
    max_expansions: Option<u32>,
    minimum_should_match: Option<MinimumShouldMatch>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl MatchQuery {
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        MatchQuery {
            field: field.into(),
            query: query.into(),
            operator: None,
            analyzer: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            minimum_should_match: None,
            boost: None,
            query_name: None,
        }
    }

    /// `"or"` or `"and"`.
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn minimum_should_match(mut self, minimum: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(minimum.into());
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

impl Sealed for MatchQuery {}

impl Clause for MatchQuery {
    fn kind(&self) -> &'static str {
        "match"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("query", self.query.to_json())
            .set_opt("operator", self.operator.as_deref())
            .set_opt("analyzer", self.analyzer.as_deref())
            .set_opt("fuzziness", self.fuzziness.as_ref().map(Fuzziness::to_json))
            .set_opt("prefix_length", self.prefix_length)
            .set_opt("max_expansions", self.max_expansions)
            .set_opt(
                "minimum_should_match",
                self.minimum_should_match.as_ref().map(MinimumShouldMatch::to_json),
            )
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), wrap(&self.field, body.into_value()))
    }
}

impl Query for MatchQuery {}

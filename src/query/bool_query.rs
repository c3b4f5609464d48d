use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::value::MinimumShouldMatch;

/// Combines other queries with boolean occurrence rules.
///
/// - `must`: has to match, contributes to the score
/// - `filter`: has to match, no scoring
/// - `should`: may match, adds to the score
/// - `must_not`: must not match, no scoring
///
/// Each list keeps the order in which clauses were added, and an empty list
/// is left out of the output.
#[derive(Debug, Default)]
pub struct BoolQuery {
    must: Vec<Box<dyn Query>>,
    filter: Vec<Box<dyn Query>>,
    should: Vec<Box<dyn Query>>,
    must_not: Vec<Box<dyn Query>>,
    minimum_should_match: Option<MinimumShouldMatch>,
    boost: Option<f64>,
    query_name: Option<String>,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must(mut self, query: impl Query + 'static) -> Self {
        self.must.push(Box::new(query));
        self
    }

    pub fn filter(mut self, query: impl Query + 'static) -> Self {
        self.filter.push(Box::new(query));
        self
    }

    pub fn should(mut self, query: impl Query + 'static) -> Self {
        self.should.push(Box::new(query));
        self
    }

    pub fn must_not(mut self, query: impl Query + 'static) -> Self {
        self.must_not.push(Box::new(query));
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

fn clause_list(queries: &[Box<dyn Query>]) -> Option<Json> {
    if queries.is_empty() {
        return None;
    }
    Some(Json::Array(queries.iter().map(|q| q.to_value()).collect()))
}

impl Sealed for BoolQuery {}

impl Clause for BoolQuery {
    fn kind(&self) -> &'static str {
        "bool"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set_opt("must", clause_list(&self.must))
            .set_opt("filter", clause_list(&self.filter))
            .set_opt("should", clause_list(&self.should))
            .set_opt("must_not", clause_list(&self.must_not))
            .set_opt(
                "minimum_should_match",
                self.minimum_should_match.as_ref().map(MinimumShouldMatch::to_json),
            )
            .set_opt("boost", self.boost)
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), body.into_value())
    }
}

impl Query for BoolQuery {}

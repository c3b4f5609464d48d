use serde_json::Value as Json;

use crate::clause::{Body, Clause, Query, Sealed, wrap};
use crate::value::{Fuzziness, Value};

/// Matches terms within an edit distance of the given value.
///
/// String fields use Levenshtein distance; numeric and date fields use a
/// +/- margin. See the engine's `fuzzy` query reference.
///
/// # Wire format
///
/// ```text
/// {"fuzzy": {<field>: {"value": .., "boost": .., "transpositions": ..,
///   "fuzziness": .., "prefix_length": .., "max_expansions": ..,
///   "rewrite": .., "_name": ..}}}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyQuery {
    field: String,
    value: Value,
    boost: Option<f64>,
    transpositions: Option<bool>,
    fuzziness: Option<Fuzziness>,
    prefix_length: Option<u32>,
    max_expansions: Option<u32>,
    rewrite: Option<String>,
    query_name: Option<String>,
}

impl FuzzyQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        FuzzyQuery {
            field: field.into(),
            value: value.into(),
            boost: None,
            transpositions: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            rewrite: None,
            query_name: None,
        }
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Accepts an edit distance (`0`, `1`, `2`) or a string such as
    /// `"AUTO"`, `"0..1"` or `"0.0..1.0"`.
    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    /// Number of leading characters that must match exactly.
    pub fn prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Whether swapping two adjacent characters counts as a single edit.
    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = Some(transpositions);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }
}

impl Sealed for FuzzyQuery {}

impl Clause for FuzzyQuery {
    fn kind(&self) -> &'static str {
        "fuzzy"
    }

    fn to_value(&self) -> Json {
        let body = Body::new()
            .set("value", self.value.to_json())
            .set_opt("boost", self.boost)
            .set_opt("transpositions", self.transpositions)
            .set_opt("fuzziness", self.fuzziness.as_ref().map(Fuzziness::to_json))
            .set_opt("prefix_length", self.prefix_length)
            .set_opt("max_expansions", self.max_expansions)
            .set_opt("rewrite", self.rewrite.as_deref())
            .set_opt("_name", self.query_name.as_deref());
        wrap(self.kind(), wrap(&self.field, body.into_value()))
    }
}

impl Query for FuzzyQuery {}

use serde_json::Value as Json;

use crate::clause::Body;
use crate::search::Sort;

/// Requests the nested or child documents that caused a joining query to
/// match, returned alongside each hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InnerHits {
    name: Option<String>,
    from: Option<u64>,
    size: Option<u64>,
    sort: Vec<Sort>,
}

impl InnerHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which the inner hits appear in the response.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn to_json(&self) -> Json {
        let mut body = Body::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("from", self.from)
            .set_opt("size", self.size);
        if !self.sort.is_empty() {
            body = body.set("sort", self.sort.iter().map(Sort::to_json).collect::<Vec<_>>());
        }
        body.into_value()
    }
}

use serde_json::Value as Json;

use crate::clause::{Body, Meta};

/// An inline script, used by aggregations that compute their values instead
/// of reading a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    source: String,
    lang: Option<String>,
    params: Meta,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Script {
            source: source.into(),
            lang: None,
            params: Meta::new(),
        }
    }

    /// Script language, e.g. `"painless"`. The engine default applies when unset.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn params(mut self, params: Meta) -> Self {
        self.params = params;
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Json>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn to_json(&self) -> Json {
        let mut body = Body::new()
            .set("source", self.source.as_str())
            .set_opt("lang", self.lang.as_deref());
        if !self.params.is_empty() {
            body = body.set("params", Json::Object(self.params.clone()));
        }
        body.into_value()
    }
}

impl From<&str> for Script {
    fn from(source: &str) -> Self {
        Script::new(source)
    }
}

impl From<String> for Script {
    fn from(source: String) -> Self {
        Script::new(source)
    }
}

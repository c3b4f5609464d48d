/// A scalar term value carried by term-level queries.
///
/// Integers and floats are kept apart so the representation the caller
/// picked is the one that reaches the wire: `Value::Integer(1)` renders as
/// `1`, `Value::Float(1.0)` as `1.0`.
///
/// # Examples
///
/// ```
/// use esdsl::Value;
///
/// let boolean = Value::from(true);
/// let integer = Value::from(42);
/// let float = Value::from(2.5);
/// let string = Value::from("hello");
///
/// assert_eq!(integer, Value::Integer(42));
/// assert_eq!(string.to_json(), serde_json::json!("hello"));
/// # let _ = (boolean, float);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),
}

impl Value {
    /// Converts to the wire representation.
    ///
    /// Non-finite floats have no JSON form and render as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Edit-distance or numeric-margin tolerance for approximate matching.
///
/// The engine accepts both an integer (`0`, `1`, `2`) and strings such as
/// `"AUTO"`, `"AUTO:3,6"`, `"0..1"` or `"0.0..1.0"`. Neither form is
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fuzziness {
    /// Fixed edit distance
    Distance(i64),
    /// Textual form, passed through verbatim
    Text(String),
}

impl Fuzziness {
    /// Shorthand for `Fuzziness::Text("AUTO")`.
    pub fn auto() -> Self {
        Fuzziness::Text("AUTO".to_string())
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Fuzziness::Distance(d) => serde_json::Value::Number((*d).into()),
            Fuzziness::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<i64> for Fuzziness {
    fn from(d: i64) -> Self {
        Fuzziness::Distance(d)
    }
}

impl From<i32> for Fuzziness {
    fn from(d: i32) -> Self {
        Fuzziness::Distance(i64::from(d))
    }
}

impl From<&str> for Fuzziness {
    fn from(s: &str) -> Self {
        Fuzziness::Text(s.to_string())
    }
}

impl From<String> for Fuzziness {
    fn from(s: String) -> Self {
        Fuzziness::Text(s)
    }
}

/// Either an absolute clause count or a textual form like `"75%"` or `"3<90%"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimumShouldMatch {
    Count(i64),
    Text(String),
}

impl MinimumShouldMatch {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            MinimumShouldMatch::Count(n) => serde_json::Value::Number((*n).into()),
            MinimumShouldMatch::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<i64> for MinimumShouldMatch {
    fn from(n: i64) -> Self {
        MinimumShouldMatch::Count(n)
    }
}

impl From<i32> for MinimumShouldMatch {
    fn from(n: i32) -> Self {
        MinimumShouldMatch::Count(i64::from(n))
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(s: &str) -> Self {
        MinimumShouldMatch::Text(s.to_string())
    }
}

impl From<String> for MinimumShouldMatch {
    fn from(s: String) -> Self {
        MinimumShouldMatch::Text(s)
    }
}

/// Sort direction for search hits and bucket ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

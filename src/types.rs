use std::borrow::Cow;
use std::collections::HashSet;
use serde::Serialize;
use serde_json::Value;
use crate::error::{Result, SearchError};
use crate::matcher::number_text;

/// The value being searched for.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Anything without a primitive form (null, arrays, objects). Matches no node.
    Unrecognized,
}

impl Query {
    /// Parses a JSON literal (`true`, `25`, `"abc"`) into a query.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(SearchError::InvalidQuery)?;
        Ok(Self::from(&value))
    }

    /// Textual form used when types are ignored. `Unrecognized` has none.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Query::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Query::Number(n) => Some(Cow::Owned(number_text(*n))),
            Query::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Query::Unrecognized => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Query::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Query {
    fn from(b: bool) -> Self {
        Query::Bool(b)
    }
}

impl From<f64> for Query {
    fn from(n: f64) -> Self {
        Query::Number(n)
    }
}

impl From<i64> for Query {
    fn from(n: i64) -> Self {
        Query::Number(n as f64)
    }
}

impl From<i32> for Query {
    fn from(n: i32) -> Self {
        Query::Number(f64::from(n))
    }
}

impl From<u64> for Query {
    fn from(n: u64) -> Self {
        Query::Number(n as f64)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::Text(s.to_string())
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::Text(s)
    }
}

impl From<&Value> for Query {
    fn from(v: &Value) -> Self {
        match v {
            Value::Bool(b) => Query::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Query::Unrecognized, Query::Number),
            Value::String(s) => Query::Text(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => Query::Unrecognized,
        }
    }
}

/// What matched: a node of the tree, or a mapping key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Hit<'a> {
    Value(&'a Value),
    Key(&'a str),
}

/// One collected match. Borrows from the searched tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch<'a> {
    pub value: Hit<'a>,
    /// Enclosing sequence or mapping, or the root itself at layer 0.
    pub parent: &'a Value,
    pub layer: usize,
    /// JSON pointer of the matched node; for key hits, of the entry the key names.
    pub pointer: String,
}

/// Reserved exclusion set for `filter_search`. Accepted, never consulted.
pub type Whitelist = HashSet<String>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_from_json_literals() {
        assert_eq!(Query::from_json("true").unwrap(), Query::Bool(true));
        assert_eq!(Query::from_json("25").unwrap(), Query::Number(25.0));
        assert_eq!(Query::from_json(r#""abc""#).unwrap(), Query::Text("abc".into()));
        assert_eq!(Query::from_json("[1]").unwrap(), Query::Unrecognized);
        assert!(Query::from_json("{nope").is_err());
    }

    #[test]
    fn text_forms() {
        assert_eq!(Query::from(true).to_text().as_deref(), Some("true"));
        assert_eq!(Query::from(25).to_text().as_deref(), Some("25"));
        assert_eq!(Query::from(2.5).to_text().as_deref(), Some("2.5"));
        assert_eq!(Query::Unrecognized.to_text(), None);
    }

    #[test]
    fn hits_serialize_untagged() {
        let v = json!(3);
        let m = SearchMatch { value: Hit::Value(&v), parent: &v, layer: 0, pointer: String::new() };
        let out = serde_json::to_value(&m).unwrap();
        assert_eq!(out, json!({ "value": 3, "parent": 3, "layer": 0, "pointer": "" }));
        assert_eq!(serde_json::to_value(Hit::Key("a")).unwrap(), json!("a"));
    }
}

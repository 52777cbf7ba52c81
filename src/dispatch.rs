use serde_json::{Map, Number, Value};
use crate::config::SearchOptions;
use crate::matcher::{match_bool, match_number, match_text};
use crate::types::Query;

/// Closed set of node kinds the traversers know how to handle.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Boolean(bool),
    Number(&'a Number),
    Text(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    Unrecognized,
}

pub fn classify(node: &Value) -> NodeKind<'_> {
    match node {
        Value::Bool(b) => NodeKind::Boolean(*b),
        Value::Number(n) => NodeKind::Number(n),
        Value::String(s) => NodeKind::Text(s),
        Value::Array(items) => NodeKind::Sequence(items),
        Value::Object(map) => NodeKind::Mapping(map),
        Value::Null => NodeKind::Unrecognized,
    }
}

/// Runs the matcher for primitive kinds. `None` for containers, which the
/// caller must walk itself; unrecognized nodes never match.
pub fn match_primitive(query: &Query, kind: NodeKind<'_>, opts: &SearchOptions) -> Option<bool> {
    match kind {
        NodeKind::Boolean(b) => Some(match_bool(query, b, opts)),
        NodeKind::Number(n) => Some(match_number(query, n, opts)),
        NodeKind::Text(s) => Some(match_text(query, s, opts)),
        NodeKind::Unrecognized => {
            log::trace!("skipping unrecognized node");
            Some(false)
        }
        NodeKind::Sequence(_) | NodeKind::Mapping(_) => None,
    }
}

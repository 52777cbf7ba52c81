//! Per-kind predicates deciding whether a query matches a primitive node.
//!
//! All three are pure and total: a query of the wrong kind simply does not match.

use serde_json::Number;
use crate::config::SearchOptions;
use crate::types::Query;

/// Decimal form of a number, shortest round-trip like JavaScript's `String(n)`:
/// integral floats drop the fraction, exponents appear outside `[1e-6, 1e21)`.
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if n == 0.0 {
        return "0".into();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

pub fn node_number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        number_text(n.as_f64().unwrap_or(f64::NAN))
    }
}

pub fn match_bool(query: &Query, node: bool, opts: &SearchOptions) -> bool {
    if opts.ignore_type {
        let node_text = if node { "true" } else { "false" };
        query.as_text() == Some(node_text)
    } else {
        *query == Query::Bool(node)
    }
}

/// Exact identity and containment are independent: either one is enough.
pub fn match_number(query: &Query, node: &Number, opts: &SearchOptions) -> bool {
    let node_value = node.as_f64();
    let exact = opts.match_exact && matches!(query, Query::Number(q) if Some(*q) == node_value);
    if exact {
        return true;
    }

    let node_text = node_number_text(node);
    if opts.ignore_type {
        query.to_text().is_some_and(|q| node_text.contains(&*q))
    } else {
        match query {
            Query::Number(q) => node_text.contains(&number_text(*q)),
            _ => false,
        }
    }
}

/// Exact mode compares the original strings, before any case folding.
pub fn match_text(query: &Query, node: &str, opts: &SearchOptions) -> bool {
    if opts.match_exact {
        return query.as_text() == Some(node);
    }

    let node_norm = if opts.ignore_case { node.to_lowercase() } else { node.to_string() };
    if opts.ignore_type {
        let Some(q) = query.to_text() else { return false };
        let q = match query {
            Query::Text(_) if opts.ignore_case => q.to_lowercase(),
            _ => q.into_owned(),
        };
        node_norm.contains(&q)
    } else {
        match query.as_text() {
            Some(q) if opts.ignore_case => node_norm.contains(&q.to_lowercase()),
            Some(q) => node_norm.contains(q),
            None => false,
        }
    }
}

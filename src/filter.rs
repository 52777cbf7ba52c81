//! Short-circuit traversal: answers "is the query somewhere in here?" and
//! reports each hit through a callback instead of collecting records.
//!
//! By default a container is judged by its first entry only (the first
//! mapping key, or the first sequence element). `SearchOptions::full_scan`
//! walks all entries and stops at the first one that matches.

use serde_json::{Map, Value};
use crate::config::SearchOptions;
use crate::dispatch::{classify, match_primitive, NodeKind};
use crate::matcher::match_text;
use crate::types::{Query, Whitelist};

/// Runs the short-circuit search over `tree`, calling `on_match(query)` once
/// for every visited node whose subtree produced a match.
///
/// `whitelist` is accepted for future filtering and is not consulted.
pub fn filter_search<F>(query: &Query, tree: &Value, mut on_match: F, opts: &SearchOptions, whitelist: Option<&Whitelist>)
where
    F: FnMut(&Query),
{
    let found = visit(query, tree, &mut on_match, opts, whitelist);
    log::debug!("filter search done: matched={}", found);
}

fn visit<F>(query: &Query, node: &Value, on_match: &mut F, opts: &SearchOptions, whitelist: Option<&Whitelist>) -> bool
where
    F: FnMut(&Query),
{
    let kind = classify(node);
    let found = match kind {
        NodeKind::Mapping(map) => visit_mapping(query, map, on_match, opts, whitelist),
        NodeKind::Sequence(items) => visit_sequence(query, items, on_match, opts, whitelist),
        primitive => match_primitive(query, primitive, opts).unwrap_or(false),
    };
    if found {
        on_match(query);
    }
    found
}

fn visit_mapping<F>(query: &Query, map: &Map<String, Value>, on_match: &mut F, opts: &SearchOptions, whitelist: Option<&Whitelist>) -> bool
where
    F: FnMut(&Query),
{
    if !opts.full_scan {
        return match map.iter().next() {
            Some((key, _)) if !opts.ignore_keys => match_text(query, key, opts),
            Some((_, value)) => visit(query, value, on_match, opts, whitelist),
            None => false,
        };
    }

    map.iter().any(|(key, value)| {
        (!opts.ignore_keys && match_text(query, key, opts)) || visit(query, value, on_match, opts, whitelist)
    })
}

fn visit_sequence<F>(query: &Query, items: &[Value], on_match: &mut F, opts: &SearchOptions, whitelist: Option<&Whitelist>) -> bool
where
    F: FnMut(&Query),
{
    if !opts.full_scan {
        return items
            .first()
            .is_some_and(|first| visit(query, first, on_match, opts, whitelist));
    }

    items.iter().any(|item| visit(query, item, on_match, opts, whitelist))
}

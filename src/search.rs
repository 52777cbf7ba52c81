use rayon::prelude::*;
use serde_json::Value;
use crate::config::SearchOptions;
use crate::dispatch::{classify, match_primitive, NodeKind};
use crate::matcher::match_text;
use crate::tree::{child_pointer, index_pointer};
use crate::types::{Hit, Query, SearchMatch};

// Pending work for the traversal stack. Keys are queued separately so they are
// visited right before the value they name.
enum Frame<'a> {
    Node { value: &'a Value, parent: &'a Value, layer: usize, pointer: String },
    Key { key: &'a str, parent: &'a Value, layer: usize, pointer: String },
}

/// Collects every node (and mapping key) of `tree` matching `query`.
///
/// Results come back in depth-first pre-order, following the tree's own
/// key/element order. Keys and values of a mapping sit one layer below the
/// mapping; elements of a sequence share the sequence's layer.
pub fn search<'a>(query: &Query, tree: &'a Value, opts: &SearchOptions) -> Vec<SearchMatch<'a>> {
    log::debug!("search start: query={:?} options={:?}", query, opts);
    let mut results = Vec::new();
    // Explicit stack instead of recursion so deep documents cannot overflow.
    // Children are pushed in reverse to pop in natural order.
    let mut stack = vec![Frame::Node { value: tree, parent: tree, layer: 0, pointer: String::new() }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Key { key, parent, layer, pointer } => {
                if match_text(query, key, opts) {
                    results.push(SearchMatch { value: Hit::Key(key), parent, layer, pointer });
                }
            }
            Frame::Node { value, parent, layer, pointer } => match classify(value) {
                NodeKind::Mapping(map) => {
                    for (key, child) in map.iter().rev() {
                        let child_ptr = child_pointer(&pointer, key);
                        stack.push(Frame::Node { value: child, parent: value, layer: layer + 1, pointer: child_ptr.clone() });
                        if !opts.ignore_keys {
                            stack.push(Frame::Key { key, parent: value, layer: layer + 1, pointer: child_ptr });
                        }
                    }
                }
                NodeKind::Sequence(items) => {
                    for (index, item) in items.iter().enumerate().rev() {
                        stack.push(Frame::Node { value: item, parent: value, layer, pointer: index_pointer(&pointer, index) });
                    }
                }
                kind => {
                    if match_primitive(query, kind, opts) == Some(true) {
                        results.push(SearchMatch { value: Hit::Value(value), parent, layer, pointer });
                    }
                }
            },
        }
    }

    log::debug!("search done: {} matches", results.len());
    results
}

/// Searches several independent documents in parallel. Output order follows `trees`.
pub fn search_all<'a>(query: &Query, trees: &'a [Value], opts: &SearchOptions) -> Vec<Vec<SearchMatch<'a>>> {
    log::debug!("batch search over {} documents", trees.len());
    trees
        .par_iter()
        .map(|tree| search(query, tree, opts))
        .collect()
}

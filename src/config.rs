use serde::{Deserialize, Serialize};
use crate::error::{Result, SearchError};

/// Matching switches for one search call. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Lower-case text nodes (and keys) before containment checks.
    pub ignore_case: bool,
    /// Compare textual representations across primitive kinds ("true" finds `true`, "5" finds `25`).
    pub ignore_type: bool,
    /// Do not test mapping keys, only their values.
    pub ignore_keys: bool,
    /// Identity instead of containment for text; extra identity path for numbers.
    pub match_exact: bool,
    /// Let `filter_search` walk every entry of a container instead of only the first one.
    pub full_scan: bool,
}

impl SearchOptions {
    /// Parses options from JSON text such as `{"ignoreCase": true}`.
    /// Missing keys fall back to `false`; a bare `null` yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: Option<Self> = serde_json::from_str(raw).map_err(SearchError::InvalidOptions)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn ignore_case(mut self, on: bool) -> Self {
        self.ignore_case = on;
        self
    }

    pub fn ignore_type(mut self, on: bool) -> Self {
        self.ignore_type = on;
        self
    }

    pub fn ignore_keys(mut self, on: bool) -> Self {
        self.ignore_keys = on;
        self
    }

    pub fn match_exact(mut self, on: bool) -> Self {
        self.match_exact = on;
        self
    }

    pub fn full_scan(mut self, on: bool) -> Self {
        self.full_scan = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let opts = SearchOptions::default();
        assert!(!opts.ignore_case && !opts.ignore_type && !opts.ignore_keys && !opts.match_exact && !opts.full_scan);
    }

    #[test]
    fn parses_camel_case_keys() {
        let opts = SearchOptions::from_json(r#"{"ignoreCase": true, "matchExact": true}"#).unwrap();
        assert_eq!(opts, SearchOptions::default().ignore_case(true).match_exact(true));
    }

    #[test]
    fn null_means_defaults() {
        assert_eq!(SearchOptions::from_json("null").unwrap(), SearchOptions::default());
    }

    #[test]
    fn rejects_non_boolean_flags() {
        let err = SearchOptions::from_json(r#"{"ignoreKeys": "yes"}"#).unwrap_err();
        assert!(matches!(err, SearchError::InvalidOptions(_)));
    }
}

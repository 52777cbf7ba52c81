//! Deep, type-aware value search over JSON trees.
//!
//! Two entry points share one matcher layer:
//! - [`search`] walks the whole tree and collects every match with its parent and layer
//! - [`filter_search`] short-circuits and reports hits through a callback

pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod search;
pub mod tree;
pub mod types;

// Re-export main types
pub use config::SearchOptions;
pub use error::{Result, SearchError};
pub use filter::filter_search;
pub use search::{search, search_all};
pub use types::{Hit, Query, SearchMatch, Whitelist};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("Invalid query literal: {0}")]
    InvalidQuery(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

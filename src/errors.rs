use thiserror::Error;

/// Failure reasons along the fetch → extract → cache path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotListError {
    /// Upstream unreachable, timed out, or answered with a non-success status
    #[error("Upstream request failed: {0}")]
    Network(String),

    /// State blob missing or malformed
    #[error("Failed to parse page state: {0}")]
    Parse(String),

    /// A single hot-rank item could not be resolved; aborts the batch
    #[error("Item {id} is missing {field}")]
    Item { id: String, field: &'static str },

    #[error("Cache error: {0}")]
    Cache(String),
}

//! Error types returned by the network API.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// A node index outside `0..size` was passed to an index-based query.
    #[error("invalid node index {index}: network has {size} nodes")]
    InvalidIndex { index: usize, size: usize },

    /// A label that isn't part of the network was passed to a label-based query.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The requested ranking isn't one of the supported centrality measures.
    #[error("unsupported ranking type: {0:?} (expected degree, closeness, globalreach or eigenvector)")]
    UnsupportedRanking(String),

    /// Power iteration didn't settle within the configured iteration budget.
    #[error("eigenvector centrality did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    /// The edge table header lacks one of the required columns.
    #[error("edge table is missing the {0:?} column")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

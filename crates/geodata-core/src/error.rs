// crates/geodata-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset or building a [`crate::GeoDb`].
///
/// Queries never produce these: a missing match is `None` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A dataset file or directory does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The collections were readable but structurally unusable.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;

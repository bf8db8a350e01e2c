//! Error types for the Binder engine.

use thiserror::Error;

/// All possible errors from the Binder engine.
#[derive(Debug, Error)]
pub enum Error {
    // Lookup errors
    #[error("card not found: {id}")]
    NotFound { id: String },

    #[error("lookup service failure: {0}")]
    Service(String),

    // Key errors
    #[error("malformed card key: '{0}'")]
    MalformedKey(String),

    #[error("unknown variant: '{0}'")]
    UnknownVariant(String),

    // Codec errors
    #[error("unrecognized header: expected 2 or 4 columns, got {0}")]
    UnrecognizedHeader(usize),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    // File errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

use crate::ValidationErrors;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document text is not well-formed JSON.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Failures of whatever supplies the document text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("could not read fixture {} ({message})", .path.display())]
    Fixture { path: PathBuf, message: String },

    #[error("could not create HTTP client ({0})")]
    Client(String),

    #[error("could not send request ({0})")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("throttled by API")]
    Throttling,

    #[error("network not found")]
    NotFound,
}

impl From<crate::ValidationError> for Error {
    fn from(err: crate::ValidationError) -> Self {
        Error::Validation(err.into())
    }
}

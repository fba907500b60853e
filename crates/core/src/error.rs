//! Error types for the graphics state engine.

use thiserror::Error;

/// Primary error type for numeric classification and state stack operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    #[error("unbalanced graphics state stack: restore without matching save")]
    UnbalancedStateStack,

    #[error("graphics state stack overflow: more than {limit} nested saves")]
    StackOverflow { limit: usize },
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;

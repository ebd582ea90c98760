//! Error types for autocommit-core

/// Errors specific to autocommit-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed status line {line_no}: {line:?}")]
    MalformedStatusLine { line_no: usize, line: String },

    #[error("Unterminated quoted path in status line {line_no}: {line:?}")]
    UnterminatedQuote { line_no: usize, line: String },
}

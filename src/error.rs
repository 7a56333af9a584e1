//! Error types for dsvclip

use thiserror::Error;

/// Result type alias using [`ClipError`]
pub type Result<T> = std::result::Result<T, ClipError>;

/// Errors surfaced to the hosting UI
///
/// Only genuinely caller-facing failures live here. The detector, parser,
/// and session codec never fail: malformed input degrades to an empty
/// result and a corrupt session payload decodes to "no prior state".
#[derive(Error, Debug)]
pub enum ClipError {
    /// Pasted text produced no data rows (the first row is the header)
    #[error("no data rows found (is the first row a header?)")]
    NoRows,

    /// Delimiter choice string was not `auto` or one of the candidates
    #[error("unknown delimiter choice: {0:?}")]
    UnknownDelimiter(String),
}

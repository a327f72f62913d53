//! Error types for Folio Core
//!
//! Content conversion in this crate is total: malformed input degrades
//! to safe defaults instead of failing. The only fallible surface is
//! decoding a whole note document from JSON.

use thiserror::Error;

/// Result type alias using NoteError
pub type Result<T> = std::result::Result<T, NoteError>;

/// Errors for document-level operations
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Invalid note document: {0}")]
    Document(#[from] serde_json::Error),
}

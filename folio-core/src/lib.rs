//! Folio Core Library
//!
//! This crate provides the document content model for the Folio note
//! manager: a note body is an ordered sequence of typed content blocks,
//! kept consistent with two external surfaces by a pair of converters.
//!
//! - The **markdown path** ([`parse_markdown`] / [`emit_markdown`])
//!   round-trips a note through flat text for import/export and legacy
//!   storage.
//! - The **wire path** ([`normalize_content`] / [`serialize_content`]
//!   and the [`wire`] batch helpers) moves blocks across the
//!   persistence API as flat content strings.
//!
//! Content operations are total: malformed input degrades to safe
//! defaults so one corrupt block never makes a document unloadable.

pub mod error;
pub mod ids;
pub mod markdown;
pub mod text;
pub mod types;
pub mod wire;

pub use error::{NoteError, Result};
pub use ids::{Clock, IdProvider, SystemClock, UuidIds};
pub use markdown::{emit_markdown, parse_markdown, MarkdownParser};
pub use text::{block_text, full_text, preview, validate_block};
pub use types::{
    Block, BlockContent, BlockKind, NoteContent, TodoItem, WireEncoding, NOTE_VERSION,
};
pub use wire::{
    default_content, dehydrate_block, hydrate_block, hydrate_blocks, normalize_content,
    serialize_content, validate_raw_content, WireBlock,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = NoteContent::new();
        assert!(note.blocks.is_empty());
        assert_eq!(note.version, NOTE_VERSION);
    }
}

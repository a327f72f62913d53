//! Core types for the Folio block content model

mod block;
mod note;

pub use block::{
    BlockContent, BlockKind, TodoItem, WireEncoding, DEFAULT_CALLOUT_ICON, DEFAULT_CODE_LANGUAGE,
    DEFAULT_DIVIDER_STYLE,
};
pub use note::{Block, NoteContent, NOTE_VERSION};

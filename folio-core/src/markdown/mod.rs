//! Flat-text (markdown-like) converters for import/export and legacy
//! storage. The wire converters in [`crate::wire`] are the primary
//! storage path; this surface exists for round-tripping user-visible
//! text.

mod emitter;
mod parser;

pub use emitter::emit_markdown;
pub use parser::{parse_markdown, MarkdownParser};

//! Markdown emitter: ordered blocks back into flat text
//!
//! One textual rule per kind, joined with blank lines. Kinds outside
//! the rule table render a fixed placeholder comment; the text path is
//! a legacy/export surface and is intentionally lossy for them.

use crate::types::{Block, BlockContent, NoteContent};

/// Placeholder written for kinds the text surface cannot represent.
const OMITTED_PLACEHOLDER: &str = "<!-- block omitted -->";

/// Render a note to flat text.
pub fn emit_markdown(note: &NoteContent) -> String {
    note.blocks
        .iter()
        .map(render_block)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block) -> String {
    match &block.content {
        BlockContent::Text { text } => text.clone(),
        BlockContent::Heading { text, level } => {
            format!("{} {}", "#".repeat(usize::from(*level)), text)
        }
        BlockContent::Quote { text, .. } => format!("> {}", text),
        BlockContent::Code { code, language } => {
            format!("```{}\n{}\n```", language, code)
        }
        BlockContent::Image { url, description } => {
            format!("![{}]({})", description.as_deref().unwrap_or(""), url)
        }
        BlockContent::Link { url, title, .. } => {
            format!("[{}]({})", title.as_deref().unwrap_or(""), url)
        }
        BlockContent::Checkpoint { checkpoint_id } => {
            if checkpoint_id.is_empty() {
                String::new()
            } else {
                format!("<!-- CHECKPOINT_MARKER:{} -->", checkpoint_id)
            }
        }
        BlockContent::BulletedList { .. }
        | BlockContent::NumberedList { .. }
        | BlockContent::TodoList { .. }
        | BlockContent::Callout { .. }
        | BlockContent::Divider { .. }
        | BlockContent::Table { .. }
        | BlockContent::ImageGallery { .. }
        | BlockContent::Custom { .. } => OMITTED_PLACEHOLDER.to_string(),
    }
}

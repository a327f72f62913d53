//! Block validation and text projections
//!
//! `validate_block` is the structural filter used when hydrating
//! batches; `preview` feeds list/search UIs; `full_text` builds the
//! searchable text for a whole document.

use crate::types::{Block, BlockContent};

/// Structural check: the kind tag agrees with the content variant and
/// kind-specific constraints hold. Callers filtering a batch drop the
/// blocks this rejects.
pub fn validate_block(block: &Block) -> bool {
    if block.kind != block.content.kind() {
        return false;
    }
    match &block.content {
        BlockContent::Heading { level, .. } => (1..=6).contains(level),
        BlockContent::Image { url, .. } => !url.is_empty(),
        BlockContent::Link { url, .. } => !url.is_empty(),
        BlockContent::BulletedList { items } => !items.is_empty(),
        BlockContent::NumberedList { items } => !items.is_empty(),
        BlockContent::TodoList { items } => !items.is_empty(),
        BlockContent::Checkpoint { checkpoint_id } => !checkpoint_id.is_empty(),
        BlockContent::Text { .. }
        | BlockContent::Quote { .. }
        | BlockContent::Code { .. }
        | BlockContent::Callout { .. }
        | BlockContent::Divider { .. }
        | BlockContent::Table { .. }
        | BlockContent::ImageGallery { .. }
        | BlockContent::Custom { .. } => true,
    }
}

/// Short human-readable summary of a block, truncated to `max_length`
/// characters with an ellipsis. Total; every kind has a label.
pub fn preview(block: &Block, max_length: usize) -> String {
    let summary = match &block.content {
        BlockContent::Text { text } => text.clone(),
        BlockContent::Heading { text, .. } => text.clone(),
        BlockContent::Quote { text, .. } => text.clone(),
        BlockContent::Code { language, .. } => format!("💻 {}", language),
        BlockContent::Image { url, description } => {
            format!("🖼️ {}", description.as_deref().unwrap_or(url))
        }
        BlockContent::Link { url, title, .. } => {
            format!("🔗 {}", title.as_deref().unwrap_or(url))
        }
        BlockContent::BulletedList { items } => {
            format!("• {}", items.first().map(String::as_str).unwrap_or(""))
        }
        BlockContent::NumberedList { items } => {
            format!("1. {}", items.first().map(String::as_str).unwrap_or(""))
        }
        BlockContent::TodoList { items } => {
            let done = items.iter().filter(|item| item.checked).count();
            format!("☑️ {}/{}", done, items.len())
        }
        BlockContent::Callout { text, icon } => format!("{} {}", icon, text),
        BlockContent::Divider { .. } => "---".to_string(),
        BlockContent::Table { .. } => "📊 Table".to_string(),
        BlockContent::ImageGallery { urls } => format!("🖼️ {} images", urls.len()),
        BlockContent::Checkpoint { .. } => "📍 Checkpoint".to_string(),
        BlockContent::Custom { .. } => "Custom block".to_string(),
    };
    truncate(&summary, max_length)
}

/// One block's contribution to document search text. Kinds without
/// natural text contribute an opaque token so presence queries still
/// match.
pub fn block_text(block: &Block) -> String {
    match &block.content {
        BlockContent::Text { text } => text.clone(),
        BlockContent::Heading { text, .. } => text.clone(),
        BlockContent::Quote { text, author } => match author {
            Some(author) => format!("{} {}", text, author),
            None => text.clone(),
        },
        BlockContent::Code { code, .. } => code.clone(),
        BlockContent::Image { url, description } => match description {
            Some(description) => format!("{} {}", description, url),
            None => url.clone(),
        },
        BlockContent::Link {
            url,
            title,
            description,
        } => {
            let mut parts: Vec<&str> = Vec::new();
            if let Some(title) = title {
                parts.push(title);
            }
            if let Some(description) = description {
                parts.push(description);
            }
            parts.push(url);
            parts.join(" ")
        }
        BlockContent::BulletedList { items } | BlockContent::NumberedList { items } => {
            items.join("\n")
        }
        BlockContent::TodoList { items } => items
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        BlockContent::Callout { text, .. } => text.clone(),
        BlockContent::Divider { .. } => "[divider]".to_string(),
        BlockContent::Table { .. } => "[table]".to_string(),
        BlockContent::ImageGallery { urls } => {
            if urls.is_empty() {
                "[gallery]".to_string()
            } else {
                urls.join("\n")
            }
        }
        BlockContent::Checkpoint { .. } => "[checkpoint]".to_string(),
        BlockContent::Custom { .. } => "[custom]".to_string(),
    }
}

/// Whole-document search text: per-block contributions joined with
/// newlines, in input order.
pub fn full_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(s: &str, max_length: usize) -> String {
    if s.chars().count() <= max_length {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_length.saturating_sub(1)).collect();
    out.push('…');
    out
}

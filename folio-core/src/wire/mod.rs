//! Wire payload ⇄ typed block converters
//!
//! Blocks cross the persistence API as [`WireBlock`] rows whose content
//! is a flat string (bare text for paragraphs, a JSON payload for every
//! other kind). Hydration validates each row structurally, silently
//! drops the invalid ones, and normalizes the rest into typed blocks.

mod normalize;
mod serialize;

pub use normalize::{default_content, normalize_content};
pub use serialize::serialize_content;

use crate::ids::{Clock, IdProvider};
use crate::types::{Block, BlockKind};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block row as stored by the persistence API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBlock {
    #[serde(default)]
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub order: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Structural check on a raw content value for `kind`, applied after
/// payload decoding. This is the batch-hydration filter: rows that fail
/// are dropped, rows that pass may still need normalization repairs.
pub fn validate_raw_content(kind: BlockKind, raw: &Value) -> bool {
    let value = normalize::decode_payload(raw);
    match kind {
        BlockKind::Heading => match &value {
            // A level field, when present, must be a number in 1..=6.
            Value::Object(map) => match map.get("level") {
                None => true,
                Some(level) => level.as_u64().is_some_and(|l| (1..=6).contains(&l)),
            },
            Value::String(_) | Value::Null => true,
            _ => false,
        },
        BlockKind::Image | BlockKind::Link => match &value {
            Value::Object(map) => map
                .get("url")
                .and_then(Value::as_str)
                .is_some_and(|url| !url.is_empty()),
            Value::String(url) => !url.trim().is_empty(),
            _ => false,
        },
        BlockKind::Checkpoint => match &value {
            Value::Object(map) => map
                .get("checkpointId")
                .and_then(Value::as_str)
                .is_some_and(|id| !id.is_empty()),
            Value::String(id) => !id.is_empty(),
            _ => false,
        },
        // The normalizer repairs everything else these kinds can get
        // wrong, so any raw value is acceptable.
        BlockKind::Text
        | BlockKind::Quote
        | BlockKind::Code
        | BlockKind::BulletedList
        | BlockKind::NumberedList
        | BlockKind::TodoList
        | BlockKind::Callout
        | BlockKind::Divider
        | BlockKind::Table
        | BlockKind::ImageGallery
        | BlockKind::Custom => true,
    }
}

/// Hydrate one wire row into a typed block. Returns `None` for rows
/// with an unknown kind or content that fails the structural check.
pub fn hydrate_block(
    wire: &WireBlock,
    ids: &dyn IdProvider,
    clock: &dyn Clock,
) -> Option<Block> {
    let kind = match BlockKind::parse(&wire.kind) {
        Some(kind) => kind,
        None => {
            tracing::debug!(kind = %wire.kind, "dropping block with unknown kind");
            return None;
        }
    };
    if !validate_raw_content(kind, &wire.content) {
        tracing::debug!(kind = %kind, id = %wire.id, "dropping structurally invalid block");
        return None;
    }

    let content = normalize_content(kind, &wire.content, ids);
    let now = clock.now();
    Some(Block {
        id: if wire.id.is_empty() {
            ids.new_id()
        } else {
            wire.id.clone()
        },
        kind,
        content,
        order: wire.order,
        created_at: wire.created_at.unwrap_or(now),
        updated_at: wire.updated_at.unwrap_or(now),
    })
}

/// Hydrate a batch of wire rows, preserving input order and silently
/// dropping invalid rows. Rows are independent, so the batch runs in
/// parallel.
pub fn hydrate_blocks(
    wires: &[WireBlock],
    ids: &dyn IdProvider,
    clock: &dyn Clock,
) -> Vec<Block> {
    wires
        .par_iter()
        .filter_map(|wire| hydrate_block(wire, ids, clock))
        .collect()
}

/// Produce the outbound wire row for a block, with the content
/// flattened to its wire string.
pub fn dehydrate_block(block: &Block) -> WireBlock {
    WireBlock {
        id: block.id.clone(),
        kind: block.kind.as_str().to_string(),
        content: Value::String(serialize_content(&block.content)),
        order: block.order,
        created_at: Some(block.created_at),
        updated_at: Some(block.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SystemClock, UuidIds};
    use crate::types::BlockContent;
    use serde_json::json;

    fn wire(kind: &str, content: Value) -> WireBlock {
        WireBlock {
            id: "b1".to_string(),
            kind: kind.to_string(),
            content,
            order: 0.0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn non_numeric_heading_level_fails_validation() {
        assert!(!validate_raw_content(
            BlockKind::Heading,
            &json!({"text": "t", "level": "two"})
        ));
        assert!(validate_raw_content(
            BlockKind::Heading,
            &json!({"text": "t", "level": 3})
        ));
        assert!(validate_raw_content(BlockKind::Heading, &json!({"text": "t"})));
    }

    #[test]
    fn image_requires_non_empty_url() {
        assert!(!validate_raw_content(BlockKind::Image, &json!({"alt": "a"})));
        assert!(!validate_raw_content(BlockKind::Image, &json!({"url": ""})));
        assert!(validate_raw_content(BlockKind::Image, &json!({"url": "u"})));
    }

    #[test]
    fn validation_applies_after_payload_decode() {
        let encoded = Value::String(r#"{"text":"t","level":9}"#.to_string());
        assert!(!validate_raw_content(BlockKind::Heading, &encoded));
    }

    #[test]
    fn hydrate_drops_invalid_rows_keeps_valid() {
        let rows = vec![
            wire("text", json!("a paragraph")),
            wire("heading", json!({"text": "t", "level": "two"})),
            wire("hologram", json!({})),
        ];
        let blocks = hydrate_blocks(&rows, &UuidIds, &SystemClock);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, BlockContent::text("a paragraph"));
    }

    #[test]
    fn hydrate_preserves_input_order() {
        let rows = vec![
            wire("text", json!("first")),
            wire("quote", json!({"text": "second"})),
            wire("text", json!("third")),
        ];
        let blocks = hydrate_blocks(&rows, &UuidIds, &SystemClock);
        let texts: Vec<_> = blocks
            .iter()
            .map(|b| match &b.content {
                BlockContent::Text { text } | BlockContent::Quote { text, .. } => text.clone(),
                _ => panic!("unexpected kind"),
            })
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn hydrate_generates_id_when_missing() {
        let mut row = wire("text", json!("body"));
        row.id.clear();
        let block = hydrate_block(&row, &UuidIds, &SystemClock).unwrap();
        assert!(!block.id.is_empty());
    }

    #[test]
    fn dehydrate_then_hydrate_round_trips() {
        let block = Block::new(
            BlockContent::heading("Title", 2),
            3.0,
            &UuidIds,
            &SystemClock,
        );
        let row = dehydrate_block(&block);
        assert_eq!(row.kind, "heading");
        let back = hydrate_block(&row, &UuidIds, &SystemClock).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn wire_rows_parse_from_api_json() {
        let json = r#"[
            {"id": "a", "kind": "text", "content": "hello", "order": 0},
            {"id": "b", "kind": "checkpoint", "content": "{\"checkpointId\":\"cp-1\"}", "order": 1}
        ]"#;
        let rows: Vec<WireBlock> = serde_json::from_str(json).unwrap();
        let blocks = hydrate_blocks(&rows, &UuidIds, &SystemClock);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1].content,
            BlockContent::Checkpoint {
                checkpoint_id: "cp-1".to_string()
            }
        );
    }
}

//! Block envelope and note document root

use super::{BlockContent, BlockKind};
use crate::error::NoteError;
use crate::ids::{Clock, IdProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document format version carried on every note root. Opaque to this
/// crate; reserved for future migration.
pub const NOTE_VERSION: &str = "1.0";

/// One addressable unit of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Opaque identifier, assigned at creation.
    pub id: String,

    /// Semantic type. Immutable; changing type is delete+recreate.
    pub kind: BlockKind,

    /// Kind-shaped content.
    pub content: BlockContent,

    /// Sortable position among siblings. Generation and rebalancing are
    /// owned by the persistence layer.
    pub order: f64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Block {
    /// Create a block; the kind tag is taken from the content variant.
    pub fn new(
        content: BlockContent,
        order: f64,
        ids: &dyn IdProvider,
        clock: &dyn Clock,
    ) -> Self {
        let now = clock.now();
        Self {
            id: ids.new_id(),
            kind: content.kind(),
            content,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content, bumping `updated_at`. The kind is immutable,
    /// so a content variant of a different kind is rejected.
    pub fn replace_content(&mut self, content: BlockContent, clock: &dyn Clock) -> bool {
        if content.kind() != self.kind {
            return false;
        }
        self.content = content;
        self.updated_at = clock.now();
        true
    }
}

/// Ordered block sequence forming a note body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteContent {
    pub blocks: Vec<Block>,
    pub version: String,
}

impl NoteContent {
    /// Empty document at the current format version.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            version: NOTE_VERSION.to_string(),
        }
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            version: NOTE_VERSION.to_string(),
        }
    }

    /// Decode a note document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, NoteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the note document as JSON.
    pub fn to_json(&self) -> Result<String, NoteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for NoteContent {
    fn default() -> Self {
        Self::new()
    }
}

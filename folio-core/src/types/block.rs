//! Block kind registry and kind-tagged content shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language written into code content when the source carries none.
pub const DEFAULT_CODE_LANGUAGE: &str = "plain";

/// Style written into divider content when the source carries none.
pub const DEFAULT_DIVIDER_STYLE: &str = "solid";

/// Icon written into callout content when the source carries none.
pub const DEFAULT_CALLOUT_ICON: &str = "💡";

/// Closed set of block kinds. Every consumer matches exhaustively, so a
/// new kind fails to compile until every converter handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Text,
    Heading,
    Image,
    Link,
    Quote,
    Code,
    BulletedList,
    NumberedList,
    TodoList,
    Callout,
    Divider,
    Table,
    ImageGallery,
    Checkpoint,
    Custom,
}

/// How a kind's content crosses the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEncoding {
    /// The bare text value, no structural wrapper (legacy plain-text rows).
    Plain,
    /// A JSON-encoded payload string.
    Structured,
}

impl BlockKind {
    /// Every kind, in registry order.
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::Image,
        BlockKind::Link,
        BlockKind::Quote,
        BlockKind::Code,
        BlockKind::BulletedList,
        BlockKind::NumberedList,
        BlockKind::TodoList,
        BlockKind::Callout,
        BlockKind::Divider,
        BlockKind::Table,
        BlockKind::ImageGallery,
        BlockKind::Checkpoint,
        BlockKind::Custom,
    ];

    /// Canonical wire name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Image => "image",
            BlockKind::Link => "link",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::BulletedList => "bulleted_list",
            BlockKind::NumberedList => "numbered_list",
            BlockKind::TodoList => "todo_list",
            BlockKind::Callout => "callout",
            BlockKind::Divider => "divider",
            BlockKind::Table => "table",
            BlockKind::ImageGallery => "image_gallery",
            BlockKind::Checkpoint => "checkpoint",
            BlockKind::Custom => "custom",
        }
    }

    /// Parse a wire kind name. `"paragraph"` is accepted as a legacy
    /// alias of `"text"`; anything else unknown is rejected.
    pub fn parse(s: &str) -> Option<BlockKind> {
        match s {
            "text" | "paragraph" => Some(BlockKind::Text),
            "heading" => Some(BlockKind::Heading),
            "image" => Some(BlockKind::Image),
            "link" => Some(BlockKind::Link),
            "quote" => Some(BlockKind::Quote),
            "code" => Some(BlockKind::Code),
            "bulleted_list" => Some(BlockKind::BulletedList),
            "numbered_list" => Some(BlockKind::NumberedList),
            "todo_list" => Some(BlockKind::TodoList),
            "callout" => Some(BlockKind::Callout),
            "divider" => Some(BlockKind::Divider),
            "table" => Some(BlockKind::Table),
            "image_gallery" => Some(BlockKind::ImageGallery),
            "checkpoint" => Some(BlockKind::Checkpoint),
            "custom" => Some(BlockKind::Custom),
            _ => None,
        }
    }

    /// Wire representation of this kind's content.
    pub fn wire_encoding(&self) -> WireEncoding {
        match self {
            BlockKind::Text => WireEncoding::Plain,
            BlockKind::Heading
            | BlockKind::Image
            | BlockKind::Link
            | BlockKind::Quote
            | BlockKind::Code
            | BlockKind::BulletedList
            | BlockKind::NumberedList
            | BlockKind::TodoList
            | BlockKind::Callout
            | BlockKind::Divider
            | BlockKind::Table
            | BlockKind::ImageGallery
            | BlockKind::Checkpoint
            | BlockKind::Custom => WireEncoding::Structured,
        }
    }

    /// Legacy field aliases accepted during normalization, as
    /// `(canonical, aliases-in-precedence-order)`. Aliases are folded
    /// into the canonical field on read and never written back.
    pub fn legacy_aliases(&self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            BlockKind::Image => &[("description", &["alt", "caption"])],
            BlockKind::Text
            | BlockKind::Heading
            | BlockKind::Link
            | BlockKind::Quote
            | BlockKind::Code
            | BlockKind::BulletedList
            | BlockKind::NumberedList
            | BlockKind::TodoList
            | BlockKind::Callout
            | BlockKind::Divider
            | BlockKind::Table
            | BlockKind::ImageGallery
            | BlockKind::Checkpoint
            | BlockKind::Custom => &[],
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single item of a todo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_promoted: Option<bool>,
}

/// Kind-tagged content union. One variant per [`BlockKind`], carrying
/// exactly the fields that kind mandates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockContent {
    Text {
        text: String,
    },
    Heading {
        text: String,
        level: u8,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Code {
        code: String,
        language: String,
    },
    BulletedList {
        items: Vec<String>,
    },
    NumberedList {
        items: Vec<String>,
    },
    TodoList {
        items: Vec<TodoItem>,
    },
    Callout {
        text: String,
        icon: String,
    },
    Divider {
        style: String,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    ImageGallery {
        urls: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Checkpoint {
        checkpoint_id: String,
    },
    Custom {
        data: Value,
    },
}

impl BlockContent {
    /// The kind this content shape belongs to.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Link { .. } => BlockKind::Link,
            BlockContent::Quote { .. } => BlockKind::Quote,
            BlockContent::Code { .. } => BlockKind::Code,
            BlockContent::BulletedList { .. } => BlockKind::BulletedList,
            BlockContent::NumberedList { .. } => BlockKind::NumberedList,
            BlockContent::TodoList { .. } => BlockKind::TodoList,
            BlockContent::Callout { .. } => BlockKind::Callout,
            BlockContent::Divider { .. } => BlockKind::Divider,
            BlockContent::Table { .. } => BlockKind::Table,
            BlockContent::ImageGallery { .. } => BlockKind::ImageGallery,
            BlockContent::Checkpoint { .. } => BlockKind::Checkpoint,
            BlockContent::Custom { .. } => BlockKind::Custom,
        }
    }

    /// Create paragraph content.
    pub fn text(text: impl Into<String>) -> Self {
        BlockContent::Text { text: text.into() }
    }

    /// Create heading content, clamping the level into 1..=6.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        BlockContent::Heading {
            text: text.into(),
            level: level.clamp(1, 6),
        }
    }

    /// Create quote content without an author.
    pub fn quote(text: impl Into<String>) -> Self {
        BlockContent::Quote {
            text: text.into(),
            author: None,
        }
    }

    /// Create code content.
    pub fn code(code: impl Into<String>, language: impl Into<String>) -> Self {
        BlockContent::Code {
            code: code.into(),
            language: language.into(),
        }
    }

    /// Create image content, treating an empty description as absent.
    pub fn image(url: impl Into<String>, description: Option<String>) -> Self {
        BlockContent::Image {
            url: url.into(),
            description: description.filter(|d| !d.is_empty()),
        }
    }
}

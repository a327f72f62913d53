//! Content normalization: arbitrary raw values into well-formed content
//!
//! Normalization is total. Whatever shape the persistence API or a
//! legacy export hands over, the result satisfies the content contract
//! for the requested kind; malformed input degrades to the kind's
//! minimal default instead of failing, so one bad block can never make
//! a document unloadable.

use crate::ids::IdProvider;
use crate::types::{
    BlockContent, BlockKind, TodoItem, DEFAULT_CALLOUT_ICON, DEFAULT_CODE_LANGUAGE,
    DEFAULT_DIVIDER_STYLE,
};
use serde_json::{Map, Value};

/// Decode step: a string payload may itself be a JSON-encoded object or
/// array. Scalars and undecodable strings stay plain text so the shape
/// step has exactly one input form to reason about.
pub(crate) fn decode_payload(raw: &Value) -> Value {
    match raw {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(decoded @ (Value::Object(_) | Value::Array(_))) => decoded,
            Ok(_) | Err(_) => {
                tracing::trace!("payload string kept as plain text");
                raw.clone()
            }
        },
        other => other.clone(),
    }
}

fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Text extraction shared by the string-bodied kinds: a bare string is
/// the text, an object contributes its `text` field, anything else is
/// empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Stringify one list element. Strings pass through, numbers and bools
/// render, everything else contributes an empty row.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Image description precedence: `description` over legacy `alt` over
/// legacy `caption`; empty strings count as absent. The legacy fields
/// are read here and nowhere else.
fn resolve_description(map: &Map<String, Value>) -> Option<String> {
    let (canonical, aliases) = BlockKind::Image.legacy_aliases()[0];
    std::iter::once(canonical)
        .chain(aliases.iter().copied())
        .find_map(|key| str_field(map, key))
}

/// Collect string items from either a bare array or an object's `items`
/// field, padding to one empty entry so a list never renders zero rows.
fn string_items(value: &Value) -> Vec<String> {
    let raw = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };
    let mut items: Vec<String> = raw.iter().map(stringify).collect();
    if items.is_empty() {
        items.push(String::new());
    }
    items
}

fn todo_item(value: &Value, ids: &dyn IdProvider) -> TodoItem {
    match value {
        Value::Object(map) => TodoItem {
            id: str_field(map, "id").unwrap_or_else(|| ids.new_id()),
            text: map
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            checked: map.get("checked").and_then(Value::as_bool).unwrap_or(false),
            is_promoted: map.get("isPromoted").and_then(Value::as_bool),
        },
        other => TodoItem {
            id: ids.new_id(),
            text: stringify(other),
            checked: false,
            is_promoted: None,
        },
    }
}

fn todo_items(value: &Value, ids: &dyn IdProvider) -> Vec<TodoItem> {
    let raw = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };
    let mut items: Vec<TodoItem> = raw.iter().map(|item| todo_item(item, ids)).collect();
    if items.is_empty() {
        items.push(TodoItem {
            id: ids.new_id(),
            text: String::new(),
            checked: false,
            is_promoted: None,
        });
    }
    items
}

fn table_rows(map: &Map<String, Value>) -> Vec<Vec<String>> {
    map.get("rows")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| match row {
                    Value::Array(cells) => cells.iter().map(stringify).collect(),
                    other => vec![stringify(other)],
                })
                .collect()
        })
        .unwrap_or_default()
}

fn gallery_urls(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        Value::Array(urls) => urls
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Value::Object(map) => map
            .get("urls")
            .map(gallery_urls)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Produce well-formed content of `kind` from an arbitrary raw value.
///
/// `raw` may be a JSON-encoded payload string, a structured value,
/// `null`, or garbage; the result always satisfies the shape contract
/// for `kind`. `ids` supplies identifiers for todo items that arrive
/// without one.
pub fn normalize_content(kind: BlockKind, raw: &Value, ids: &dyn IdProvider) -> BlockContent {
    let value = decode_payload(raw);

    match kind {
        BlockKind::Text => BlockContent::Text {
            text: text_of(&value),
        },
        BlockKind::Heading => {
            let level = value
                .as_object()
                .and_then(|map| map.get("level"))
                .and_then(Value::as_u64)
                .map(|l| l.clamp(1, 6) as u8)
                .unwrap_or(2);
            BlockContent::Heading {
                text: text_of(&value),
                level,
            }
        }
        BlockKind::Image => match &value {
            Value::Object(map) => BlockContent::Image {
                url: str_field(map, "url").unwrap_or_default(),
                description: resolve_description(map),
            },
            Value::String(url) => BlockContent::Image {
                url: url.clone(),
                description: None,
            },
            _ => BlockContent::Image {
                url: String::new(),
                description: None,
            },
        },
        BlockKind::Link => match &value {
            Value::Object(map) => BlockContent::Link {
                url: str_field(map, "url").unwrap_or_default(),
                title: str_field(map, "title"),
                description: str_field(map, "description"),
            },
            Value::String(url) => BlockContent::Link {
                url: url.clone(),
                title: None,
                description: None,
            },
            _ => BlockContent::Link {
                url: String::new(),
                title: None,
                description: None,
            },
        },
        BlockKind::Quote => BlockContent::Quote {
            text: text_of(&value),
            author: value.as_object().and_then(|map| str_field(map, "author")),
        },
        BlockKind::Code => match &value {
            Value::Object(map) => BlockContent::Code {
                code: map
                    .get("code")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                language: str_field(map, "language")
                    .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
            },
            Value::String(code) => BlockContent::code(code.clone(), DEFAULT_CODE_LANGUAGE),
            _ => BlockContent::code("", DEFAULT_CODE_LANGUAGE),
        },
        BlockKind::BulletedList => BlockContent::BulletedList {
            items: string_items(&value),
        },
        BlockKind::NumberedList => BlockContent::NumberedList {
            items: string_items(&value),
        },
        BlockKind::TodoList => BlockContent::TodoList {
            items: todo_items(&value, ids),
        },
        BlockKind::Callout => BlockContent::Callout {
            text: text_of(&value),
            icon: value
                .as_object()
                .and_then(|map| str_field(map, "icon"))
                .unwrap_or_else(|| DEFAULT_CALLOUT_ICON.to_string()),
        },
        BlockKind::Divider => BlockContent::Divider {
            style: value
                .as_object()
                .and_then(|map| str_field(map, "style"))
                .unwrap_or_else(|| DEFAULT_DIVIDER_STYLE.to_string()),
        },
        BlockKind::Table => BlockContent::Table {
            rows: value.as_object().map(table_rows).unwrap_or_default(),
        },
        BlockKind::ImageGallery => BlockContent::ImageGallery {
            urls: gallery_urls(&value),
        },
        BlockKind::Checkpoint => match &value {
            Value::Object(map) => BlockContent::Checkpoint {
                checkpoint_id: str_field(map, "checkpointId").unwrap_or_default(),
            },
            Value::String(id) => BlockContent::Checkpoint {
                checkpoint_id: id.clone(),
            },
            _ => BlockContent::Checkpoint {
                checkpoint_id: String::new(),
            },
        },
        BlockKind::Custom => BlockContent::Custom {
            data: if value.is_null() {
                Value::Object(Map::new())
            } else {
                value
            },
        },
    }
}

/// Minimal valid content for a freshly created block of `kind`.
pub fn default_content(kind: BlockKind, ids: &dyn IdProvider) -> BlockContent {
    match kind {
        BlockKind::Text => BlockContent::text(""),
        BlockKind::Heading => BlockContent::heading("", 2),
        BlockKind::Image => BlockContent::Image {
            url: String::new(),
            description: None,
        },
        BlockKind::Link => BlockContent::Link {
            url: String::new(),
            title: None,
            description: None,
        },
        BlockKind::Quote => BlockContent::quote(""),
        BlockKind::Code => BlockContent::code("", DEFAULT_CODE_LANGUAGE),
        BlockKind::BulletedList => BlockContent::BulletedList {
            items: vec![String::new()],
        },
        BlockKind::NumberedList => BlockContent::NumberedList {
            items: vec![String::new()],
        },
        BlockKind::TodoList => BlockContent::TodoList {
            items: vec![TodoItem {
                id: ids.new_id(),
                text: String::new(),
                checked: false,
                is_promoted: None,
            }],
        },
        BlockKind::Callout => BlockContent::Callout {
            text: String::new(),
            icon: DEFAULT_CALLOUT_ICON.to_string(),
        },
        BlockKind::Divider => BlockContent::Divider {
            style: DEFAULT_DIVIDER_STYLE.to_string(),
        },
        BlockKind::Table => BlockContent::Table { rows: Vec::new() },
        BlockKind::ImageGallery => BlockContent::ImageGallery { urls: Vec::new() },
        BlockKind::Checkpoint => BlockContent::Checkpoint {
            checkpoint_id: String::new(),
        },
        BlockKind::Custom => BlockContent::Custom {
            data: Value::Object(Map::new()),
        },
    }
}

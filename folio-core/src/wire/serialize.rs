//! Content serialization: typed content into the flat wire string

use crate::types::BlockContent;
use serde_json::{json, Map, Value};

/// Fallback payload when encoding fails; an empty structured payload is
/// preferred over surfacing the failure.
const EMPTY_PAYLOAD: &str = "{}";

/// Serialize content to its wire string. Text content is the bare text
/// value, unencoded, for compatibility with plain-text storage; every
/// other kind is a JSON-encoded payload.
pub fn serialize_content(content: &BlockContent) -> String {
    match content {
        BlockContent::Text { text } => text.clone(),
        other => {
            serde_json::to_string(&payload_of(other)).unwrap_or_else(|_| EMPTY_PAYLOAD.to_string())
        }
    }
}

fn payload_of(content: &BlockContent) -> Value {
    match content {
        BlockContent::Text { text } => json!({ "text": text }),
        BlockContent::Heading { text, level } => json!({ "text": text, "level": level }),
        BlockContent::Image { url, description } => {
            let mut map = Map::new();
            map.insert("url".to_string(), json!(url));
            if let Some(description) = description {
                map.insert("description".to_string(), json!(description));
            }
            Value::Object(map)
        }
        BlockContent::Link {
            url,
            title,
            description,
        } => {
            let mut map = Map::new();
            map.insert("url".to_string(), json!(url));
            if let Some(title) = title {
                map.insert("title".to_string(), json!(title));
            }
            if let Some(description) = description {
                map.insert("description".to_string(), json!(description));
            }
            Value::Object(map)
        }
        BlockContent::Quote { text, author } => {
            let mut map = Map::new();
            map.insert("text".to_string(), json!(text));
            if let Some(author) = author {
                map.insert("author".to_string(), json!(author));
            }
            Value::Object(map)
        }
        BlockContent::Code { code, language } => json!({ "code": code, "language": language }),
        BlockContent::BulletedList { items } => json!({ "items": items }),
        BlockContent::NumberedList { items } => json!({ "items": items }),
        BlockContent::TodoList { items } => json!({ "items": items }),
        BlockContent::Callout { text, icon } => json!({ "text": text, "icon": icon }),
        BlockContent::Divider { style } => json!({ "style": style }),
        BlockContent::Table { rows } => json!({ "rows": rows }),
        BlockContent::ImageGallery { urls } => json!({ "urls": urls }),
        BlockContent::Checkpoint { checkpoint_id } => json!({ "checkpointId": checkpoint_id }),
        BlockContent::Custom { data } => data.clone(),
    }
}

//! Feed response parser
//!
//! Two recognized layouts, tried in order:
//!
//! 1. List shape: `{"notifications": [{...}, ...]}` - each object yields one item
//! 2. Single-object shape: `{"success": true, "data": {...}}` - the PHP server
//!    format, which additionally accepts `big_text` as an alias for `bigText`
//!
//! Anything else yields zero items. Parsing never fails: malformed or truncated
//! bodies degrade to an empty result, so a misbehaving server can never take
//! the polling loop down.

use serde_json::{Map, Value};

use crate::domain::notification::NotificationFields;

/// Extract notification items from a raw response body.
pub fn parse_feed(body: &str) -> Vec<NotificationFields> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    // List shape wins when its marker maps to an actual array
    if let Some(Value::Array(items)) = value.get("notifications") {
        return items
            .iter()
            .filter_map(|item| item.as_object())
            .filter_map(|obj| item_from_object(obj, false))
            .collect();
    }

    if let Some(Value::Object(obj)) = value.get("data") {
        return item_from_object(obj, true).into_iter().collect();
    }

    Vec::new()
}

/// Build one item from a feed object. The `big_text` alias is only honored in
/// the single-object shape; the list shape is camelCase only.
///
/// Only string values count; a key holding any other type is treated as absent.
/// Objects carrying none of the recognized keys are skipped entirely.
fn item_from_object(obj: &Map<String, Value>, allow_snake_case: bool) -> Option<NotificationFields> {
    let title = string_value(obj, "title");
    let message = string_value(obj, "message");
    let mut big_text = string_value(obj, "bigText");
    if big_text.is_none() && allow_snake_case {
        big_text = string_value(obj, "big_text");
    }
    let image_url = string_value(obj, "imageUrl");

    if title.is_none() && message.is_none() && big_text.is_none() && image_url.is_none() {
        return None;
    }

    Some(NotificationFields {
        title: title.unwrap_or_default(),
        message: message.unwrap_or_default(),
        big_text,
        image_url,
    })
}

fn string_value(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

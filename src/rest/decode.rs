use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{InstagramError, Result};
use crate::types::{Endpoint, Feed, PageCursor};

/// Decode a classified body into one typed page for `endpoint`.
///
/// The `data` list is taken verbatim in server order. The continuation
/// cursor is read from the pagination field configured for the
/// endpoint; its absence means the result set is exhausted.
pub fn decode_feed<T: DeserializeOwned>(endpoint: &Endpoint, body: &Value) -> Result<Feed<T>> {
    let data = body
        .get("data")
        .ok_or_else(|| missing_field(endpoint, "data"))?;

    let items: Vec<T> = serde_json::from_value(data.clone())
        .map_err(|e| InstagramError::Decode(format!("{}: {e}", endpoint.name())))?;

    let pagination = endpoint.cursor_field().and_then(|field| {
        let cursor = cursor_value(body.get("pagination")?.get(field)?)?;
        Some(PageCursor {
            endpoint: endpoint.clone(),
            next_cursor: cursor,
        })
    });

    Ok(Feed {
        data: items,
        pagination,
    })
}

/// Decode a classified body whose `data` is a single object.
pub fn decode_object<T: DeserializeOwned>(endpoint: &Endpoint, body: &Value) -> Result<T> {
    let data = body
        .get("data")
        .ok_or_else(|| missing_field(endpoint, "data"))?;
    serde_json::from_value(data.clone())
        .map_err(|e| InstagramError::Decode(format!("{}: {e}", endpoint.name())))
}

fn missing_field(endpoint: &Endpoint, field: &str) -> InstagramError {
    InstagramError::Decode(format!("{}: missing `{field}` field", endpoint.name()))
}

/// Cursors arrive as strings on most endpoints, but some payloads carry
/// numeric ids.
fn cursor_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

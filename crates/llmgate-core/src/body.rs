//! Inbound body parsing shared by both forwarding routes.

use serde_json::{Map, Value};

use crate::error::GatewayError;

/// JSON object body of an inbound request.
pub type JsonBody = Map<String, Value>;

/// Whether a `Content-Type` value names a JSON media type.
///
/// Accepts `application/json` and any `+json` structured suffix, ignoring
/// parameters such as `charset`.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Parse an inbound body into a JSON object.
///
/// A missing or non-JSON content type, an empty or unparseable body, and an
/// empty value (`null`, `false`, zero, `""`, `[]`) all yield an empty
/// object. Any other non-object JSON value is rejected with
/// [`GatewayError::InvalidBody`].
pub fn parse_body(content_type: Option<&str>, bytes: &[u8]) -> Result<JsonBody, GatewayError> {
    if !content_type.is_some_and(is_json_content_type) {
        return Ok(JsonBody::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(value) if is_empty_value(&value) => Ok(JsonBody::new()),
        Err(_) => Ok(JsonBody::new()),
        Ok(_) => Err(GatewayError::InvalidBody),
    }
}

/// `null`, `false`, numeric zero, the empty string or the empty array.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

//! # Entity Writers
//!
//! An [`EntityWriter`] renders the response entity of a request into bytes under
//! one media type. Writers are built once at wiring time and shared between
//! every request as `Arc<dyn EntityWriter>`, so they must be `Send + Sync` and
//! must not keep per-request state.
//!
//! Two writers ship with the crate:
//!
//! - [`JsonEntityWriter`] - `application/json`
//! - [`TextEntityWriter`] - `text/plain`

use crate::error::WriteError;
use serde_json::Value;
use std::fmt::Debug;

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain";

/// Capability that renders a response entity to a body buffer.
pub trait EntityWriter: Send + Sync + Debug {
    /// The media type written into the response `Content-Type`.
    fn media_type(&self) -> &str;

    /// Appends the rendered `entity` to `out`.
    fn write_to(&self, entity: &Value, out: &mut Vec<u8>) -> Result<(), WriteError>;
}

/// Writes entities as compact JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEntityWriter;

impl EntityWriter for JsonEntityWriter {
    fn media_type(&self) -> &str {
        APPLICATION_JSON
    }

    fn write_to(&self, entity: &Value, out: &mut Vec<u8>) -> Result<(), WriteError> {
        serde_json::to_writer(out, entity)?;
        Ok(())
    }
}

/// Writes entities as plain text.
///
/// Strings are written verbatim (no quotes); `null` writes nothing; every
/// other value falls back to its JSON text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextEntityWriter;

impl EntityWriter for TextEntityWriter {
    fn media_type(&self) -> &str {
        TEXT_PLAIN
    }

    fn write_to(&self, entity: &Value, out: &mut Vec<u8>) -> Result<(), WriteError> {
        match entity {
            Value::Null => {}
            Value::String(s) => out.extend_from_slice(s.as_bytes()),
            other => serde_json::to_writer(out, other)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(writer: &dyn EntityWriter, entity: &Value) -> String {
        let mut out = Vec::new();
        writer.write_to(entity, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn json_writer_is_compact() {
        let body = render(&JsonEntityWriter, &json!({"name": "Alice", "tags": [1, 2]}));
        assert_eq!(body, r#"{"name":"Alice","tags":[1,2]}"#);
        assert_eq!(JsonEntityWriter.media_type(), "application/json");
    }

    #[test]
    fn text_writer_unquotes_strings() {
        assert_eq!(render(&TextEntityWriter, &json!("hello")), "hello");
        assert_eq!(render(&TextEntityWriter, &json!(42)), "42");
        assert_eq!(render(&TextEntityWriter, &Value::Null), "");
        assert_eq!(TextEntityWriter.media_type(), "text/plain");
    }

    #[test]
    fn writers_append_to_existing_buffer() {
        let mut out = b"prefix:".to_vec();
        TextEntityWriter.write_to(&json!("x"), &mut out).unwrap();
        assert_eq!(out, b"prefix:x");
    }
}

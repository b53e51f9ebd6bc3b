//! # Mock Stages and Writers
//!
//! Utilities for testing pipelines and stages without real resources.
//!
//! - [`MockEntityWriter`] - an [`EntityWriter`] with a configurable media type
//!   that records every entity it is asked to write.
//! - [`SlotProbe`] - a stage that snapshots the entity writer slot when it runs,
//!   so a test can check what a downstream stage would have seen.
//! - [`StaticResource`] - a [`ResourceMethod`] that always returns the same
//!   entity.
//!
//! # Example
//! ```ignore
//! let writer = Arc::new(MockEntityWriter::new("application/x-test"));
//! let probe = Arc::new(SlotProbe::default());
//!
//! let pipeline = Pipeline::builder()
//!     .then(EntityWriterHandler::new(writer.clone()))
//!     .then_shared(probe.clone())
//!     .build()?;
//!
//! pipeline.run(&mut RequestContext::new("GET", "/")).await?;
//! assert!(probe.saw_writer(&(writer as Arc<dyn EntityWriter>)));
//! ```

use crate::context::RequestContext;
use crate::error::{PipelineError, WriteError};
use crate::handler::{RestHandler, Slot};
use crate::handlers::ResourceMethod;
use crate::writer::EntityWriter;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// An entity writer that records what it writes.
///
/// Output is the entity's JSON text, so assertions can compare bodies as
/// strings.
#[derive(Debug)]
pub struct MockEntityWriter {
    media_type: String,
    written: Mutex<Vec<Value>>,
}

impl MockEntityWriter {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            written: Mutex::new(Vec::new()),
        }
    }

    /// Entities written so far, oldest first.
    pub fn written(&self) -> Vec<Value> {
        self.written.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl EntityWriter for MockEntityWriter {
    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn write_to(&self, entity: &Value, out: &mut Vec<u8>) -> Result<(), WriteError> {
        if let Ok(mut written) = self.written.lock() {
            written.push(entity.clone());
        }
        serde_json::to_writer(out, entity)?;
        Ok(())
    }
}

/// A stage that records the entity writer slot each time it runs.
///
/// Declares that it consumes [`Slot::EntityWriter`], so it can only be placed
/// after a stage that produces it.
#[derive(Debug, Default)]
pub struct SlotProbe {
    seen: Mutex<Vec<Option<Arc<dyn EntityWriter>>>>,
}

impl SlotProbe {
    /// Number of times the probe ran.
    pub fn calls(&self) -> usize {
        self.seen.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// The slot contents observed on the most recent run.
    pub fn last_seen(&self) -> Option<Arc<dyn EntityWriter>> {
        self.seen
            .lock()
            .ok()
            .and_then(|s| s.last().cloned().flatten())
    }

    /// True if the most recent run saw exactly `writer` in the slot.
    pub fn saw_writer(&self, writer: &Arc<dyn EntityWriter>) -> bool {
        self.last_seen()
            .map(|seen| Arc::ptr_eq(&seen, writer))
            .unwrap_or(false)
    }
}

#[async_trait]
impl RestHandler for SlotProbe {
    fn name(&self) -> &'static str {
        "SlotProbe"
    }

    fn consumes(&self) -> &'static [Slot] {
        &[Slot::EntityWriter]
    }

    async fn handle(&self, ctx: &mut RequestContext) -> Result<(), PipelineError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(ctx.entity_writer().cloned());
        }
        Ok(())
    }
}

/// A resource that returns a fixed entity (or no content).
#[derive(Debug, Clone)]
pub struct StaticResource {
    entity: Option<Value>,
}

impl StaticResource {
    pub fn new(entity: Value) -> Self {
        Self {
            entity: Some(entity),
        }
    }

    pub fn no_content() -> Self {
        Self { entity: None }
    }
}

#[async_trait]
impl ResourceMethod for StaticResource {
    async fn invoke(&self, _ctx: &RequestContext) -> Result<Option<Value>, PipelineError> {
        Ok(self.entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mock_writer_records_entities() {
        let writer = MockEntityWriter::new("application/x-test");
        let mut out = Vec::new();

        writer.write_to(&json!({"a": 1}), &mut out).unwrap();

        assert_eq!(writer.media_type(), "application/x-test");
        assert_eq!(writer.written(), vec![json!({"a": 1})]);
        assert_eq!(out, br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn probe_records_empty_slot() {
        let probe = SlotProbe::default();
        let mut ctx = RequestContext::new("GET", "/");

        probe.handle(&mut ctx).await.unwrap();

        assert_eq!(probe.calls(), 1);
        assert!(probe.last_seen().is_none());
    }
}

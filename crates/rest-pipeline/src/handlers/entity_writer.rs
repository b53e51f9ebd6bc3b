//! # EntityWriterHandler
//!
//! The stage that installs a pre-built [`EntityWriter`] on the request context,
//! so that [`ResponseWriterHandler`](super::ResponseWriterHandler) further down
//! the chain knows how to render the response entity.
//!
//! The writer is chosen when the pipeline is wired and never changes. Running
//! the stage is a single reference-count increment and a slot assignment: no
//! branching, no I/O and no allocation.

use crate::context::RequestContext;
use crate::error::PipelineError;
use crate::handler::{RestHandler, Slot};
use crate::writer::EntityWriter;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::trace;

/// Attaches one fixed [`EntityWriter`] to every request it sees.
///
/// The handler can be shared across any number of concurrent requests: the
/// only state it owns is the writer reference, which is read-only after
/// construction.
///
/// ```rust
/// use rest_pipeline::{EntityWriterHandler, JsonEntityWriter, RequestContext, RestHandler};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let handler = EntityWriterHandler::new(Arc::new(JsonEntityWriter));
/// let mut ctx = RequestContext::new("GET", "/users/1");
///
/// handler.handle(&mut ctx).await.unwrap();
/// assert_eq!(ctx.entity_writer().unwrap().media_type(), "application/json");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EntityWriterHandler {
    writer: Arc<dyn EntityWriter>,
}

impl EntityWriterHandler {
    pub fn new(writer: Arc<dyn EntityWriter>) -> Self {
        Self { writer }
    }

    /// Builds the handler from a writer that may not exist.
    ///
    /// Wiring code that looks a writer up somewhere gets an `Option` back;
    /// a `None` is a wiring mistake and fails with
    /// [`PipelineError::Configuration`].
    pub fn try_new(writer: Option<Arc<dyn EntityWriter>>) -> Result<Self, PipelineError> {
        writer.map(Self::new).ok_or_else(|| {
            PipelineError::Configuration(
                "EntityWriterHandler requires an entity writer".to_string(),
            )
        })
    }

    /// The writer installed by this handler.
    pub fn writer(&self) -> &Arc<dyn EntityWriter> {
        &self.writer
    }
}

#[async_trait]
impl RestHandler for EntityWriterHandler {
    fn name(&self) -> &'static str {
        "EntityWriterHandler"
    }

    fn produces(&self) -> &'static [Slot] {
        &[Slot::EntityWriter]
    }

    async fn handle(&self, ctx: &mut RequestContext) -> Result<(), PipelineError> {
        ctx.set_entity_writer(Arc::clone(&self.writer));
        trace!(
            media_type = self.writer.media_type(),
            "Entity writer attached"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{JsonEntityWriter, TextEntityWriter};

    #[test]
    fn try_new_rejects_missing_writer() {
        let err = EntityWriterHandler::try_new(None).unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
    }

    #[test]
    fn try_new_keeps_the_given_reference() {
        let writer: Arc<dyn EntityWriter> = Arc::new(TextEntityWriter);
        let handler = EntityWriterHandler::try_new(Some(writer.clone())).unwrap();
        assert!(Arc::ptr_eq(handler.writer(), &writer));
    }

    #[tokio::test]
    async fn handle_installs_writer() {
        let writer: Arc<dyn EntityWriter> = Arc::new(JsonEntityWriter);
        let handler = EntityWriterHandler::new(writer.clone());
        let mut ctx = RequestContext::new("GET", "/");

        handler.handle(&mut ctx).await.unwrap();

        assert!(Arc::ptr_eq(ctx.entity_writer().unwrap(), &writer));
    }

    #[test]
    fn declares_entity_writer_slot() {
        let handler = EntityWriterHandler::new(Arc::new(JsonEntityWriter));
        assert_eq!(handler.produces(), &[Slot::EntityWriter]);
        assert!(handler.consumes().is_empty());
        assert_eq!(handler.name(), "EntityWriterHandler");
    }
}

//! Renders the response entity with whatever writer an earlier stage installed.

use crate::context::RequestContext;
use crate::error::PipelineError;
use crate::handler::{RestHandler, Slot};
use async_trait::async_trait;
use tracing::debug;

/// Writes the response body.
///
/// - No writer installed: [`PipelineError::MissingEntityWriter`].
/// - No entity: status 204 and an empty body.
/// - Otherwise: status 200, the writer's media type and the rendered body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseWriterHandler;

#[async_trait]
impl RestHandler for ResponseWriterHandler {
    fn name(&self) -> &'static str {
        "ResponseWriterHandler"
    }

    fn produces(&self) -> &'static [Slot] {
        &[Slot::ResponseBody]
    }

    fn consumes(&self) -> &'static [Slot] {
        &[Slot::EntityWriter]
    }

    async fn handle(&self, ctx: &mut RequestContext) -> Result<(), PipelineError> {
        let writer = ctx
            .entity_writer()
            .cloned()
            .ok_or(PipelineError::MissingEntityWriter)?;

        let Some(entity) = ctx.entity().cloned() else {
            ctx.set_status(204);
            ctx.body_mut().clear();
            return Ok(());
        };

        let mut body = Vec::new();
        writer.write_to(&entity, &mut body)?;
        debug!(
            media_type = writer.media_type(),
            bytes = body.len(),
            "Entity written"
        );

        ctx.set_status(200);
        ctx.set_content_type(writer.media_type());
        *ctx.body_mut() = body;
        Ok(())
    }
}

//! # RestHandler Trait
//!
//! Every pipeline stage implements [`RestHandler`]. The driver holds stages as
//! `Arc<dyn RestHandler>` and calls them in order, one request at a time per
//! context.
//!
//! The trait is `#[async_trait]` so that stages that must wait (e.g. calling a
//! resource) share one surface with stages that never await. A stage that
//! contains no `.await` never suspends.
//!
//! # Slots
//! Stages declare which [`Slot`]s of the [`RequestContext`] they fill
//! ([`RestHandler::produces`]) and which they rely on
//! ([`RestHandler::consumes`]). [`PipelineBuilder`](crate::pipeline::PipelineBuilder)
//! uses this to reject a chain where a reader runs before its writer.

use crate::context::RequestContext;
use crate::error::PipelineError;
use async_trait::async_trait;
use std::fmt;

/// A named slot of the [`RequestContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Entity,
    EntityWriter,
    ResponseBody,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Entity => "entity",
            Slot::EntityWriter => "entity writer",
            Slot::ResponseBody => "response body",
        };
        f.write_str(name)
    }
}

/// One step of request processing.
#[async_trait]
pub trait RestHandler: Send + Sync {
    /// Short name used in logs and wiring errors.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Slots this stage writes.
    fn produces(&self) -> &'static [Slot] {
        &[]
    }

    /// Slots this stage expects an earlier stage to have written.
    fn consumes(&self) -> &'static [Slot] {
        &[]
    }

    /// Runs the stage against `ctx`.
    async fn handle(&self, ctx: &mut RequestContext) -> Result<(), PipelineError>;

    /// Runs the stage against a context that may be missing.
    ///
    /// A missing context fails with [`PipelineError::InvalidArgument`] and
    /// nothing is mutated.
    async fn dispatch(&self, ctx: Option<&mut RequestContext>) -> Result<(), PipelineError> {
        match ctx {
            Some(ctx) => self.handle(ctx).await,
            None => Err(PipelineError::InvalidArgument(format!(
                "{} invoked without a request context",
                self.name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Relies on every provided method.
    struct Passthrough;

    #[async_trait]
    impl RestHandler for Passthrough {
        async fn handle(&self, _ctx: &mut RequestContext) -> Result<(), PipelineError> {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_the_type_name() {
        assert_eq!(Passthrough.name(), "Passthrough");
        assert!(Passthrough.produces().is_empty());
        assert!(Passthrough.consumes().is_empty());
    }

    #[tokio::test]
    async fn dispatch_without_context_names_the_stage() {
        let err = Passthrough.dispatch(None).await.unwrap_err();
        match err {
            PipelineError::InvalidArgument(msg) => {
                assert_eq!(msg, "Passthrough invoked without a request context");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn slot_names() {
        assert_eq!(Slot::Entity.to_string(), "entity");
        assert_eq!(Slot::EntityWriter.to_string(), "entity writer");
        assert_eq!(Slot::ResponseBody.to_string(), "response body");
    }
}

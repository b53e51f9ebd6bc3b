//! # Pipeline Driver
//!
//! A [`Pipeline`] is an ordered list of [`RestHandler`]s. For each request the
//! driver walks the list, handing every stage the same exclusive
//! `&mut RequestContext`, so a stage always observes everything earlier stages
//! wrote.
//!
//! ## Wiring check
//!
//! Pipelines are only built through [`PipelineBuilder`]. `build()` walks the
//! stages in order and fails with [`PipelineError::Configuration`] if a stage
//! consumes a [`Slot`] that no earlier stage produces. A
//! [`ResponseWriterHandler`](crate::handlers::ResponseWriterHandler) without an
//! [`EntityWriterHandler`](crate::handlers::EntityWriterHandler) in front of it
//! is therefore rejected at startup, not on the first request.
//!
//! ## Errors
//!
//! The first stage error stops the run and is returned unchanged from
//! [`Pipeline::run`]. [`Pipeline::handle`] additionally turns it into a
//! [`Response`] using [`PipelineError::status`].

use crate::context::{RequestContext, Response};
use crate::error::PipelineError;
use crate::handler::{RestHandler, Slot};
use crate::writer::TEXT_PLAIN;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info_span, warn, Instrument};

/// Collects stages and validates their order.
#[derive(Default)]
pub struct PipelineBuilder {
    name: Option<String>,
    stages: Vec<Arc<dyn RestHandler>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used in log spans (e.g. the route it serves).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a stage.
    pub fn then(mut self, stage: impl RestHandler + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Appends a stage that is already shared with other pipelines.
    pub fn then_shared(mut self, stage: Arc<dyn RestHandler>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let name = self.name.unwrap_or_else(|| "pipeline".to_string());
        if self.stages.is_empty() {
            return Err(PipelineError::Configuration(format!(
                "{name}: a pipeline needs at least one stage"
            )));
        }

        let mut available: HashSet<Slot> = HashSet::new();
        for (position, stage) in self.stages.iter().enumerate() {
            if let Some(missing) = stage
                .consumes()
                .iter()
                .find(|slot| !available.contains(*slot))
            {
                return Err(PipelineError::Configuration(format!(
                    "{name}: stage {position} ({}) reads the {missing} slot but no earlier stage writes it",
                    stage.name()
                )));
            }
            available.extend(stage.produces().iter().copied());
        }

        debug!(pipeline = %name, stages = self.stages.len(), "Pipeline built");
        Ok(Pipeline {
            name,
            stages: self.stages,
        })
    }
}

/// An ordered, validated chain of stages.
///
/// Cheap to share: wrap it in an `Arc` and call [`run`](Pipeline::run) from as
/// many tasks as needed, each with its own context.
pub struct Pipeline {
    name: String,
    stages: Vec<Arc<dyn RestHandler>>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stages; a built pipeline always has at least one.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Runs every stage in order against `ctx`.
    pub async fn run(&self, ctx: &mut RequestContext) -> Result<(), PipelineError> {
        let span = info_span!(
            "pipeline",
            pipeline = %self.name,
            method = %ctx.method(),
            path = %ctx.path()
        );
        async {
            for stage in &self.stages {
                debug!(stage = stage.name(), "Running stage");
                if let Err(e) = stage.handle(ctx).await {
                    warn!(stage = stage.name(), error = %e, "Stage failed");
                    return Err(e);
                }
            }
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Runs the pipeline and turns the outcome into a [`Response`].
    pub async fn handle(&self, mut ctx: RequestContext) -> Response {
        match self.run(&mut ctx).await {
            Ok(()) => ctx.into_response(),
            Err(e) => error_response(&e),
        }
    }
}

/// Renders `error` as a plain-text response.
pub fn error_response(error: &PipelineError) -> Response {
    Response {
        status: error.status(),
        content_type: Some(TEXT_PLAIN.to_string()),
        body: error.to_string().into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{EntityWriterHandler, ResponseWriterHandler};
    use crate::writer::JsonEntityWriter;

    #[test]
    fn empty_pipeline_is_rejected() {
        let err = PipelineBuilder::new().named("empty").build().err().unwrap();
        assert!(matches!(err, PipelineError::Configuration(ref msg) if msg.starts_with("empty:")));
    }

    #[test]
    fn reader_before_writer_is_rejected() {
        let err = Pipeline::builder()
            .then(ResponseWriterHandler)
            .then(EntityWriterHandler::new(Arc::new(JsonEntityWriter)))
            .build()
            .err()
            .unwrap();

        match err {
            PipelineError::Configuration(msg) => {
                assert!(msg.contains("ResponseWriterHandler"), "{msg}");
                assert!(msg.contains("entity writer"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn writer_before_reader_builds() {
        let pipeline = Pipeline::builder()
            .named("ok")
            .then(EntityWriterHandler::new(Arc::new(JsonEntityWriter)))
            .then(ResponseWriterHandler)
            .build()
            .unwrap();
        assert_eq!(pipeline.stage_count(), 2);
        assert_eq!(pipeline.name(), "ok");
    }

    #[test]
    fn error_response_uses_status_and_message() {
        let response = error_response(&PipelineError::InvalidArgument("no context".into()));
        assert_eq!(response.status, 400);
        assert_eq!(response.content_type.as_deref(), Some("text/plain"));
        assert_eq!(response.body_text(), "Invalid argument: no context");
    }
}

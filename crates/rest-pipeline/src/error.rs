//! # Pipeline Errors
//!
//! This module defines the error types shared by every stage and by the
//! pipeline driver. Stages never recover from errors locally; they return them
//! with `?` and the driver alone decides how they become a response.

/// Errors that can occur while wiring or running a request pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Invalid wiring, detected when stages or pipelines are built.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A stage was invoked with an argument it cannot work with
    /// (e.g. no request context at all).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A stage needed the entity writer slot but nothing filled it.
    #[error("No entity writer installed on the request context")]
    MissingEntityWriter,

    /// The installed entity writer failed to render the entity.
    #[error("Entity write failed: {0}")]
    Write(#[from] WriteError),

    /// No resource matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An error raised by application resource code.
    #[error("Resource error: {0}")]
    Resource(Box<dyn std::error::Error + Send + Sync>),
}

impl PipelineError {
    /// HTTP status the driver uses when this error ends a request.
    pub fn status(&self) -> u16 {
        match self {
            PipelineError::InvalidArgument(_) => 400,
            PipelineError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

/// Errors produced by [`EntityWriter`](crate::writer::EntityWriter) implementations.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(PipelineError::InvalidArgument("x".into()).status(), 400);
        assert_eq!(PipelineError::NotFound("/nope".into()).status(), 404);
        assert_eq!(PipelineError::MissingEntityWriter.status(), 500);
        assert_eq!(PipelineError::Configuration("x".into()).status(), 500);
    }

    #[test]
    fn write_error_converts() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PipelineError = WriteError::from(json).into();

        assert!(matches!(err, PipelineError::Write(WriteError::Json(_))));
        assert_eq!(err.status(), 500);
        let message = err.to_string();
        let prefix = "Entity write failed: JSON encoding failed:";
        assert!(message.starts_with(prefix), "{message}");
    }
}

//! # REST Pipeline
//!
//! This crate provides the building blocks of a REST request-processing
//! pipeline: a per-request [`RequestContext`], a uniform [`RestHandler`] stage
//! trait, a [`Pipeline`] driver that runs stages in order, and the stages that
//! take a request from "resource matched" to "response body written".
//!
//! ## Architecture Overview
//!
//! 1. **State** ([`RequestContext`]) - named slots written by one stage and read
//!    by later ones.
//! 2. **Stages** ([`RestHandler`]) - one step each; stateless across requests
//!    apart from what they were configured with.
//! 3. **Driver** ([`Pipeline`]) - owns the ordered stages, runs them, maps
//!    errors to a [`Response`].
//!
//! ## Entity Writers
//!
//! Rendering the response entity is delegated to an [`EntityWriter`]. The
//! writer is picked when the pipeline is wired and attached to each request by
//! [`EntityWriterHandler`]; [`ResponseWriterHandler`] reads it back and renders
//! the body.
//!
//! ```rust
//! use rest_pipeline::{
//!     EntityWriterHandler, JsonEntityWriter, Pipeline, RequestContext,
//!     ResourceInvocationHandler, ResponseWriterHandler,
//! };
//! use rest_pipeline::mock::StaticResource;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = Pipeline::builder()
//!         .named("GET /hello")
//!         .then(ResourceInvocationHandler::new(Arc::new(StaticResource::new(json!({"hello": "world"})))))
//!         .then(EntityWriterHandler::new(Arc::new(JsonEntityWriter)))
//!         .then(ResponseWriterHandler)
//!         .build()
//!         .unwrap();
//!
//!     let response = pipeline.handle(RequestContext::new("GET", "/hello")).await;
//!     assert_eq!(response.status, 200);
//!     assert_eq!(response.body_text(), r#"{"hello":"world"}"#);
//! }
//! ```
//!
//! ## Wiring Invariant
//!
//! Every stage declares the [`Slot`]s it produces and consumes.
//! [`PipelineBuilder::build`] refuses a chain in which a stage reads a slot no
//! earlier stage writes, so downstream stages may rely on their inputs being
//! present.
//!
//! ## Concurrency Model
//!
//! - A [`Pipeline`] and its stages are `Send + Sync` and shared across tasks.
//! - Each request gets its own [`RequestContext`], borrowed mutably by one stage
//!   at a time.
//! - Stage configuration (e.g. the writer inside [`EntityWriterHandler`]) is
//!   immutable after construction, so no locks are involved.
//!
//! ## Testing
//!
//! The [`mock`] module provides a recording writer, a slot-probing stage and a
//! fixed-entity resource for tests.

pub mod context;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod mock;
pub mod pipeline;
pub mod tracing;
pub mod writer;

// Re-export core types for convenience
pub use context::{RequestContext, Response};
pub use error::{PipelineError, WriteError};
pub use handler::{RestHandler, Slot};
pub use handlers::{
    EntityWriterHandler, ResourceInvocationHandler, ResourceMethod, ResponseWriterHandler,
};
pub use pipeline::{error_response, Pipeline, PipelineBuilder};
pub use writer::{EntityWriter, JsonEntityWriter, TextEntityWriter};

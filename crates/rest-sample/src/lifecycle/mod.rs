//! # Application Lifecycle & Routing
//!
//! Stages are simple on their own; wiring them into pipelines and pipelines
//! into routes is where this module comes in.
//!
//! **Key Responsibilities:**
//! 1. **Writer creation** - build each entity writer once and share it
//! 2. **Pipeline wiring** - every route gets invoke -> attach writer -> write
//! 3. **Routing** - match method and path, fill the target slot, run the pipeline
//!
//! Wiring errors surface from [`Application::new`] as
//! [`PipelineError::Configuration`](rest_pipeline::PipelineError::Configuration),
//! before any request is served.

pub mod application;
pub mod router;

pub use application::*;
pub use router::*;

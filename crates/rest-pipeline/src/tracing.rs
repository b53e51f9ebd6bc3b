//! # Observability & Tracing
//!
//! Every stage and the driver log through the `tracing` crate with structured
//! fields. [`setup_tracing`] installs a subscriber for binaries; libraries and
//! tests never call it.
//!
//! ## What Gets Traced
//!
//! - **Pipeline build**: name and stage count (`debug`)
//! - **Request run**: one `pipeline` span per request carrying the pipeline
//!   name, method and path
//! - **Stages**: each stage start (`debug`), failures with the error (`warn`)
//! - **Entity writer attachment**: the attached media type (`trace`, so the
//!   hot path stays silent unless asked)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request spans and failures
//! RUST_LOG=info cargo run -p rest-sample
//!
//! # Every stage
//! RUST_LOG=debug cargo run -p rest-sample
//!
//! # Include entity writer attachment
//! RUST_LOG=rest_pipeline=trace cargo run -p rest-sample
//! ```
//!
//! With `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG pipeline{pipeline="GET /greeting" method=GET path=/greeting}: Running stage stage="ResourceInvocationHandler"
//! DEBUG pipeline{pipeline="GET /greeting" method=GET path=/greeting}: Resource invoked path="/greeting" has_entity=true
//! DEBUG pipeline{pipeline="GET /greeting" method=GET path=/greeting}: Running stage stage="EntityWriterHandler"
//! DEBUG pipeline{pipeline="GET /greeting" method=GET path=/greeting}: Running stage stage="ResponseWriterHandler"
//! DEBUG pipeline{pipeline="GET /greeting" method=GET path=/greeting}: Entity written media_type="application/json" bytes=27
//! ```

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

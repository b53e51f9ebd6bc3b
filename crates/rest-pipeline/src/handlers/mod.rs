//! Built-in pipeline stages.
//!
//! A typical chain is:
//!
//! 1. [`ResourceInvocationHandler`] - fills the entity slot
//! 2. [`EntityWriterHandler`] - fills the entity writer slot
//! 3. [`ResponseWriterHandler`] - reads both and renders the body

pub mod entity_writer;
pub mod invocation;
pub mod response_writer;

pub use entity_writer::EntityWriterHandler;
pub use invocation::{ResourceInvocationHandler, ResourceMethod};
pub use response_writer::ResponseWriterHandler;

//! # REST Pipeline Sample
//!
//! A small application built on [`rest_pipeline`]:
//!
//! - **[model]**: DTOs returned by the resources ([`Greeting`](model::Greeting), [`Item`](model::Item)).
//! - **[resources]**: [`ResourceMethod`](rest_pipeline::ResourceMethod) implementations.
//! - **[lifecycle]**: the [`Application`](lifecycle::Application) that wires resources,
//!   entity writers and routes together.

pub mod lifecycle;
pub mod model;
pub mod resources;

//! # Request Context
//!
//! The [`RequestContext`] is the per-request state that travels through the
//! pipeline. The driver creates one per request and hands an exclusive `&mut`
//! borrow to each stage in turn, so stages never need locks to touch it.
//!
//! State is split into named slots. A slot is written by one stage and read by
//! later ones; which stage writes and which stage reads each slot is declared on
//! the [`RestHandler`](crate::handler::RestHandler) and checked when the
//! pipeline is built.

use crate::writer::EntityWriter;
use serde_json::Value;
use std::sync::Arc;

/// Per-request mutable state shared between pipeline stages.
#[derive(Debug)]
pub struct RequestContext {
    method: String,
    path: String,
    target: Option<String>,
    entity: Option<Value>,
    entity_writer: Option<Arc<dyn EntityWriter>>,
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            target: None,
            entity: None,
            entity_writer: None,
            status: 200,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the resource matched by routing, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
    }

    /// The value a resource returned, waiting to be written.
    pub fn entity(&self) -> Option<&Value> {
        self.entity.as_ref()
    }

    pub fn set_entity(&mut self, entity: Option<Value>) {
        self.entity = entity;
    }

    /// The writer that will render the response entity.
    pub fn entity_writer(&self) -> Option<&Arc<dyn EntityWriter>> {
        self.entity_writer.as_ref()
    }

    /// Installs `writer`, replacing whatever was there.
    pub fn set_entity_writer(&mut self, writer: Arc<dyn EntityWriter>) {
        self.entity_writer = Some(writer);
    }

    pub fn take_entity_writer(&mut self) -> Option<Arc<dyn EntityWriter>> {
        self.entity_writer.take()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }

    /// Consumes the context, keeping only what goes back to the caller.
    pub fn into_response(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

/// The outcome of a request once the pipeline has finished with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

//! Calls the application resource and stores its result as the response entity.

use crate::context::RequestContext;
use crate::error::PipelineError;
use crate::handler::{RestHandler, Slot};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Application code behind a route.
///
/// Returning `Ok(None)` means "no content".
#[async_trait]
pub trait ResourceMethod: Send + Sync {
    async fn invoke(&self, ctx: &RequestContext) -> Result<Option<Value>, PipelineError>;
}

/// Invokes a [`ResourceMethod`] and fills the entity slot.
#[derive(Clone)]
pub struct ResourceInvocationHandler {
    method: Arc<dyn ResourceMethod>,
}

impl ResourceInvocationHandler {
    pub fn new(method: Arc<dyn ResourceMethod>) -> Self {
        Self { method }
    }
}

#[async_trait]
impl RestHandler for ResourceInvocationHandler {
    fn name(&self) -> &'static str {
        "ResourceInvocationHandler"
    }

    fn produces(&self) -> &'static [Slot] {
        &[Slot::Entity]
    }

    async fn handle(&self, ctx: &mut RequestContext) -> Result<(), PipelineError> {
        let entity = self.method.invoke(ctx).await?;
        debug!(
            path = ctx.path(),
            has_entity = entity.is_some(),
            "Resource invoked"
        );
        ctx.set_entity(entity);
        Ok(())
    }
}

use async_trait::async_trait;
use rest_pipeline::{PipelineError, RequestContext, ResourceMethod};
use serde_json::Value;

/// `GET /health`: plain `ok`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthResource;

#[async_trait]
impl ResourceMethod for HealthResource {
    async fn invoke(&self, _ctx: &RequestContext) -> Result<Option<Value>, PipelineError> {
        Ok(Some(Value::String("ok".to_string())))
    }
}

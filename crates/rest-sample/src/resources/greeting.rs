use crate::model::Greeting;
use async_trait::async_trait;
use rest_pipeline::{PipelineError, RequestContext, ResourceMethod};
use serde_json::Value;

/// `GET /greeting`: a JSON greeting.
#[derive(Debug, Clone)]
pub struct GreetingResource {
    name: String,
}

impl GreetingResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl ResourceMethod for GreetingResource {
    async fn invoke(&self, _ctx: &RequestContext) -> Result<Option<Value>, PipelineError> {
        let greeting = Greeting::for_name(&self.name);
        match serde_json::to_value(greeting) {
            Ok(entity) => Ok(Some(entity)),
            Err(e) => Err(PipelineError::Resource(Box::new(e))),
        }
    }
}

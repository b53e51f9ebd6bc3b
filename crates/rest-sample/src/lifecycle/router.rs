use rest_pipeline::{error_response, Pipeline, PipelineError, RequestContext, Response};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a route matches a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// The whole path must be equal.
    Exact(String),
    /// The path must start with the prefix and carry at least one more byte.
    Prefix(String),
}

impl PathPattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == p,
            PathPattern::Prefix(p) => path.len() > p.len() && path.starts_with(p.as_str()),
        }
    }
}

/// A method + path pattern bound to one pipeline.
pub struct Route {
    pub name: String,
    pub method: String,
    pub pattern: PathPattern,
    pub pipeline: Arc<Pipeline>,
}

/// Maps requests to pipelines, first match wins.
///
/// Routing is the stage before every pipeline: on a match it records the
/// route name in the context's target slot and hands the context to the
/// route's pipeline.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(
        mut self,
        name: impl Into<String>,
        method: impl Into<String>,
        pattern: PathPattern,
        pipeline: Pipeline,
    ) -> Self {
        self.routes.push(Route {
            name: name.into(),
            method: method.into(),
            pattern,
            pipeline: Arc::new(pipeline),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn find(&self, method: &str, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.method.eq_ignore_ascii_case(method) && r.pattern.matches(path))
    }

    /// Routes and runs one request.
    pub async fn dispatch(&self, method: &str, path: &str) -> Response {
        let Some(route) = self.find(method, path) else {
            warn!(method, path, "No route matched");
            return error_response(&PipelineError::NotFound(format!("{method} {path}")));
        };

        debug!(route = %route.name, method, path, "Route matched");
        let mut ctx = RequestContext::new(method, path);
        ctx.set_target(route.name.clone());
        route.pipeline.handle(ctx).await
    }
}

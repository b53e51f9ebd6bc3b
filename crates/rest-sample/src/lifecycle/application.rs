use super::router::{PathPattern, Router};
use crate::resources::catalog::{sample_catalog, Catalog, ITEMS_PREFIX};
use crate::resources::{CatalogResource, GreetingResource, HealthResource, ItemListResource};
use rest_pipeline::{
    EntityWriter, EntityWriterHandler, JsonEntityWriter, Pipeline, PipelineError,
    ResourceInvocationHandler, ResourceMethod, Response, ResponseWriterHandler, TextEntityWriter,
};
use std::sync::Arc;
use tracing::info;

/// The sample application: every route wired to its pipeline.
///
/// `Application` is responsible for:
/// - **Writer instances**: one JSON and one text writer, shared by every
///   pipeline that renders that media type
/// - **Pipeline wiring**: invoke resource, attach writer, write response
/// - **Routing**: mapping method + path to a pipeline
///
/// # Example
///
/// ```ignore
/// let app = Application::new()?;
/// let response = app.handle("GET", "/items/1").await;
/// assert_eq!(response.status, 200);
/// ```
pub struct Application {
    router: Router,
    catalog: Catalog,
}

impl Application {
    /// Wires the application around the demo catalog.
    pub fn new() -> Result<Self, PipelineError> {
        Self::with_catalog(sample_catalog())
    }

    /// Wires the application around `catalog`.
    ///
    /// Fails with [`PipelineError::Configuration`] if any pipeline is
    /// mis-wired.
    pub fn with_catalog(catalog: Catalog) -> Result<Self, PipelineError> {
        let json: Arc<dyn EntityWriter> = Arc::new(JsonEntityWriter);
        let text: Arc<dyn EntityWriter> = Arc::new(TextEntityWriter);

        let greeting = GreetingResource::new("world");
        let list = ItemListResource::new(catalog.clone());
        let get = CatalogResource::get(catalog.clone());
        let delete = CatalogResource::delete(catalog.clone());

        let greeting_pipeline = rendered_with("GET /greeting", greeting, &json)?;
        let health_pipeline = rendered_with("GET /health", HealthResource, &text)?;
        let list_pipeline = rendered_with("GET /items", list, &json)?;
        let get_pipeline = rendered_with("GET /items/{id}", get, &json)?;
        let delete_pipeline = rendered_with("DELETE /items/{id}", delete, &json)?;

        let router = Router::new()
            .route(
                "greeting",
                "GET",
                PathPattern::Exact("/greeting".into()),
                greeting_pipeline,
            )
            .route(
                "health",
                "GET",
                PathPattern::Exact("/health".into()),
                health_pipeline,
            )
            .route(
                "items.list",
                "GET",
                PathPattern::Exact("/items".into()),
                list_pipeline,
            )
            .route(
                "items.get",
                "GET",
                PathPattern::Prefix(ITEMS_PREFIX.into()),
                get_pipeline,
            )
            .route(
                "items.delete",
                "DELETE",
                PathPattern::Prefix(ITEMS_PREFIX.into()),
                delete_pipeline,
            );

        info!(routes = router.len(), "Application wired");
        Ok(Self { router, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Serves one request.
    pub async fn handle(&self, method: &str, path: &str) -> Response {
        self.router.dispatch(method, path).await
    }
}

/// resource -> attach `writer` -> write response
fn rendered_with(
    name: &str,
    resource: impl ResourceMethod + 'static,
    writer: &Arc<dyn EntityWriter>,
) -> Result<Pipeline, PipelineError> {
    Pipeline::builder()
        .named(name)
        .then(ResourceInvocationHandler::new(Arc::new(resource)))
        .then(EntityWriterHandler::new(Arc::clone(writer)))
        .then(ResponseWriterHandler)
        .build()
}

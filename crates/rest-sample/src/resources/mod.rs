//! Application resources: the code the pipelines call once a route matched.

pub mod catalog;
pub mod error;
pub mod greeting;
pub mod health;

pub use catalog::{CatalogResource, ItemListResource};
pub use error::CatalogError;
pub use greeting::GreetingResource;
pub use health::HealthResource;

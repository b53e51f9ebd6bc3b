//! Error types for the catalog resources.

use crate::model::ItemId;
use rest_pipeline::PipelineError;
use thiserror::Error;

/// Errors that can occur while serving catalog requests.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No item with this id exists.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// The path segment is not a valid item id.
    #[error("Invalid item id: {0:?}")]
    InvalidId(String),

    /// The item could not be turned into a response entity.
    #[error("Item encoding error: {0}")]
    Encoding(String),
}

impl From<CatalogError> for PipelineError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => PipelineError::NotFound(id.to_string()),
            CatalogError::InvalidId(_) => PipelineError::InvalidArgument(e.to_string()),
            CatalogError::Encoding(_) => PipelineError::Resource(Box::new(e)),
        }
    }
}

//! Catalog resources backed by an in-memory item map.
//!
//! The map is shared by every catalog route behind a `tokio::sync::RwLock`:
//! reads take the read half, `DELETE` takes the write half.

use super::error::CatalogError;
use crate::model::{Item, ItemId};
use async_trait::async_trait;
use rest_pipeline::{PipelineError, RequestContext, ResourceMethod};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared item storage.
pub type Catalog = Arc<RwLock<HashMap<ItemId, Item>>>;

pub const ITEMS_PREFIX: &str = "/items/";

/// Builds a catalog holding `items`.
pub fn catalog_of(items: impl IntoIterator<Item = Item>) -> Catalog {
    let map = items.into_iter().map(|item| (item.id, item)).collect();
    Arc::new(RwLock::new(map))
}

/// The items the demo starts with.
pub fn sample_catalog() -> Catalog {
    catalog_of([
        Item::new(1, "Widget", 25.5),
        Item::new(2, "Gadget", 99.0),
        Item::new(3, "Gizmo", 4.25),
    ])
}

fn item_id_from_path(path: &str) -> Result<ItemId, CatalogError> {
    let raw = path.strip_prefix(ITEMS_PREFIX).unwrap_or(path);
    raw.parse::<u32>()
        .map(ItemId)
        .map_err(|_| CatalogError::InvalidId(raw.to_string()))
}

fn to_entity(value: impl serde::Serialize) -> Result<Value, CatalogError> {
    serde_json::to_value(value).map_err(|e| CatalogError::Encoding(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogOp {
    Get,
    Delete,
}

/// `GET /items/{id}` and `DELETE /items/{id}`.
#[derive(Debug, Clone)]
pub struct CatalogResource {
    catalog: Catalog,
    op: CatalogOp,
}

impl CatalogResource {
    pub fn get(catalog: Catalog) -> Self {
        Self {
            catalog,
            op: CatalogOp::Get,
        }
    }

    pub fn delete(catalog: Catalog) -> Self {
        Self {
            catalog,
            op: CatalogOp::Delete,
        }
    }
}

#[async_trait]
impl ResourceMethod for CatalogResource {
    async fn invoke(&self, ctx: &RequestContext) -> Result<Option<Value>, PipelineError> {
        let id = item_id_from_path(ctx.path())?;
        match self.op {
            CatalogOp::Get => {
                let catalog = self.catalog.read().await;
                let item = catalog.get(&id).ok_or(CatalogError::NotFound(id))?;
                debug!(%id, "Item found");
                Ok(Some(to_entity(item)?))
            }
            CatalogOp::Delete => {
                let removed = self.catalog.write().await.remove(&id);
                if removed.is_none() {
                    return Err(CatalogError::NotFound(id).into());
                }
                info!(%id, "Item deleted");
                Ok(None)
            }
        }
    }
}

/// `GET /items`: every item, ordered by id.
#[derive(Debug, Clone)]
pub struct ItemListResource {
    catalog: Catalog,
}

impl ItemListResource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ResourceMethod for ItemListResource {
    async fn invoke(&self, _ctx: &RequestContext) -> Result<Option<Value>, PipelineError> {
        let catalog = self.catalog.read().await;
        let mut items: Vec<&Item> = catalog.values().collect();
        items.sort_by_key(|item| item.id.0);
        Ok(Some(to_entity(items)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_item_ids() {
        assert_eq!(item_id_from_path("/items/42"), Ok(ItemId(42)));
        assert_eq!(
            item_id_from_path("/items/abc"),
            Err(CatalogError::InvalidId("abc".into()))
        );
    }

    #[tokio::test]
    async fn get_returns_item_entity() {
        let resource = CatalogResource::get(sample_catalog());
        let ctx = RequestContext::new("GET", "/items/2");

        let entity = resource.invoke(&ctx).await.unwrap();

        let expected = json!({"id": 2, "name": "Gadget", "price": 99.0});
        assert_eq!(entity, Some(expected));
    }

    #[tokio::test]
    async fn delete_removes_then_reports_missing() {
        let catalog = sample_catalog();
        let resource = CatalogResource::delete(catalog.clone());
        let ctx = RequestContext::new("DELETE", "/items/1");

        assert_eq!(resource.invoke(&ctx).await.unwrap(), None);
        assert_eq!(catalog.read().await.len(), 2);

        let err = resource.invoke(&ctx).await.unwrap_err();
        assert!(matches!(err, PipelineError::NotFound(ref id) if id == "item_1"));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let resource = ItemListResource::new(sample_catalog());
        let entity = resource
            .invoke(&RequestContext::new("GET", "/items"))
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<u64> = entity
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

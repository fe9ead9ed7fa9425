// src/application/state.rs

use std::sync::Arc;

use crate::catalog_data;
use crate::events::EventBus;
use crate::repositories::{MemoryProductRepository, ProductRepository};
use crate::services::{CatalogService, EditorService};

/// Application state handed to the embedding UI shell.
/// All fields are Arc-wrapped for sharing across UI event handlers.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    pub editor_service: Arc<EditorService>,
}

/// Wire the whole core: event bus, seeded in-memory collection, catalog and
/// editor services. This is the one place construction order lives.
pub fn bootstrap() -> AppState {
    let event_bus = Arc::new(EventBus::new());

    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(MemoryProductRepository::with_seed(catalog_data::seed_products()));

    let catalog_service = Arc::new(CatalogService::new(product_repo, event_bus.clone()));

    let default_category = catalog_data::categories().remove(0);
    let editor_service = Arc::new(EditorService::new(catalog_service.clone(), default_category));

    AppState {
        event_bus,
        catalog_service,
        editor_service,
    }
}

// src/services/catalog_service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{validate_draft, Category, Product, ProductDraft};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, NotificationKind, NotificationRequested, ProductCreated, ProductRemoved,
    ProductUpdated,
};
use crate::repositories::ProductRepository;

const CREATED_MESSAGE: &str = "Product has been added successfully!";
const UPDATED_MESSAGE: &str = "Product has been edited successfully!";
const REMOVED_MESSAGE: &str = "Product has been deleted successfully!";

/// Commit request for a new product. `colors` is the effective color set
/// already reconciled by the draft layer; `category` is the current
/// selection in the category picker.
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    pub draft: ProductDraft,
    pub colors: Vec<String>,
    pub category: Category,
}

/// Commit request replacing an existing product. Targeting is by id, never
/// by position, so the target stays valid even if the collection changed
/// between "begin edit" and "commit edit".
#[derive(Debug, Clone)]
pub struct UpdateProductRequest {
    pub product_id: Uuid,
    pub draft: ProductDraft,
    pub colors: Vec<String>,
    pub category: Category,
}

/// Orchestrates validated writes against the product collection.
///
/// Every mutation is total except the commits, which refuse to proceed
/// while the draft's error map is non-empty and hand that map back to the
/// caller instead.
pub struct CatalogService {
    product_repo: Arc<dyn ProductRepository>,
    event_bus: Arc<EventBus>,
}

impl CatalogService {
    pub fn new(product_repo: Arc<dyn ProductRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            product_repo,
            event_bus,
        }
    }

    /// Validate and commit a create draft. On success the new record is
    /// prepended (most-recent-first) and returned with its fresh id.
    pub fn commit_create(&self, request: CreateProductRequest) -> AppResult<Product> {
        let errors = validate_draft(&request.draft, &request.colors);
        if !errors.is_clean() {
            log::debug!("create commit refused by validation");
            return Err(AppError::Validation(errors));
        }

        let product = Product::from_draft(&request.draft, request.colors, request.category);
        self.product_repo.insert_front(&product)?;

        log::info!("product created: {}", product);
        self.event_bus
            .emit(ProductCreated::new(product.id, product.title.clone()));
        self.event_bus
            .emit(NotificationRequested::new(NotificationKind::Create, CREATED_MESSAGE));

        Ok(product)
    }

    /// Validate and commit an edit draft against the record with the
    /// request's id. The replacement keeps that id and the record's
    /// position in the collection.
    pub fn commit_edit(&self, request: UpdateProductRequest) -> AppResult<Product> {
        let errors = validate_draft(&request.draft, &request.colors);
        if !errors.is_clean() {
            log::debug!("edit commit refused by validation");
            return Err(AppError::Validation(errors));
        }

        let original = self
            .product_repo
            .get_by_id(request.product_id)?
            .ok_or(AppError::NotFound)?;

        let replacement = original.replaced_with(&request.draft, request.colors, request.category);
        self.product_repo.replace(&replacement)?;

        log::info!("product updated: {}", replacement);
        self.event_bus.emit(ProductUpdated::new(replacement.id));
        self.event_bus
            .emit(NotificationRequested::new(NotificationKind::Edit, UPDATED_MESSAGE));

        Ok(replacement)
    }

    /// Remove by id. An absent id is an idempotent no-op: the collection is
    /// unchanged and no notification fires. Returns whether a record was
    /// actually removed.
    pub fn remove_product(&self, product_id: Uuid) -> AppResult<bool> {
        let removed = self.product_repo.remove(product_id)?;

        if removed {
            log::info!("product removed: {}", product_id);
            self.event_bus.emit(ProductRemoved::new(product_id));
            self.event_bus
                .emit(NotificationRequested::new(NotificationKind::Delete, REMOVED_MESSAGE));
        }

        Ok(removed)
    }

    pub fn get_product(&self, product_id: Uuid) -> AppResult<Option<Product>> {
        self.product_repo.get_by_id(product_id)
    }

    pub fn list_products(&self) -> AppResult<Vec<Product>> {
        self.product_repo.list_all()
    }

    pub fn product_count(&self) -> AppResult<usize> {
        self.product_repo.count()
    }
}

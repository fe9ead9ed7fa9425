// src/repositories/product_repository.rs
//
// Product collection store: an ordered sequence of committed records,
// keyed by unique id, most-recent-first.

use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::{DomainError, Product};
use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// The committed product collection.
///
/// Records are never mutated in place: `replace` swaps the whole value at
/// the record's current position. `remove` of an absent id is an idempotent
/// no-op.
#[cfg_attr(test, automock)]
pub trait ProductRepository: Send + Sync {
    /// Prepend a freshly committed product (most-recent-first ordering).
    /// Refuses a duplicate id; the collection never holds two records with
    /// the same identity.
    fn insert_front(&self, product: &Product) -> AppResult<()>;

    /// Replace the record carrying `product.id`, keeping its position.
    fn replace(&self, product: &Product) -> AppResult<()>;

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    fn list_all(&self) -> AppResult<Vec<Product>>;

    /// Remove by id. Returns whether a record was actually removed; an
    /// absent id leaves the collection unchanged and is not an error.
    fn remove(&self, id: Uuid) -> AppResult<bool>;

    fn exists(&self, id: Uuid) -> AppResult<bool>;

    fn count(&self) -> AppResult<usize>;
}

/// In-memory implementation. The entire collection is owned by one logical
/// session and lost on restart, which is the intended lifecycle.
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }

    /// Start from an initial seed list (already in display order).
    pub fn with_seed(seed: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(seed),
        }
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for MemoryProductRepository {
    fn insert_front(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().unwrap();

        if products.iter().any(|p| p.id == product.id) {
            return Err(AppError::Domain(DomainError::InvariantViolation(format!(
                "Duplicate product id {}",
                product.id
            ))));
        }

        products.insert(0, product.clone());
        Ok(())
    }

    fn replace(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().unwrap();

        let position = products
            .iter()
            .position(|p| p.id == product.id)
            .ok_or(AppError::NotFound)?;

        products[position] = product.clone();
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let products = self.products.read().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().unwrap().clone())
    }

    fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut products = self.products.write().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        let products = self.products.read().unwrap();
        Ok(products.iter().any(|p| p.id == id))
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.products.read().unwrap().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ProductDraft};

    fn product(title: &str) -> Product {
        let draft = ProductDraft {
            title: title.to_string(),
            description: "A perfectly ordinary test product.".to_string(),
            image_url: "https://example.com/p.png".to_string(),
            price: "10".to_string(),
            ..Default::default()
        };
        Product::from_draft(&draft, vec!["#111827".to_string()], Category::default())
    }

    #[test]
    fn test_insert_front_is_most_recent_first() {
        let repo = MemoryProductRepository::new();
        let a = product("Product A with title");
        let b = product("Product B with title");

        repo.insert_front(&a).unwrap();
        repo.insert_front(&b).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, b.id);
        assert_eq!(all[1].id, a.id);
    }

    #[test]
    fn test_duplicate_id_is_refused() {
        let repo = MemoryProductRepository::new();
        let a = product("Product A with title");

        repo.insert_front(&a).unwrap();
        assert!(repo.insert_front(&a).is_err());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_keeps_position_and_id() {
        let repo = MemoryProductRepository::new();
        let a = product("Product A with title");
        let b = product("Product B with title");
        repo.insert_front(&a).unwrap();
        repo.insert_front(&b).unwrap();

        let mut replacement = b.clone();
        replacement.title = "Product B with another title".to_string();
        repo.replace(&replacement).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all[0].id, b.id);
        assert_eq!(all[0].title, "Product B with another title");
        assert_eq!(all[1].id, a.id);
    }

    #[test]
    fn test_replace_unknown_id_is_not_found() {
        let repo = MemoryProductRepository::new();
        let a = product("Product A with title");
        assert!(matches!(repo.replace(&a), Err(AppError::NotFound)));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let repo = MemoryProductRepository::new();
        let a = product("Product A with title");
        let b = product("Product B with title");
        repo.insert_front(&a).unwrap();
        repo.insert_front(&b).unwrap();

        assert!(repo.remove(a.id).unwrap());
        assert_eq!(repo.count().unwrap(), 1);

        // Absent id: unchanged collection, no error
        assert!(!repo.remove(a.id).unwrap());
        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, b.id);
    }
}

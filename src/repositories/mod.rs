// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data holders
// - NO business logic beyond identity uniqueness
// - NO validation
// - NO event emission

pub mod product_repository;

pub use product_repository::{MemoryProductRepository, ProductRepository};

#[cfg(test)]
pub use product_repository::MockProductRepository;

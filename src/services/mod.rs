// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod editor_service;

#[cfg(test)]
mod editor_service_tests;

// Re-export all services and their types
pub use catalog_service::{
    CatalogService,
    CreateProductRequest,
    UpdateProductRequest,
};

pub use editor_service::EditorService;

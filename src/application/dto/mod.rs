// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Product};
use crate::util::{number_with_commas, truncate};

/// Description preview length on product cards
const SUMMARY_LEN: usize = 75;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            image_url: category.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Truncated description for card rendering
    pub summary: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Price exactly as entered
    pub price: String,
    /// Price with thousand separators, for display
    pub display_price: String,
    pub colors: Vec<String>,
    pub category: CategoryDto,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            summary: truncate(&product.description, SUMMARY_LEN),
            display_price: number_with_commas(&product.price),
            title: product.title,
            description: product.description,
            image_url: product.image_url,
            price: product.price,
            colors: product.colors,
            category: product.category.into(),
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}

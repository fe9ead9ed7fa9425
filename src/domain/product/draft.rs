use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// A product-shaped scratch record used while a create or edit form is
/// being filled. Drafts carry no id and no timestamps; those belong to the
/// committed entity only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    /// Colors carried over from the record being edited.
    /// Empty for create drafts; pending selections live in the editor's
    /// color buffer until commit, never here.
    pub colors: Vec<String>,
    pub category: Category,
}

impl ProductDraft {
    /// Seed an edit draft from a committed product.
    pub fn from_product(product: &crate::domain::product::Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price.clone(),
            colors: product.colors.clone(),
            category: product.category.clone(),
        }
    }

    /// Apply a single field update. Exhaustive over the editable text
    /// fields, so a new field cannot silently miss its setter.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Title => self.title = value,
            ProductField::Description => self.description = value,
            ProductField::ImageUrl => self.image_url = value,
            ProductField::Price => self.price = value,
        }
    }
}

/// The editable text fields of a product form.
/// Field dispatch is an enum rather than a string key so that the compiler
/// checks exhaustiveness at every match site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Title,
    Description,
    ImageUrl,
    Price,
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductField::Title => write!(f, "title"),
            ProductField::Description => write!(f, "description"),
            ProductField::ImageUrl => write!(f, "imageURL"),
            ProductField::Price => write!(f, "price"),
        }
    }
}

/// The single source of truth for color reconciliation.
///
/// The effective color set of a form is the pending buffer plus whatever
/// original colors have not been toggled off:
/// `pending ∪ (original \ removed)`, with pending selections first and
/// original order preserved. Both the chip rendering and the commit path go
/// through this function, so the two can never drift apart.
pub fn effective_colors(original: &[String], pending: &[String], removed: &[String]) -> Vec<String> {
    let mut effective: Vec<String> = pending.to_vec();
    for color in original {
        if removed.iter().any(|r| r == color) {
            continue;
        }
        if effective.iter().any(|c| c == color) {
            continue;
        }
        effective.push(color.clone());
    }
    effective
}

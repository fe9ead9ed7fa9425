use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::product::draft::ProductDraft;

/// A committed catalog product.
/// This is the root entity of the catalog; it only ever enters the store
/// after its draft passed field validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Internal immutable identifier, assigned at creation
    pub id: Uuid,

    /// Product title (10-80 characters at validation time)
    pub title: String,

    /// Product description (10-900 characters)
    pub description: String,

    /// Image URL (ftp/http/https)
    pub image_url: String,

    /// Price as entered by the user.
    /// Kept as text to preserve exact input; validity is enforced by the
    /// price regex, never by numeric parsing.
    pub price: String,

    /// Selected color tokens, insertion-ordered and duplicate-free
    pub colors: Vec<String>,

    /// Category, copied by value (structural identity by name)
    pub category: Category,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Construct a freshly committed product from a validated draft.
    /// This is the only way a product acquires an id.
    pub fn from_draft(draft: &ProductDraft, colors: Vec<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            price: draft.price.clone(),
            colors,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the replacement record for an edit commit.
    /// The id and creation timestamp carry over from the original; every
    /// other field comes from the validated draft.
    pub fn replaced_with(&self, draft: &ProductDraft, colors: Vec<String>, category: Category) -> Self {
        Self {
            id: self.id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            price: draft.price.clone(),
            colors,
            category,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

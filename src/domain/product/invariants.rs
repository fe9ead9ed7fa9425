use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::product::draft::{ProductDraft, ProductField};

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 80;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 900;

const TITLE_ERROR: &str = "Product title must be between 10 and 80 characters!";
const DESCRIPTION_ERROR: &str = "Product description must be between 10 and 900 characters!";
const IMAGE_URL_ERROR: &str = "Valid image URL is required!";
const PRICE_ERROR: &str = "Valid price is required!";
const COLORS_ERROR: &str = "Please select at least one color!";

/// Per-field validation outcome for a product draft.
///
/// Every field is always present; the empty string means "no error". A
/// draft is committable iff every field here is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: String,
}

impl FieldErrors {
    /// True when every field is error-free, i.e. the draft may commit.
    pub fn is_clean(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image_url.is_empty()
            && self.price.is_empty()
            && self.colors.is_empty()
    }

    pub fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Description => &self.description,
            ProductField::ImageUrl => &self.image_url,
            ProductField::Price => &self.price,
        }
    }

    /// Optimistic clear-on-edit: drop the message for one text field
    /// without re-validating anything.
    pub fn clear_field(&mut self, field: ProductField) {
        match field {
            ProductField::Title => self.title.clear(),
            ProductField::Description => self.description.clear(),
            ProductField::ImageUrl => self.image_url.clear(),
            ProductField::Price => self.price.clear(),
        }
    }

    pub fn clear_colors(&mut self) {
        self.colors.clear();
    }
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).unwrap())
}

fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap())
}

/// Validate a draft against every product invariant.
///
/// Pure and deterministic: all five rules are evaluated on every call with
/// no short-circuiting, and the result always carries all five fields.
/// Colors are passed separately because pending selections live outside the
/// draft until commit.
pub fn validate_draft(draft: &ProductDraft, colors: &[String]) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title_len = draft.title.trim().chars().count();
    if title_len < TITLE_MIN || title_len > TITLE_MAX {
        errors.title = TITLE_ERROR.to_string();
    }

    let description_len = draft.description.trim().chars().count();
    if description_len < DESCRIPTION_MIN || description_len > DESCRIPTION_MAX {
        errors.description = DESCRIPTION_ERROR.to_string();
    }

    let image_url = draft.image_url.trim();
    if image_url.is_empty() || !url_pattern().is_match(image_url) {
        errors.image_url = IMAGE_URL_ERROR.to_string();
    }

    let price = draft.price.trim();
    if price.is_empty() || !price_pattern().is_match(price) {
        errors.price = PRICE_ERROR.to_string();
    }

    if colors.is_empty() {
        errors.colors = COLORS_ERROR.to_string();
    }

    errors
}

/// Invariants that must hold for the product domain:
///
/// 1. Identity (UUID) is immutable once assigned
/// 2. A product only enters the store after its error map is all-empty
/// 3. Title and description lengths are inclusive ranges
/// 4. Price is validated as text, never parsed numerically
/// 5. Colors are duplicate-free and non-empty at commit time
/// 6. Creation timestamp never changes; update timestamp tracks edits

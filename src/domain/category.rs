use serde::{Deserialize, Serialize};

/// A product category, copied by value onto each product.
///
/// Categories are drawn from a fixed set supplied by the embedding UI; they
/// carry no internal id. Identity is structural: two categories are the same
/// category when their names match, regardless of image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    /// Category display name
    pub name: String,

    /// Image shown next to the category in selection widgets
    pub image_url: String,
}

impl Category {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

// Structural identity by name only; the image is presentation data.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Category {}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

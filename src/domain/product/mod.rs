pub mod draft;
pub mod entity;
pub mod invariants;

pub use draft::{effective_colors, ProductDraft, ProductField};
pub use entity::Product;
pub use invariants::{validate_draft, FieldErrors};

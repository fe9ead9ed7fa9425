// src/services/editor_service.rs
//
// The draft state manager: holds the in-progress create and edit drafts,
// the shared pending/removed color buffers, and the shared field error map.
// Everything here is scratch state; nothing reaches the collection until a
// submit passes validation in the catalog service.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::{effective_colors, Category, FieldErrors, Product, ProductDraft, ProductField};
use crate::error::{AppError, AppResult};
use crate::services::catalog_service::{CatalogService, CreateProductRequest, UpdateProductRequest};

/// Everything the two product forms share.
///
/// One pending/removed buffer pair and one error map serve both the create
/// and the edit flow, mirroring how the forms share their color chips and
/// error display.
#[derive(Debug, Clone, Default)]
struct EditorState {
    create_draft: ProductDraft,
    edit_draft: ProductDraft,
    /// Id of the record being edited; None outside an edit session
    edit_target: Option<Uuid>,
    /// Colors toggled on in this session, not yet committed
    pending_colors: Vec<String>,
    /// Original edit-draft colors toggled off in this session
    removed_colors: Vec<String>,
    errors: FieldErrors,
    selected_category: Category,
}

pub struct EditorService {
    state: RwLock<EditorState>,
    catalog: Arc<CatalogService>,
    /// Category a fresh create draft starts from (first of the fixed set)
    default_category: Category,
}

impl EditorService {
    pub fn new(catalog: Arc<CatalogService>, default_category: Category) -> Self {
        let state = EditorState {
            selected_category: default_category.clone(),
            ..Default::default()
        };
        Self {
            state: RwLock::new(state),
            catalog,
            default_category,
        }
    }

    // ------------------------------------------------------------------
    // Field edits
    // ------------------------------------------------------------------

    /// Update one text field of the create draft and optimistically clear
    /// its error. No re-validation happens until submit.
    pub fn update_create_field(&self, field: ProductField, value: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.create_draft.set_field(field, value);
        state.errors.clear_field(field);
    }

    /// Same as `update_create_field`, for the edit draft.
    pub fn update_edit_field(&self, field: ProductField, value: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.edit_draft.set_field(field, value);
        state.errors.clear_field(field);
    }

    /// Category picker in the create form.
    pub fn select_category(&self, category: Category) {
        self.state.write().unwrap().selected_category = category;
    }

    /// Category picker in the edit form writes into the edit draft.
    pub fn select_edit_category(&self, category: Category) {
        self.state.write().unwrap().edit_draft.category = category;
    }

    // ------------------------------------------------------------------
    // Color toggling
    // ------------------------------------------------------------------

    /// Toggle a color chip against the effective set.
    ///
    /// A currently shown color disappears from the next commit's union; an
    /// unshown color joins it. Toggling the same color twice is a no-op.
    /// Adding a color clears any standing colors error.
    pub fn toggle_color(&self, color: &str) {
        let mut state = self.state.write().unwrap();

        if let Some(idx) = state.pending_colors.iter().position(|c| c.as_str() == color) {
            state.pending_colors.remove(idx);
            return;
        }

        let from_original = state.edit_draft.colors.iter().any(|c| c.as_str() == color);
        if from_original {
            if let Some(idx) = state.removed_colors.iter().position(|c| c.as_str() == color) {
                // Restoring a previously toggled-off original color
                state.removed_colors.remove(idx);
                state.errors.clear_colors();
            } else {
                state.removed_colors.push(color.to_string());
            }
            return;
        }

        state.errors.clear_colors();
        state.pending_colors.push(color.to_string());
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    /// Seed the edit draft from a committed record and remember its id.
    pub fn begin_edit(&self, product: &Product) {
        let mut state = self.state.write().unwrap();
        state.edit_draft = ProductDraft::from_product(product);
        state.edit_target = Some(product.id);
    }

    /// Cancel/reset of the create form: empty draft, cleared color buffers,
    /// cleared error map. The category selection survives.
    pub fn reset_create_draft(&self) {
        let mut state = self.state.write().unwrap();
        state.create_draft = ProductDraft::default();
        state.pending_colors.clear();
        state.removed_colors.clear();
        state.errors = FieldErrors::default();
    }

    /// Cancel/reset of the edit form: drops the session target as well.
    pub fn reset_edit_draft(&self) {
        let mut state = self.state.write().unwrap();
        state.edit_draft = ProductDraft::default();
        state.edit_target = None;
        state.pending_colors.clear();
        state.removed_colors.clear();
        state.errors = FieldErrors::default();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Submit the create form. On success the committed product comes back
    /// and the draft resets; on validation failure the error map is stored
    /// for rendering and returned inside the error.
    pub fn submit_create(&self) -> AppResult<Product> {
        let request = {
            let state = self.state.read().unwrap();
            CreateProductRequest {
                draft: state.create_draft.clone(),
                colors: effective_colors(&[], &state.pending_colors, &state.removed_colors),
                category: state.selected_category.clone(),
            }
        };

        match self.catalog.commit_create(request) {
            Ok(product) => {
                self.reset_create_draft();
                Ok(product)
            }
            Err(err) => {
                self.remember_validation_errors(&err);
                Err(err)
            }
        }
    }

    /// Submit the edit form against the session's target id.
    pub fn submit_edit(&self) -> AppResult<Product> {
        let request = {
            let state = self.state.read().unwrap();
            let product_id = state.edit_target.ok_or(AppError::NotFound)?;
            UpdateProductRequest {
                product_id,
                draft: state.edit_draft.clone(),
                colors: effective_colors(
                    &state.edit_draft.colors,
                    &state.pending_colors,
                    &state.removed_colors,
                ),
                category: state.edit_draft.category.clone(),
            }
        };

        match self.catalog.commit_edit(request) {
            Ok(product) => {
                self.reset_edit_draft();
                Ok(product)
            }
            Err(err) => {
                self.remember_validation_errors(&err);
                Err(err)
            }
        }
    }

    fn remember_validation_errors(&self, err: &AppError) {
        if let Some(errors) = err.field_errors() {
            self.state.write().unwrap().errors = errors.clone();
        }
    }

    // ------------------------------------------------------------------
    // Read accessors for the rendering layer
    // ------------------------------------------------------------------

    pub fn create_draft(&self) -> ProductDraft {
        self.state.read().unwrap().create_draft.clone()
    }

    pub fn edit_draft(&self) -> ProductDraft {
        self.state.read().unwrap().edit_draft.clone()
    }

    pub fn edit_target(&self) -> Option<Uuid> {
        self.state.read().unwrap().edit_target
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.read().unwrap().errors.clone()
    }

    pub fn selected_category(&self) -> Category {
        self.state.read().unwrap().selected_category.clone()
    }

    /// Colors the create form's chips currently show as selected.
    pub fn effective_create_colors(&self) -> Vec<String> {
        let state = self.state.read().unwrap();
        effective_colors(&[], &state.pending_colors, &state.removed_colors)
    }

    /// Colors the edit form's chips currently show as selected:
    /// pending plus the original set minus anything toggled off.
    pub fn effective_edit_colors(&self) -> Vec<String> {
        let state = self.state.read().unwrap();
        effective_colors(
            &state.edit_draft.colors,
            &state.pending_colors,
            &state.removed_colors,
        )
    }

    /// The default the create form's category picker falls back to.
    pub fn default_category(&self) -> &Category {
        &self.default_category
    }
}

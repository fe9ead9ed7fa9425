// src/services/editor_service_tests.rs
//
// UNIT TESTS: Editor Service draft lifecycle
//
// INVARIANTS TESTED:
// - Field updates clear their own error and nothing else
// - Color toggling is an involution over the effective set
// - Edit commits union pending colors with surviving originals
// - Cancel/reset always restores the default empty draft
// - A failed submit stores the error map and leaves the collection alone

#[cfg(test)]
mod draft_lifecycle_tests {
    use std::sync::Arc;

    use crate::catalog_data;
    use crate::domain::{Category, Product, ProductDraft, ProductField};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::repositories::{MemoryProductRepository, ProductRepository};
    use crate::services::catalog_service::CatalogService;
    use crate::services::editor_service::EditorService;

    fn editor_with(seed: Vec<Product>) -> (EditorService, Arc<CatalogService>) {
        let repo: Arc<dyn ProductRepository> = Arc::new(MemoryProductRepository::with_seed(seed));
        let catalog = Arc::new(CatalogService::new(repo, Arc::new(EventBus::new())));
        let default_category = catalog_data::categories().remove(0);
        (EditorService::new(catalog.clone(), default_category), catalog)
    }

    fn committed(title: &str, colors: &[&str]) -> Product {
        let draft = ProductDraft {
            title: title.to_string(),
            description: "A perfectly ordinary catalog product for testing.".to_string(),
            image_url: "https://example.com/p.png".to_string(),
            price: "10".to_string(),
            ..Default::default()
        };
        Product::from_draft(
            &draft,
            colors.iter().map(|c| c.to_string()).collect(),
            Category::default(),
        )
    }

    fn fill_valid_create_draft(editor: &EditorService) {
        editor.update_create_field(ProductField::Title, "Handmade ceramic mug set");
        editor.update_create_field(
            ProductField::Description,
            "Set of four stoneware mugs, dishwasher safe, glazed by hand.",
        );
        editor.update_create_field(ProductField::ImageUrl, "https://example.com/mugs.png");
        editor.update_create_field(ProductField::Price, "39.99");
    }

    #[test]
    fn test_update_field_clears_only_its_own_error() {
        let (editor, _catalog) = editor_with(vec![]);

        // Submit an empty draft to populate the error map
        assert!(editor.submit_create().is_err());
        let errors = editor.errors();
        assert!(!errors.title.is_empty());
        assert!(!errors.price.is_empty());

        editor.update_create_field(ProductField::Title, "still too");

        let errors = editor.errors();
        assert!(errors.title.is_empty(), "edited field clears optimistically");
        assert!(!errors.price.is_empty(), "other fields keep their messages");
    }

    #[test]
    fn test_double_toggle_is_identity_for_pending_colors() {
        let (editor, _catalog) = editor_with(vec![]);

        editor.toggle_color("#A31ACB");
        assert_eq!(editor.effective_create_colors(), vec!["#A31ACB".to_string()]);

        editor.toggle_color("#A31ACB");
        assert!(editor.effective_create_colors().is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity_for_original_colors() {
        let product = committed("Product with two colors!", &["#FF6E31", "#1F8A70"]);
        let (editor, _catalog) = editor_with(vec![product.clone()]);
        editor.begin_edit(&product);

        // Toggling off a color that came from the committed record
        editor.toggle_color("#FF6E31");
        assert_eq!(editor.effective_edit_colors(), vec!["#1F8A70".to_string()]);

        // Toggling again restores it (original order preserved)
        editor.toggle_color("#FF6E31");
        assert_eq!(
            editor.effective_edit_colors(),
            vec!["#FF6E31".to_string(), "#1F8A70".to_string()]
        );
    }

    #[test]
    fn test_toggle_adding_color_clears_colors_error() {
        let (editor, _catalog) = editor_with(vec![]);
        fill_valid_create_draft(&editor);

        // No colors selected: submit fails with a colors message
        assert!(editor.submit_create().is_err());
        assert!(!editor.errors().colors.is_empty());

        editor.toggle_color("#84D2C5");
        assert!(editor.errors().colors.is_empty());
    }

    #[test]
    fn test_begin_edit_seeds_draft_and_target() {
        let product = committed("Product worth editing!", &["#FF6E31"]);
        let (editor, _catalog) = editor_with(vec![product.clone()]);

        editor.begin_edit(&product);

        assert_eq!(editor.edit_target(), Some(product.id));
        let draft = editor.edit_draft();
        assert_eq!(draft.title, product.title);
        assert_eq!(draft.colors, product.colors);
    }

    #[test]
    fn test_reset_restores_default_draft_and_buffers() {
        let (editor, _catalog) = editor_with(vec![]);
        fill_valid_create_draft(&editor);
        editor.toggle_color("#FF6E31");

        editor.reset_create_draft();

        assert_eq!(editor.create_draft().title, "");
        assert!(editor.effective_create_colors().is_empty());
        assert!(editor.errors().is_clean());
    }

    #[test]
    fn test_submit_create_commits_and_resets() {
        let (editor, catalog) = editor_with(vec![]);
        fill_valid_create_draft(&editor);
        editor.toggle_color("#2563EB");

        let product = editor.submit_create().unwrap();

        assert_eq!(product.title, "Handmade ceramic mug set");
        assert_eq!(product.colors, vec!["#2563EB".to_string()]);
        assert_eq!(product.category.name, "Cars"); // default selection
        assert_eq!(catalog.product_count().unwrap(), 1);

        // Draft state is back to defaults
        assert_eq!(editor.create_draft().title, "");
        assert!(editor.effective_create_colors().is_empty());
    }

    #[test]
    fn test_submit_create_failure_stores_errors_and_keeps_draft() {
        let (editor, catalog) = editor_with(vec![]);
        editor.update_create_field(ProductField::Title, "too short");

        let result = editor.submit_create();

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!editor.errors().title.is_empty());
        assert_eq!(editor.create_draft().title, "too short");
        assert_eq!(catalog.product_count().unwrap(), 0);
    }

    #[test]
    fn test_submit_edit_unions_pending_and_surviving_originals() {
        let product = committed("Product with two colors!", &["#FF6E31", "#1F8A70"]);
        let (editor, catalog) = editor_with(vec![product.clone()]);

        editor.begin_edit(&product);
        editor.toggle_color("#FF6E31"); // remove an original
        editor.toggle_color("#2563EB"); // add a new one

        let replaced = editor.submit_edit().unwrap();

        assert_eq!(replaced.id, product.id);
        assert_eq!(
            replaced.colors,
            vec!["#2563EB".to_string(), "#1F8A70".to_string()]
        );
        assert_eq!(catalog.product_count().unwrap(), 1);

        // Session closed
        assert_eq!(editor.edit_target(), None);
        assert!(editor.effective_edit_colors().is_empty());
    }

    #[test]
    fn test_submit_edit_survives_intervening_mutations() {
        // Id-based targeting: the edit lands on the right record even after
        // another record was created in between.
        let product = committed("Product worth editing!", &["#FF6E31"]);
        let (editor, catalog) = editor_with(vec![product.clone()]);
        editor.begin_edit(&product);
        editor.update_edit_field(ProductField::Title, "Product edited under churn");

        // Another commit shifts every position in the collection
        fill_valid_create_draft(&editor);
        editor.toggle_color("#2563EB");
        editor.submit_create().unwrap();

        editor.begin_edit(&catalog.get_product(product.id).unwrap().unwrap());
        editor.update_edit_field(ProductField::Title, "Product edited under churn");
        let replaced = editor.submit_edit().unwrap();

        assert_eq!(replaced.id, product.id);
        let all = catalog.list_products().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].title, "Product edited under churn");
    }

    #[test]
    fn test_submit_edit_without_session_is_not_found() {
        let (editor, _catalog) = editor_with(vec![]);
        assert!(matches!(editor.submit_edit(), Err(AppError::NotFound)));
    }

    #[test]
    fn test_category_selection_flows_into_commit() {
        let (editor, _catalog) = editor_with(vec![]);
        fill_valid_create_draft(&editor);
        editor.toggle_color("#2563EB");
        editor.select_category(Category::new("Clothes", "https://example.com/c.png"));

        let product = editor.submit_create().unwrap();
        assert_eq!(product.category.name, "Clothes");
    }
}

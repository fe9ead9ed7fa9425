// src/catalog_data.rs
//
// Fixed collaborators supplied to the core from outside: the selectable
// category set, the color token palette, the form field descriptors that
// drive generic field rendering, and the initial seed products. None of
// this is business logic; it is the data a storefront UI would ship with.

use serde::Serialize;

use crate::domain::{Category, Product, ProductDraft, ProductField};

/// Descriptor driving generic rendering of one text input in the product
/// forms (DOM id, field binding, label).
#[derive(Debug, Clone, Serialize)]
pub struct FormFieldDescriptor {
    pub id: &'static str,
    pub name: ProductField,
    pub label: &'static str,
}

pub fn form_fields() -> Vec<FormFieldDescriptor> {
    vec![
        FormFieldDescriptor {
            id: "title",
            name: ProductField::Title,
            label: "Product Title",
        },
        FormFieldDescriptor {
            id: "description",
            name: ProductField::Description,
            label: "Product Description",
        },
        FormFieldDescriptor {
            id: "imageURL",
            name: ProductField::ImageUrl,
            label: "Product Image URL",
        },
        FormFieldDescriptor {
            id: "price",
            name: ProductField::Price,
            label: "Product Price",
        },
    ]
}

/// The selectable color tokens rendered as toggle chips.
pub fn color_tokens() -> Vec<String> {
    [
        "#A31ACB", "#FF6E31", "#3C2A21", "#1F8A70", "#84D2C5", "#2563EB", "#DC2626", "#059669",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The fixed, enumerated category set. The first entry is the default
/// selection of the create form.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("Cars", "https://images.example.com/categories/cars.png"),
        Category::new("Electronics", "https://images.example.com/categories/electronics.png"),
        Category::new("Furniture", "https://images.example.com/categories/furniture.png"),
        Category::new("Clothes", "https://images.example.com/categories/clothes.png"),
    ]
}

/// Initial products shown before the user creates anything. Already in
/// display order (most recent first).
pub fn seed_products() -> Vec<Product> {
    let categories = categories();
    let cars = categories[0].clone();
    let electronics = categories[1].clone();

    vec![
        Product::from_draft(
            &ProductDraft {
                title: "2022 Genesis GV70 compact SUV".to_string(),
                description: "Turbocharged luxury crossover with a driver-focused cabin, \
                              adaptive suspension and a generous standard feature list."
                    .to_string(),
                image_url: "https://images.example.com/products/gv70.png".to_string(),
                price: "45000".to_string(),
                ..Default::default()
            },
            vec!["#3C2A21".to_string(), "#1F8A70".to_string()],
            cars,
        ),
        Product::from_draft(
            &ProductDraft {
                title: "Aurora 27-inch 4K monitor".to_string(),
                description: "Factory-calibrated IPS panel with thin bezels, USB-C power \
                              delivery and a height-adjustable stand."
                    .to_string(),
                image_url: "https://images.example.com/products/aurora-monitor.png".to_string(),
                price: "529.99".to_string(),
                ..Default::default()
            },
            vec!["#2563EB".to_string()],
            electronics,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_cover_every_text_field() {
        let names: Vec<ProductField> = form_fields().into_iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                ProductField::Title,
                ProductField::Description,
                ProductField::ImageUrl,
                ProductField::Price,
            ]
        );
    }

    #[test]
    fn test_seed_products_pass_validation() {
        use crate::domain::validate_draft;

        for product in seed_products() {
            let draft = ProductDraft::from_product(&product);
            let errors = validate_draft(&draft, &product.colors);
            assert!(errors.is_clean(), "seed product {} is invalid", product.title);
        }
    }

    #[test]
    fn test_color_tokens_are_unique() {
        let tokens = color_tokens();
        let mut deduped = tokens.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tokens.len());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }
}

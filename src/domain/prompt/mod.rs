//! Per-product prompt composition.

use crate::domain::catalog::ProductAggregate;

/// Separator between the operator's template and the product suffix.
pub const SUFFIX_SEPARATOR: &str = "\n\n";

/// A composed prompt and the images that accompany it to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
    pub images: Vec<String>,
}

impl PromptRequest {
    /// Build the request for one product.
    pub fn for_product(template: &str, product: &ProductAggregate) -> Self {
        Self { prompt: compose_prompt(template, product), images: product.images.clone() }
    }
}

/// Append the product's label to the operator template.
///
/// Products carrying a handle are labelled by name; products without one
/// (four-column rows, or a NULL handle) are labelled by id.
pub fn compose_prompt(template: &str, product: &ProductAggregate) -> String {
    format!("{}{}{}", template, SUFFIX_SEPARATOR, product_label(product))
}

fn product_label(product: &ProductAggregate) -> String {
    match product.handle.as_deref() {
        Some(handle) => format!("Product name: {}", handle),
        None => format!("Product ID: {}", product.product_id),
    }
}

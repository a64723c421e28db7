//! Product display formatting
//!
//! Formats products for terminal output in table and detail views.

use crate::models::Product;

/// Format products as an aligned table, in catalog order
pub fn format_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products registered.\n\nRun 'estoque product add' to create one.\n".to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = products
        .iter()
        .map(|p| p.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<name_width$}  {:<category_width$}  {:>8}  {:>10}\n",
        "ID", "Name", "Category", "Qty", "Price",
    ));
    output.push_str(&format!(
        "{:->6}  {:-<name_width$}  {:-<category_width$}  {:->8}  {:->10}\n",
        "", "", "", "", "",
    ));

    for product in products {
        output.push_str(&format!(
            "{:>6}  {:<name_width$}  {:<category_width$}  {:>8}  {:>10}\n",
            product.id.to_string(),
            product.name,
            product.category,
            product.quantity,
            product.price.to_string(),
        ));
    }

    output
}

/// Format product details
pub fn format_product_details(product: &Product) -> String {
    let mut output = String::new();

    output.push_str(&format!("Product: {}\n", product.name));
    output.push_str(&format!("  ID:       {}\n", product.id));
    output.push_str(&format!("  Category: {}\n", product.category));
    output.push_str(&format!("  Quantity: {}\n", product.quantity));
    output.push_str(&format!("  Price:    {}\n", product.price));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Price, ProductId};

    fn product() -> Product {
        Product::new(
            ProductId::new(1),
            "Suco",
            "Bebidas",
            10,
            Price::from_cents(350),
        )
    }

    #[test]
    fn test_empty_list() {
        let output = format_product_list(&[]);
        assert!(output.contains("No products registered."));
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_product_list(&[product()]);
        assert!(output.contains("Suco"));
        assert!(output.contains("Bebidas"));
        assert!(output.contains("10"));
        assert!(output.contains("3.50"));
    }

    #[test]
    fn test_details() {
        let output = format_product_details(&product());
        assert!(output.contains("Product: Suco"));
        assert!(output.contains("ID:       1"));
        assert!(output.contains("Quantity: 10"));
        assert!(output.contains("Price:    3.50"));
    }
}

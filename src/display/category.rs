//! Category display formatting

use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories registered.\n\nRun 'estoque category add <name>' to create one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str("Categories:\n");

    for category in categories {
        output.push_str(&format!("  {}\n", category.name));
    }

    output
}

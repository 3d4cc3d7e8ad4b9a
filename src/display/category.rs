//! Category display formatting
//!
//! Formats categories for terminal output in list and detail views.

use crate::config::Settings;
use crate::models::timestamp::format_millis;
use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'expenses category create <name>' to add one.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<10}  {}\n",
        "Category",
        "Color",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<10}  {:-<36}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:<10}  {}\n",
            category.name,
            category.color.as_deref().unwrap_or("-"),
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:          {}\n", category.id));

    if let Some(description) = &category.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    if let Some(image_url) = &category.image_url {
        output.push_str(&format!("  Image:       {}\n", image_url));
    }
    if let Some(color) = &category.color {
        output.push_str(&format!("  Color:       {}\n", color));
    }

    output.push_str(&format!(
        "  Created:     {}\n",
        format_millis(category.created_at, &settings.date_format)
    ));

    output
}

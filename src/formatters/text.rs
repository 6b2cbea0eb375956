// ABOUTME: Printable text rendering of a shopping list document
// ABOUTME: Title and "prepared for" header, then one checkbox block per ingredient row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::fmt::{self, Write};

use mealplan_core::constants::labels;

use super::{FormatError, OutputFormat, ShoppingListDocument, ShoppingListRow};

/// Render `document` as a printable checklist
///
/// ```text
/// Shopping List - Week 1
/// Prepared for Jane Doe
///
/// [ ] tomato
///     - Chili - 2 cups x2
///     Suggested: Brand A Tomatoes
/// ```
///
/// # Errors
///
/// Returns `FormatError` if writing to the output buffer fails
pub fn render(document: &ShoppingListDocument) -> Result<String, FormatError> {
    let mut out = String::new();
    write_document(&mut out, document).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Text,
    })?;
    Ok(out)
}

fn write_document(out: &mut String, document: &ShoppingListDocument) -> fmt::Result {
    match document.title.as_deref().filter(|title| !title.is_empty()) {
        Some(title) => writeln!(out, "{} - {title}", labels::SHOPPING_LIST_TITLE)?,
        None => writeln!(out, "{}", labels::SHOPPING_LIST_TITLE)?,
    }
    if let Some(person) = document.prepared_for.as_deref() {
        writeln!(out, "{} {person}", labels::PREPARED_FOR)?;
    }
    if let Some(description) = document.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(out, "{description}")?;
    }

    for row in &document.rows {
        writeln!(out)?;
        write_row(out, row, &document.empty_products_label)?;
    }
    Ok(())
}

fn write_row(out: &mut String, row: &ShoppingListRow, empty_label: &str) -> fmt::Result {
    writeln!(out, "[ ] {}", row.ingredient)?;
    for contribution in &row.contributions {
        writeln!(out, "    - {}", contribution.display)?;
    }
    if row.suggested_products.is_empty() {
        writeln!(out, "    Suggested: {empty_label}")
    } else {
        writeln!(out, "    Suggested: {}", row.suggested_products.join(", "))
    }
}

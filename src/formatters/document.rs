// ABOUTME: Shopping list document - the rendering-facing view model of an aggregation
// ABOUTME: Plan header, ordered rows, per-meal contributions with repeat multipliers applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use chrono::{DateTime, Utc};
use mealplan_core::constants::labels;
use mealplan_core::models::{MealPlan, Quantity};
use serde::Serialize;

use super::MultiplierStyle;
use crate::aggregation::{Aggregation, Contribution, MealOccurrenceCounts};
use crate::config::ShoppingListConfig;

/// Options controlling how an aggregation becomes a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// How repeated meals are reflected next to their quantity
    pub multiplier_style: MultiplierStyle,
    /// Shown for rows without suggested products
    pub empty_products_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            multiplier_style: MultiplierStyle::default(),
            empty_products_label: labels::NO_MATCHED_PRODUCTS.to_owned(),
        }
    }
}

impl From<&ShoppingListConfig> for RenderOptions {
    fn from(config: &ShoppingListConfig) -> Self {
        Self {
            multiplier_style: config.multiplier_style,
            empty_products_label: config.empty_products_label.clone(),
        }
    }
}

/// One meal's contribution to a row, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowContribution {
    /// Contributing meal identifier
    pub meal_id: String,
    /// Contributing meal name
    pub meal_name: String,
    /// Quantity for a single occurrence of the meal
    pub quantity: Quantity,
    /// Unit of `quantity`
    pub unit: String,
    /// How many plan entries reference this meal
    pub occurrences: usize,
    /// Rendered `"{meal} - {quantity} {unit}"` line with the multiplier applied
    pub display: String,
}

impl RowContribution {
    fn new(contribution: &Contribution<'_>, occurrences: usize, style: MultiplierStyle) -> Self {
        Self {
            meal_id: contribution.meal.meal_id.to_string(),
            meal_name: contribution.meal.meal_name.clone(),
            quantity: contribution.quantity.clone(),
            unit: contribution.unit.to_owned(),
            occurrences,
            display: display_line(contribution, occurrences, style),
        }
    }
}

/// `"{meal} - {quantity} {unit}"`, then either ` xN` or a multiplied quantity
fn display_line(contribution: &Contribution<'_>, occurrences: usize, style: MultiplierStyle) -> String {
    let repeated = occurrences > 1;
    let scaled = match style {
        MultiplierStyle::Multiply if repeated => contribution.quantity.scaled(occurrences),
        MultiplierStyle::Multiply | MultiplierStyle::Suffix => None,
    };

    let mut line = format!(
        "{} - {}",
        contribution.meal.meal_name,
        scaled.as_ref().unwrap_or(contribution.quantity)
    );
    if !contribution.unit.is_empty() {
        line.push(' ');
        line.push_str(contribution.unit);
    }
    if repeated && scaled.is_none() {
        line.push_str(&format!(" {}{occurrences}", labels::MULTIPLIER_PREFIX));
    }
    line
}

/// One ingredient row of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListRow {
    /// Aggregation key shown as the ingredient label
    pub ingredient: String,
    /// Contributions in first-seen meal order
    pub contributions: Vec<RowContribution>,
    /// Deduplicated suggested product names
    pub suggested_products: Vec<String>,
}

/// Rendering-facing view of one aggregation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListDocument {
    /// Plan name
    pub title: Option<String>,
    /// Plan description
    pub description: Option<String>,
    /// Person the plan was prepared for
    pub prepared_for: Option<String>,
    /// When the document was built
    pub generated_at: DateTime<Utc>,
    /// Rows in aggregation order
    pub rows: Vec<ShoppingListRow>,
    /// Shown for rows without suggested products (text output only)
    #[serde(skip)]
    pub empty_products_label: String,
}

impl ShoppingListDocument {
    /// Build the document for `plan` from its aggregation
    #[must_use]
    pub fn build(plan: Option<&MealPlan>, aggregation: &Aggregation, options: &RenderOptions) -> Self {
        let rows = aggregation
            .shopping_list
            .iter()
            .map(|(key, record)| ShoppingListRow {
                ingredient: key.to_string(),
                contributions: record
                    .contributions()
                    .map(|contribution| {
                        row_contribution(&contribution, &aggregation.occurrences, options)
                    })
                    .collect(),
                suggested_products: record.matched_product_names().iter().cloned().collect(),
            })
            .collect();

        Self {
            title: plan.and_then(|p| p.name_en.clone()),
            description: plan.and_then(|p| p.description_en.clone()),
            prepared_for: plan.and_then(MealPlan::prepared_for).map(str::to_owned),
            generated_at: Utc::now(),
            rows,
            empty_products_label: options.empty_products_label.clone(),
        }
    }

    /// Override the generation timestamp
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

fn row_contribution(
    contribution: &Contribution<'_>,
    occurrences: &MealOccurrenceCounts,
    options: &RenderOptions,
) -> RowContribution {
    let count = occurrences.occurrence_count(&contribution.meal.meal_id);
    RowContribution::new(contribution, count, options.multiplier_style)
}

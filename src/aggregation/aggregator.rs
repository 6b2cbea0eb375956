// ABOUTME: Single-pass ingredient aggregator over the entries of a meal plan
// ABOUTME: Validates ingredients, counts meal repeats, and merges rows by aggregation key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use indexmap::map::Entry;
use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::{
    Ingredient, MatchedProduct, Meal, MealId, MealPlan, MealPlanEntry, Quantity,
    ShoppingListResponse,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use super::{
    AggregatedIngredientRecord, AggregatedShoppingList, AggregationKey, MealOccurrenceCounts,
};

/// Counters describing what a pass did and what it skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationStats {
    /// Entries scanned
    pub entries_scanned: usize,
    /// Entries whose meal reference was null
    pub entries_without_meal: usize,
    /// Meals excluded from merging because their id or name was missing
    pub meals_without_identity: usize,
    /// Ingredient rows merged into the shopping list
    pub ingredients_merged: usize,
    /// Merges where the meal already contributed to the row's key
    pub repeated_contributions: usize,
}

/// Output of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Merged rows in first-seen order
    pub shopping_list: AggregatedShoppingList,
    /// Occurrence counts per meal
    pub occurrences: MealOccurrenceCounts,
    /// Pass statistics
    pub stats: AggregationStats,
}

impl From<Aggregation> for (AggregatedShoppingList, MealOccurrenceCounts) {
    fn from(aggregation: Aggregation) -> Self {
        (aggregation.shopping_list, aggregation.occurrences)
    }
}

/// Required ingredient fields, borrowed from a validated ingredient
#[derive(Debug, Clone, Copy)]
struct IngredientFields<'a> {
    name: &'a str,
    product_keyword: &'a str,
    quantity: &'a Quantity,
    unit: &'a str,
    matched_products: &'a [MatchedProduct],
}

impl<'a> IngredientFields<'a> {
    /// Borrow the required fields, failing on the first one missing
    fn require(ingredient: &'a Ingredient, meal: &Meal) -> AppResult<Self> {
        let missing = |field: &str| {
            let error = AppError::missing_field("ingredient", field).with_details(json!({
                "record": "ingredient",
                "field": field,
                "meal_id": meal.id.as_ref().map(MealId::as_str),
            }));
            match ingredient.id.as_deref() {
                Some(id) => error.with_resource_id(id),
                None => error,
            }
        };

        Ok(Self {
            name: ingredient.name.as_deref().ok_or_else(|| missing("name"))?,
            product_keyword: ingredient
                .product_keyword
                .as_deref()
                .ok_or_else(|| missing("productKeyword"))?,
            quantity: ingredient.quantity.as_ref().ok_or_else(|| missing("quantity"))?,
            unit: ingredient.unit.as_deref().ok_or_else(|| missing("unit"))?,
            matched_products: ingredient.matched_product_nodes(),
        })
    }

    /// Display names of matched products, skipping unnamed products
    fn product_names(&self) -> impl Iterator<Item = &'a str> {
        let products = self.matched_products;
        products
            .iter()
            .filter_map(|product| product.name_en.as_deref())
    }
}

/// Builds a shopping list from meal plan entries in scan order
///
/// The aggregator owns everything it builds and keeps no reference to the
/// entries it observes. A fresh aggregator is used per snapshot.
#[derive(Debug, Default)]
pub struct IngredientAggregator {
    shopping_list: AggregatedShoppingList,
    occurrences: MealOccurrenceCounts,
    stats: AggregationStats,
}

impl IngredientAggregator {
    /// Create an empty aggregator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one entry: count its meal, then merge its ingredients
    ///
    /// A null meal is skipped. A meal without an identifier is neither counted
    /// nor merged; a meal with an identifier but no name is counted only.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if any ingredient of the meal lacks
    /// `name`, `productKeyword`, `quantity` or `unit`. The entry is then
    /// neither counted nor merged, and the aggregator state is unchanged.
    pub fn observe_entry(&mut self, entry: &MealPlanEntry) -> AppResult<()> {
        let Some(meal) = entry.meal.as_ref() else {
            debug!(
                entry_index = self.stats.entries_scanned,
                "Skipping meal plan entry without a meal"
            );
            self.stats.entries_scanned += 1;
            self.stats.entries_without_meal += 1;
            return Ok(());
        };

        // Nothing is recorded for the entry until every ingredient validates
        let ingredients = meal
            .ingredient_nodes()
            .iter()
            .map(|ingredient| IngredientFields::require(ingredient, meal))
            .collect::<AppResult<Vec<_>>>()?;

        self.stats.entries_scanned += 1;
        if self.occurrences.observe(entry).is_none() {
            debug!(meal_name = ?meal.name_en, "Meal has no identifier, not counting it");
        }

        let (Some(meal_id), Some(meal_name)) = (meal.identifier(), meal.display_name()) else {
            debug!(
                meal_id = ?meal.id,
                meal_name = ?meal.name_en,
                ingredients = ingredients.len(),
                "Meal has no identifier or name, skipping its ingredients"
            );
            self.stats.meals_without_identity += 1;
            return Ok(());
        };

        for fields in &ingredients {
            self.merge(meal_id, meal_name, fields);
        }
        Ok(())
    }

    fn merge(&mut self, meal_id: &MealId, meal_name: &str, fields: &IngredientFields<'_>) {
        let key = AggregationKey::from_parts(fields.name, fields.product_keyword);
        self.stats.ingredients_merged += 1;

        match self.shopping_list.entry(key) {
            Entry::Occupied(mut occupied) => {
                let added = occupied.get_mut().add_contribution(
                    meal_id,
                    meal_name,
                    fields.quantity,
                    fields.unit,
                );
                if !added {
                    // First quantity/unit recorded for this meal wins
                    debug!(
                        key = %occupied.key(),
                        meal_id = %meal_id,
                        "Meal already contributes to this ingredient"
                    );
                    self.stats.repeated_contributions += 1;
                }
                occupied.get_mut().merge_products(fields.product_names());
            }
            Entry::Vacant(vacant) => {
                let mut record = AggregatedIngredientRecord::seeded(
                    meal_id,
                    meal_name,
                    fields.quantity,
                    fields.unit,
                );
                record.merge_products(fields.product_names());
                vacant.insert(record);
            }
        }
    }

    /// Finish the pass and hand over the built structures
    #[must_use]
    pub fn finish(self) -> Aggregation {
        info!(
            rows = self.shopping_list.len(),
            meals = self.occurrences.len(),
            entries = self.stats.entries_scanned,
            skipped_entries = self.stats.entries_without_meal,
            skipped_meals = self.stats.meals_without_identity,
            "Aggregated meal plan into shopping list"
        );

        Aggregation {
            shopping_list: self.shopping_list,
            occurrences: self.occurrences,
            stats: self.stats,
        }
    }
}

/// Aggregate every entry of `plan`
///
/// # Errors
///
/// Returns `MissingRequiredField` if an ingredient lacks a required field;
/// no partial output is returned.
pub fn aggregate(plan: &MealPlan) -> AppResult<Aggregation> {
    let mut aggregator = IngredientAggregator::new();
    for entry in plan.entries() {
        aggregator.observe_entry(entry)?;
    }
    Ok(aggregator.finish())
}

/// Aggregate a query response; a null plan yields an empty aggregation
///
/// # Errors
///
/// Same as [`aggregate`].
pub fn aggregate_response(response: &ShoppingListResponse) -> AppResult<Aggregation> {
    response.meal_plan.as_ref().map_or_else(
        || {
            debug!("Query returned no meal plan, nothing to aggregate");
            Ok(Aggregation::default())
        },
        aggregate,
    )
}

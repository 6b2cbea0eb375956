// ABOUTME: Ingredient aggregation engine turning a meal plan into a shopping list
// ABOUTME: Exposes aggregation keys, merged ingredient records, occurrence counts, and the aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! # Aggregation Module
//!
//! Derives a consolidated shopping list from a meal plan snapshot in a single
//! pass over its entries:
//!
//! - ingredients sharing an [`AggregationKey`] are merged into one row, rows
//!   ordered by first appearance
//! - each row records one `(meal, quantity, unit)` contribution per distinct
//!   meal, index-aligned
//! - matched product names are merged without duplicates
//! - [`MealOccurrenceCounts`] records how often each meal repeats, so the
//!   rendering layer can multiply a contribution instead of duplicating it
//!
//! ## Example Usage
//!
//! ```rust
//! use mealplan_core::models::{Ingredient, Meal, MealPlan};
//! use mealplan_shopping::aggregation::aggregate;
//!
//! let chili = Meal::new("m1", "Chili")
//!     .with_ingredient(Ingredient::new("Tomato", "tomato", 2, "cups"));
//! let plan = MealPlan::new("Week 1").with_meal(chili.clone()).with_meal(chili);
//!
//! let aggregation = aggregate(&plan)?;
//! assert_eq!(aggregation.shopping_list.len(), 1);
//! assert_eq!(aggregation.occurrences.occurrence_count("m1"), 2);
//! # Ok::<(), mealplan_core::errors::AppError>(())
//! ```

/// Single-pass aggregator over meal plan entries
pub mod aggregator;
/// Normalized ingredient identity used to merge rows
pub mod key;
/// Per-meal repeat counts
pub mod occurrences;
/// Merged ingredient rows and the ordered shopping list
pub mod shopping_list;

pub use aggregator::{
    aggregate, aggregate_response, Aggregation, AggregationStats, IngredientAggregator,
};
pub use key::AggregationKey;
pub use occurrences::MealOccurrenceCounts;
pub use shopping_list::{
    AggregatedIngredientRecord, AggregatedShoppingList, ContributingMeal, Contribution,
};

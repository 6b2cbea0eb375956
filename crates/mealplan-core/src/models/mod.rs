// ABOUTME: Meal plan snapshot data model consumed by the shopping list engine
// ABOUTME: Re-exports MealPlan, MealPlanEntry, Meal, Ingredient, MatchedProduct, MealId and Quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! # Data Models
//!
//! Read-only, already-deserialized records produced by the meal plan query
//! service. The shapes follow the GraphQL connection layout
//! (`mealPlanEntries { nodes { meal { ... } } }`), and every field is
//! optional: the engine decides per field whether absence means "skip this
//! unit of work" or "contract violation".
//!
//! ## Core Models
//!
//! - `MealPlan`: plan header plus its ordered entries
//! - `MealPlanEntry`: one reference to a `Meal` (a meal may repeat)
//! - `Meal`: identifier, display name, ordered ingredients
//! - `Ingredient`: name, product keyword, opaque quantity and unit, matched products
//! - `MatchedProduct`: catalog product suggested for an ingredient

mod ids;
mod meal_plan;
mod quantity;

pub use ids::MealId;
pub use meal_plan::{
    Connection, Ingredient, MatchedProduct, Meal, MealPlan, MealPlanEntry, Person,
    ShoppingListResponse,
};
pub use quantity::Quantity;

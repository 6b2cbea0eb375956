// ABOUTME: Benchmark fixtures for generating realistic meal plans
// ABOUTME: Provides deterministic plan generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! Deterministic meal plan generation.
//!
//! Meals draw their ingredients from a shared pool so that rows merge across
//! meals, and each meal repeats across the plan like a weekly rotation.

use mealplan_core::models::{Ingredient, Meal, MealPlan};

/// Predefined plan sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PlanSize {
    /// One week of dinners
    Week,
    /// A month of three meals a day
    Month,
    /// A catering-sized plan
    Large,
}

impl PlanSize {
    /// Number of distinct meals
    #[must_use]
    pub const fn meals(self) -> usize {
        match self {
            Self::Week => 5,
            Self::Month => 30,
            Self::Large => 200,
        }
    }

    /// Times each meal repeats across the plan
    #[must_use]
    pub const fn repeats(self) -> usize {
        match self {
            Self::Week => 2,
            Self::Month => 3,
            Self::Large => 4,
        }
    }

    /// Benchmark label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Large => "large",
        }
    }
}

const INGREDIENT_POOL: usize = 60;
const INGREDIENTS_PER_MEAL: usize = 8;
const PRODUCTS_PER_INGREDIENT: usize = 3;

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn meal(index: usize) -> Meal {
    (0..INGREDIENTS_PER_MEAL).fold(
        Meal::new(format!("meal-{index}"), format!("Meal {index}")),
        |meal, slot| {
            let n = (index * 13 + slot * 7) % INGREDIENT_POOL;
            // Alternate casing so keys merge through normalization
            let name = if slot % 2 == 0 {
                format!("Ingredient {n}")
            } else {
                format!("INGREDIENT {n}")
            };
            let ingredient = (0..PRODUCTS_PER_INGREDIENT).fold(
                Ingredient::new(name, format!("ingredient {n}"), 1 + slot as i32, "g"),
                |ingredient, p| ingredient.with_matched_product(format!("Product {}", (n + p) % 90)),
            );
            meal.with_ingredient(ingredient)
        },
    )
}

/// Generate a plan of the given size
#[must_use]
pub fn generate_plan(size: PlanSize) -> MealPlan {
    let meals: Vec<Meal> = (0..size.meals()).map(meal).collect();
    let mut plan = MealPlan::new(format!("Benchmark {}", size.label())).with_person("Bench User");
    for _ in 0..size.repeats() {
        for meal in &meals {
            plan = plan.with_meal(meal.clone());
        }
    }
    plan
}

/// Number of (entry, ingredient) pairs a plan scans
#[must_use]
pub fn ingredient_count(plan: &MealPlan) -> usize {
    plan.entries()
        .iter()
        .filter_map(|entry| entry.meal.as_ref())
        .map(|meal| meal.ingredient_nodes().len())
        .sum()
}

// ABOUTME: Shared fixtures for shopping list integration tests
// ABOUTME: Builds meal plans, meals, and snapshot documents used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

#![allow(dead_code, missing_docs)]

use mealplan_core::models::{Ingredient, Meal, MealPlan};

/// "Chili" (`m1`) with two cups of tomato and one suggested product
pub fn chili() -> Meal {
    Meal::new("m1", "Chili").with_ingredient(
        Ingredient::new("Tomato", "tomato", 2, "cups")
            .with_id("i-tomato")
            .with_matched_product("Brand A Tomatoes"),
    )
}

/// "Salsa" (`m2`) sharing tomato with chili and adding onion
pub fn salsa() -> Meal {
    Meal::new("m2", "Salsa")
        .with_ingredient(
            Ingredient::new("tomato", "TOMATO", 3, "pcs").with_matched_product("Brand B Tomatoes"),
        )
        .with_ingredient(Ingredient::new("Onion", "onion", "half", "").with_matched_product("Red Onion"))
}

/// Meal with a valid identity and no ingredient list
pub fn empty_meal(id: &str) -> Meal {
    Meal::new(id, "Leftovers")
}

/// A plan holding `meals` in order
pub fn plan_with(meals: impl IntoIterator<Item = Meal>) -> MealPlan {
    meals
        .into_iter()
        .fold(MealPlan::new("Week 1").with_person("Jane Doe"), MealPlan::with_meal)
}

/// Week plan: chili, salsa, chili
pub fn week_plan() -> MealPlan {
    plan_with([chili(), salsa(), chili()])
}

/// A plan with `meals` distinct meals, each repeated `repeats` times,
/// drawing from a pool of `pool` ingredient names
pub fn generated_plan(meals: usize, repeats: usize, pool: usize) -> MealPlan {
    let mut plan = MealPlan::new("Generated");
    for _ in 0..repeats {
        for m in 0..meals {
            let mut meal = Meal::new(format!("meal-{m}"), format!("Meal {m}"));
            for i in 0..5 {
                let n = (m * 7 + i) % pool.max(1);
                meal = meal.with_ingredient(
                    Ingredient::new(format!("Ingredient {n}"), format!("ingredient {n}"), 1, "g")
                        .with_matched_product(format!("Product {n}"))
                        .with_matched_product(format!("Product {}", n % 3)),
                );
            }
            plan = plan.with_meal(meal);
        }
    }
    plan
}

/// GraphQL response for the week plan, wrapped in the `data` envelope
pub const WEEK_SNAPSHOT: &str = r#"{
  "data": {
    "mealPlan": {
      "nameEn": "Week 1",
      "descriptionEn": "Family dinners",
      "person": { "fullName": "Jane Doe" },
      "mealPlanEntries": {
        "nodes": [
          {
            "meal": {
              "id": "m1",
              "nameEn": "Chili",
              "ingredients": {
                "nodes": [
                  {
                    "id": "i-tomato",
                    "name": "Tomato",
                    "quantity": 2,
                    "unit": "cups",
                    "productKeyword": "tomato",
                    "matchedProducts": { "nodes": [{ "id": "p1", "nameEn": "Brand A Tomatoes" }] }
                  }
                ]
              }
            }
          },
          { "meal": null },
          {
            "meal": {
              "id": "m1",
              "nameEn": "Chili",
              "ingredients": {
                "nodes": [
                  {
                    "id": "i-tomato",
                    "name": "Tomato",
                    "quantity": 2,
                    "unit": "cups",
                    "productKeyword": "tomato",
                    "matchedProducts": { "nodes": [{ "id": "p1", "nameEn": "Brand A Tomatoes" }] }
                  }
                ]
              }
            }
          }
        ]
      }
    }
  }
}"#;

// ABOUTME: Merged ingredient records and the insertion-ordered shopping list
// ABOUTME: Keeps contributing meals, quantities and units index-aligned and product names unique
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::map::{Entry, Iter, Keys};
use indexmap::{Equivalent, IndexMap, IndexSet};
use mealplan_core::models::{MealId, Quantity};
use serde::Serialize;

use super::AggregationKey;

/// A meal contributing to a shopping list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributingMeal {
    /// Meal identifier
    pub meal_id: MealId,
    /// Meal display name
    pub meal_name: String,
}

/// One contributing meal together with its quantity and unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution<'a> {
    /// Contributing meal
    pub meal: &'a ContributingMeal,
    /// Quantity this meal needs, for a single occurrence of the meal
    pub quantity: &'a Quantity,
    /// Unit of `quantity`
    pub unit: &'a str,
}

/// One shopping list row: every meal using an ingredient key
///
/// `contributing_meals`, `quantities` and `units` always have the same length
/// and are index-aligned; a meal appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedIngredientRecord {
    contributing_meals: Vec<ContributingMeal>,
    quantities: Vec<Quantity>,
    units: Vec<String>,
    matched_product_names: IndexSet<String>,
    #[serde(skip)]
    meal_ids: HashSet<MealId>,
}

impl AggregatedIngredientRecord {
    /// Create a record seeded with a single meal's contribution
    pub(crate) fn seeded(meal_id: &MealId, meal_name: &str, quantity: &Quantity, unit: &str) -> Self {
        let mut record = Self {
            contributing_meals: Vec::with_capacity(1),
            quantities: Vec::with_capacity(1),
            units: Vec::with_capacity(1),
            matched_product_names: IndexSet::new(),
            meal_ids: HashSet::with_capacity(1),
        };
        record.add_contribution(meal_id, meal_name, quantity, unit);
        record
    }

    /// Record a meal's contribution unless that meal already contributes
    ///
    /// Returns `false` when the meal was already present, in which case
    /// nothing is recorded.
    pub(crate) fn add_contribution(
        &mut self,
        meal_id: &MealId,
        meal_name: &str,
        quantity: &Quantity,
        unit: &str,
    ) -> bool {
        if self.meal_ids.contains(meal_id) {
            return false;
        }

        self.meal_ids.insert(meal_id.clone());
        self.contributing_meals.push(ContributingMeal {
            meal_id: meal_id.clone(),
            meal_name: meal_name.to_owned(),
        });
        self.quantities.push(quantity.clone());
        self.units.push(unit.to_owned());
        true
    }

    /// Merge product names, skipping ones already present
    ///
    /// Returns how many names were new.
    pub(crate) fn merge_products<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for name in names {
            if !self.matched_product_names.contains(name) {
                self.matched_product_names.insert(name.to_owned());
                added += 1;
            }
        }
        added
    }

    /// Meals contributing to this row, in first-seen order
    #[must_use]
    pub fn contributing_meals(&self) -> &[ContributingMeal] {
        &self.contributing_meals
    }

    /// Quantities, index-aligned with [`Self::contributing_meals`]
    #[must_use]
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Units, index-aligned with [`Self::contributing_meals`]
    #[must_use]
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Deduplicated product names, in first-seen order
    #[must_use]
    pub const fn matched_product_names(&self) -> &IndexSet<String> {
        &self.matched_product_names
    }

    /// Whether `meal_id` contributes to this row
    #[must_use]
    pub fn contains_meal(&self, meal_id: &str) -> bool {
        self.meal_ids.contains(meal_id)
    }

    /// Iterate `(meal, quantity, unit)` contributions in first-seen order
    pub fn contributions(&self) -> impl Iterator<Item = Contribution<'_>> {
        self.contributing_meals
            .iter()
            .zip(&self.quantities)
            .zip(&self.units)
            .map(|((meal, quantity), unit)| Contribution {
                meal,
                quantity,
                unit,
            })
    }
}

/// Shopping list rows keyed by [`AggregationKey`], in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregatedShoppingList {
    rows: IndexMap<AggregationKey, AggregatedIngredientRecord>,
}

impl AggregatedShoppingList {
    /// Row entry for `key`, for in-place merging
    pub(crate) fn entry(
        &mut self,
        key: AggregationKey,
    ) -> Entry<'_, AggregationKey, AggregatedIngredientRecord> {
        self.rows.entry(key)
    }

    /// Look up a row by key (accepts `&str` or `&AggregationKey`)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&AggregatedIngredientRecord>
    where
        Q: ?Sized + Hash + Equivalent<AggregationKey>,
    {
        self.rows.get(key)
    }

    /// Iterate rows in first-seen order
    pub fn iter(&self) -> Iter<'_, AggregationKey, AggregatedIngredientRecord> {
        self.rows.iter()
    }

    /// Row keys in first-seen order
    pub fn keys(&self) -> Keys<'_, AggregationKey, AggregatedIngredientRecord> {
        self.rows.keys()
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a AggregatedShoppingList {
    type Item = (&'a AggregationKey, &'a AggregatedIngredientRecord);
    type IntoIter = Iter<'a, AggregationKey, AggregatedIngredientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

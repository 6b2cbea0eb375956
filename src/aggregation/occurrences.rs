// ABOUTME: Meal occurrence counts - how many plan entries reference each meal
// ABOUTME: Counted independently of ingredient merging; drives the xN multiplier when rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::hash::Hash;

use indexmap::map::Iter;
use indexmap::{Equivalent, IndexMap};
use mealplan_core::models::{MealId, MealPlanEntry};
use serde::Serialize;

/// Number of entries referencing each meal, in first-seen order
///
/// Meals with zero ingredients are counted like any other. Entries whose meal
/// is null or has no identifier are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MealOccurrenceCounts {
    counts: IndexMap<MealId, usize>,
}

impl MealOccurrenceCounts {
    /// Count occurrences over an entry sequence without merging ingredients
    #[must_use]
    pub fn from_entries(entries: &[MealPlanEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            counts.observe(entry);
        }
        counts
    }

    /// Count one entry; returns the identifier that was counted, if any
    pub(crate) fn observe<'a>(&mut self, entry: &'a MealPlanEntry) -> Option<&'a MealId> {
        let meal_id = entry.meal.as_ref()?.identifier()?;
        self.record(meal_id);
        Some(meal_id)
    }

    /// Increment the count for `meal_id`, returning the new count
    pub(crate) fn record(&mut self, meal_id: &MealId) -> usize {
        if let Some(count) = self.counts.get_mut(meal_id) {
            *count += 1;
            *count
        } else {
            self.counts.insert(meal_id.clone(), 1);
            1
        }
    }

    /// Number of entries referencing `meal_id`; 0 if it never appeared
    #[must_use]
    pub fn occurrence_count<Q>(&self, meal_id: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<MealId>,
    {
        self.counts.get(meal_id).copied().unwrap_or(0)
    }

    /// Repeat multiplier to display next to a contribution (`Some(n)` only when n > 1)
    #[must_use]
    pub fn multiplier<Q>(&self, meal_id: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<MealId>,
    {
        Some(self.occurrence_count(meal_id)).filter(|count| *count > 1)
    }

    /// Iterate `(meal_id, count)` pairs in first-seen order
    pub fn iter(&self) -> Iter<'_, MealId, usize> {
        self.counts.iter()
    }

    /// Number of distinct meals counted
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no meal was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted entries
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<'a> IntoIterator for &'a MealOccurrenceCounts {
    type Item = (&'a MealId, &'a usize);
    type IntoIter = Iter<'a, MealId, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

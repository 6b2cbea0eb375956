// ABOUTME: MealId newtype for opaque, stable meal identifiers
// ABOUTME: Borrowable as str so lookups accept plain string slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for meal identifiers
///
/// The identifier is opaque (typically a GraphQL global node id) and stable
/// across all entries of a plan that reference the same meal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(String);

impl MealId {
    /// Create a `MealId` from any string-like value
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MealId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for MealId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for MealId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MealId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

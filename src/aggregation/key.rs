// ABOUTME: AggregationKey derived from an ingredient's name and product keyword
// ABOUTME: Case-insensitive on both fields; no trimming or fuzzy matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::borrow::Borrow;
use std::fmt;

use mealplan_core::constants::keys::KEY_SEPARATOR;
use serde::Serialize;

/// Normalized identity of a shopping list row
///
/// `lowercase(name)` when the lowercased name and product keyword are equal,
/// otherwise `"{lowercase(name)} | {lowercase(product_keyword)}"`. Only case is
/// folded: `"Onion "` and `"onions"` stay distinct from `"onion"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AggregationKey(String);

impl AggregationKey {
    /// Compute the key for an ingredient
    #[must_use]
    pub fn from_parts(name: &str, product_keyword: &str) -> Self {
        let name = name.to_lowercase();
        let keyword = product_keyword.to_lowercase();

        if name == keyword {
            Self(name)
        } else {
            Self(format!("{name}{KEY_SEPARATOR}{keyword}"))
        }
    }

    /// Get the key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AggregationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AggregationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AggregationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

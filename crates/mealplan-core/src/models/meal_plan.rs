// ABOUTME: Meal plan snapshot records mirroring the shopping list query shape
// ABOUTME: MealPlan, Person, MealPlanEntry, Meal, Ingredient, MatchedProduct and Connection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use serde::{Deserialize, Serialize};

use super::{MealId, Quantity};

/// GraphQL connection wrapper (`{ nodes: [...] }`)
///
/// A missing `nodes` array deserializes as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Ordered connection nodes
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Connection<T> {
    fn from(nodes: Vec<T>) -> Self {
        Self { nodes }
    }
}

/// Result of the shopping list query: the plan may be null
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    /// Requested meal plan, `None` when the plan does not exist
    #[serde(default)]
    pub meal_plan: Option<MealPlan>,
}

/// Person a meal plan was prepared for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A meal plan: header fields plus an ordered sequence of entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Plan name
    #[serde(default)]
    pub name_en: Option<String>,
    /// Plan description
    #[serde(default)]
    pub description_en: Option<String>,
    /// Person the plan was prepared for
    #[serde(default)]
    pub person: Option<Person>,
    /// Ordered entries, each referencing one meal
    #[serde(default)]
    pub meal_plan_entries: Option<Connection<MealPlanEntry>>,
}

impl MealPlan {
    /// Create an empty plan with a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_en: Some(name.into()),
            ..Self::default()
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_en = Some(description.into());
        self
    }

    /// Set the person the plan is prepared for
    #[must_use]
    pub fn with_person(mut self, full_name: impl Into<String>) -> Self {
        self.person = Some(Person {
            full_name: Some(full_name.into()),
        });
        self
    }

    /// Append an entry referencing `meal`
    #[must_use]
    pub fn with_meal(self, meal: Meal) -> Self {
        self.with_entry(MealPlanEntry { meal: Some(meal) })
    }

    /// Append an arbitrary entry (including one with a null meal)
    #[must_use]
    pub fn with_entry(mut self, entry: MealPlanEntry) -> Self {
        self.meal_plan_entries
            .get_or_insert_with(Connection::default)
            .nodes
            .push(entry);
        self
    }

    /// Ordered entries; empty when the entry connection is null
    #[must_use]
    pub fn entries(&self) -> &[MealPlanEntry] {
        self.meal_plan_entries
            .as_ref()
            .map(|connection| connection.nodes.as_slice())
            .unwrap_or_default()
    }

    /// Name of the person the plan was prepared for, if known
    #[must_use]
    pub fn prepared_for(&self) -> Option<&str> {
        self.person
            .as_ref()
            .and_then(|person| person.full_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// One reference, within a plan, to a meal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Referenced meal, `None` when the reference is dangling
    #[serde(default)]
    pub meal: Option<Meal>,
}

/// A meal with its ordered ingredients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Opaque identifier, stable across entries
    #[serde(default)]
    pub id: Option<MealId>,
    /// Display name
    #[serde(default)]
    pub name_en: Option<String>,
    /// Ordered ingredients
    #[serde(default)]
    pub ingredients: Option<Connection<Ingredient>>,
}

impl Meal {
    /// Create a meal with an identifier and a display name
    #[must_use]
    pub fn new(id: impl Into<MealId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name_en: Some(name.into()),
            ingredients: None,
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients
            .get_or_insert_with(Connection::default)
            .nodes
            .push(ingredient);
        self
    }

    /// Identifier usable for counting and merging (empty ids count as absent)
    #[must_use]
    pub fn identifier(&self) -> Option<&MealId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    /// Display name usable for merging (empty names count as absent)
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name_en.as_deref().filter(|name| !name.is_empty())
    }

    /// Ordered ingredients; empty when the ingredient connection is null
    #[must_use]
    pub fn ingredient_nodes(&self) -> &[Ingredient] {
        self.ingredients
            .as_ref()
            .map(|connection| connection.nodes.as_slice())
            .unwrap_or_default()
    }
}

/// An ingredient belonging to exactly one meal
///
/// `name`, `product_keyword`, `quantity` and `unit` are required by the
/// aggregation contract once an ingredient exists; they are optional here so
/// that their absence can be reported instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient record identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Free-text ingredient name
    #[serde(default)]
    pub name: Option<String>,
    /// Opaque magnitude
    #[serde(default)]
    pub quantity: Option<Quantity>,
    /// Opaque unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Keyword used to match catalog products
    #[serde(default)]
    pub product_keyword: Option<String>,
    /// Catalog products suggested for this ingredient
    #[serde(default)]
    pub matched_products: Option<Connection<MatchedProduct>>,
}

impl Ingredient {
    /// Create an ingredient with all required fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        product_keyword: impl Into<String>,
        quantity: impl Into<Quantity>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            quantity: Some(quantity.into()),
            unit: Some(unit.into()),
            product_keyword: Some(product_keyword.into()),
            matched_products: None,
        }
    }

    /// Set the record identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a matched product by display name
    #[must_use]
    pub fn with_matched_product(mut self, name: impl Into<String>) -> Self {
        self.matched_products
            .get_or_insert_with(Connection::default)
            .nodes
            .push(MatchedProduct {
                id: None,
                name_en: Some(name.into()),
            });
        self
    }

    /// Matched products; empty when the product connection is null
    #[must_use]
    pub fn matched_product_nodes(&self) -> &[MatchedProduct] {
        self.matched_products
            .as_ref()
            .map(|connection| connection.nodes.as_slice())
            .unwrap_or_default()
    }
}

/// A catalog product suggested for an ingredient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedProduct {
    /// Product record identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, the product's identity for deduplication
    #[serde(default)]
    pub name_en: Option<String>,
}

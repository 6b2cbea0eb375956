// ABOUTME: Application constants for the shopping list engine
// ABOUTME: Aggregation key separator, display labels, service names, and env variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

/// Aggregation key construction
pub mod keys {
    /// Joins the lowercased ingredient name and product keyword when they differ
    pub const KEY_SEPARATOR: &str = " | ";
}

/// Labels used when rendering a shopping list
pub mod labels {
    /// Shown in place of suggested products when an ingredient has none
    pub const NO_MATCHED_PRODUCTS: &str = "N/A";

    /// Title prefix of a rendered shopping list
    pub const SHOPPING_LIST_TITLE: &str = "Shopping List";

    /// Prefix of the line naming the person the plan was prepared for
    pub const PREPARED_FOR: &str = "Prepared for";

    /// Prefix of the repeat multiplier appended to a meal contribution
    pub const MULTIPLIER_PREFIX: &str = "x";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Default service name reported in log output
    pub const MEALPLAN_SHOPPING: &str = "mealplan-shopping";
}

/// Environment variable names read by configuration loaders
pub mod env_vars {
    /// Output format override (`json`, `toon`, `text`)
    pub const OUTPUT_FORMAT: &str = "SHOPPING_LIST_FORMAT";

    /// Multiplier rendering style (`suffix`, `multiply`)
    pub const MULTIPLIER_STYLE: &str = "SHOPPING_LIST_MULTIPLIER";

    /// Pretty-print structured output (`true`/`1`)
    pub const PRETTY: &str = "SHOPPING_LIST_PRETTY";

    /// Label shown for ingredients without matched products
    pub const EMPTY_PRODUCTS_LABEL: &str = "SHOPPING_LIST_EMPTY_LABEL";
}

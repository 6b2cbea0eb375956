// ABOUTME: Main library entry point for the meal plan shopping list engine
// ABOUTME: Aggregates meal plan ingredients into a deduplicated, printable shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

#![deny(unsafe_code)]

//! # Meal Plan Shopping List
//!
//! Derives a consolidated shopping list from a meal plan snapshot. Each meal
//! of the plan carries its own ingredient list; the engine merges the same
//! ingredient across meals, keeps every meal's quantity and unit side by side
//! (no unit conversion), counts how often each meal repeats, and merges the
//! suggested catalog products without duplicates.
//!
//! ## Architecture
//!
//! - **aggregation**: the single-pass engine (keys, rows, occurrence counts)
//! - **snapshot**: parsing of the meal plan query result
//! - **formatters**: view model and JSON/TOON/text output
//! - **config**: rendering configuration from environment
//! - **logging**: tracing subscriber setup
//!
//! Data model and error types live in the `mealplan-core` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use mealplan_core::errors::AppResult;
//! use mealplan_shopping::aggregation::aggregate_response;
//! use mealplan_shopping::formatters::{format_output, OutputFormat, RenderOptions, ShoppingListDocument};
//! use mealplan_shopping::snapshot::parse_snapshot;
//!
//! fn main() -> AppResult<()> {
//!     let response = parse_snapshot(r#"{ "mealPlan": { "nameEn": "Week 1" } }"#)?;
//!     let aggregation = aggregate_response(&response)?;
//!     let document = ShoppingListDocument::build(
//!         response.meal_plan.as_ref(),
//!         &aggregation,
//!         &RenderOptions::default(),
//!     );
//!     let output = format_output(&document, OutputFormat::Text)?;
//!     assert!(output.data.starts_with("Shopping List - Week 1"));
//!     Ok(())
//! }
//! ```

/// Ingredient aggregation engine
pub mod aggregation;

/// Rendering configuration loaded from environment
pub mod config;

/// Output format abstraction (JSON, TOON, text)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Meal plan snapshot parsing
pub mod snapshot;

// ABOUTME: Core types and constants for the meal plan shopping list engine
// ABOUTME: Foundation crate with the meal plan data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate providing shared types for the shopping list engine.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Aggregation key separator, display labels, environment variable names
//! - **models**: Read-only meal plan snapshot as returned by the meal plan query service

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Meal plan snapshot data model (plans, entries, meals, ingredients, matched products)
pub mod models;

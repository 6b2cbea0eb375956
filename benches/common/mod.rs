// ABOUTME: Common benchmark utilities and meal plan fixtures for performance testing
// ABOUTME: Provides reusable plan generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! Common benchmark utilities and meal plan fixtures.

pub mod fixtures;

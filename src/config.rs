// ABOUTME: Shopping list rendering configuration loaded from defaults and environment
// ABOUTME: Output format, multiplier style, pretty printing, and the empty products label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! Shopping List Configuration
//!
//! Configuration is resolved in three layers: built-in defaults, then
//! environment variable overrides, then command-line flags applied by the
//! binary. The aggregation engine itself takes no configuration.
//!
//! ```bash
//! export SHOPPING_LIST_FORMAT=text
//! export SHOPPING_LIST_MULTIPLIER=multiply
//! export SHOPPING_LIST_PRETTY=true
//! export SHOPPING_LIST_EMPTY_LABEL="-"
//! ```

use std::env;

use mealplan_core::constants::{env_vars, labels};
use mealplan_core::errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formatters::{MultiplierStyle, OutputFormat};

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds an unparseable value
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        /// Variable name
        variable: &'static str,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A required setting resolved to an empty value
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Rendering configuration for the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListConfig {
    /// Output serialization format
    pub output_format: OutputFormat,
    /// How repeated meals are shown next to their quantity
    pub multiplier_style: MultiplierStyle,
    /// Pretty-print structured (JSON) output
    pub pretty: bool,
    /// Shown for ingredients without matched products
    pub empty_products_label: String,
}

impl Default for ShoppingListConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            multiplier_style: MultiplierStyle::default(),
            pretty: false,
            empty_products_label: labels::NO_MATCHED_PRODUCTS.to_owned(),
        }
    }
}

impl ShoppingListConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(env_vars::OUTPUT_FORMAT) {
            self.output_format = val.parse().map_err(|reason| ConfigError::InvalidValue {
                variable: env_vars::OUTPUT_FORMAT,
                value: val.clone(),
                reason,
            })?;
        }

        if let Ok(val) = env::var(env_vars::MULTIPLIER_STYLE) {
            self.multiplier_style = val.parse().map_err(|reason| ConfigError::InvalidValue {
                variable: env_vars::MULTIPLIER_STYLE,
                value: val.clone(),
                reason,
            })?;
        }

        if let Ok(val) = env::var(env_vars::PRETTY) {
            self.pretty = parse_flag(&val).ok_or_else(|| ConfigError::InvalidValue {
                variable: env_vars::PRETTY,
                value: val.clone(),
                reason: "expected true/false/1/0".to_owned(),
            })?;
        }

        if let Ok(val) = env::var(env_vars::EMPTY_PRODUCTS_LABEL) {
            self.empty_products_label = val;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the empty products label is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.empty_products_label.trim().is_empty() {
            return Err(ConfigError::MissingField("empty_products_label"));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

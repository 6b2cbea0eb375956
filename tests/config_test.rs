// ABOUTME: Integration tests for shopping list configuration loading
// ABOUTME: Tests defaults, environment overrides, validation, and error conversion
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::env;

use mealplan_core::constants::env_vars;
use mealplan_core::errors::{AppError, ErrorCode};
use mealplan_shopping::config::{ConfigError, ShoppingListConfig};
use mealplan_shopping::formatters::{MultiplierStyle, OutputFormat, RenderOptions};
use serial_test::serial;

const ALL_VARS: [&str; 4] = [
    env_vars::OUTPUT_FORMAT,
    env_vars::MULTIPLIER_STYLE,
    env_vars::PRETTY,
    env_vars::EMPTY_PRODUCTS_LABEL,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and Overrides
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ShoppingListConfig::load().unwrap();
    assert_eq!(config, ShoppingListConfig::default());
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.multiplier_style, MultiplierStyle::Suffix);
    assert!(!config.pretty);
    assert_eq!(config.empty_products_label, "N/A");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_vars::OUTPUT_FORMAT, "text");
    env::set_var(env_vars::MULTIPLIER_STYLE, "Multiply");
    env::set_var(env_vars::PRETTY, "yes");
    env::set_var(env_vars::EMPTY_PRODUCTS_LABEL, "-");

    let config = ShoppingListConfig::load().unwrap();
    clear_env();

    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.multiplier_style, MultiplierStyle::Multiply);
    assert!(config.pretty);
    assert_eq!(config.empty_products_label, "-");

    let options = RenderOptions::from(&config);
    assert_eq!(options.multiplier_style, MultiplierStyle::Multiply);
    assert_eq!(options.empty_products_label, "-");
}

#[test]
#[serial]
fn test_pretty_flag_values() {
    for (value, expected) in [("1", true), ("TRUE", true), ("off", false), ("0", false)] {
        clear_env();
        env::set_var(env_vars::PRETTY, value);
        assert_eq!(ShoppingListConfig::load().unwrap().pretty, expected, "{value}");
    }
    clear_env();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
#[serial]
fn test_invalid_format_is_rejected() {
    clear_env();
    env::set_var(env_vars::OUTPUT_FORMAT, "xml");

    let error = ShoppingListConfig::load().unwrap_err();
    clear_env();

    match &error {
        ConfigError::InvalidValue { variable, value, .. } => {
            assert_eq!(*variable, env_vars::OUTPUT_FORMAT);
            assert_eq!(value, "xml");
        }
        ConfigError::MissingField(field) => panic!("unexpected missing field {field}"),
    }
    assert!(error.to_string().contains("SHOPPING_LIST_FORMAT"));
}

#[test]
#[serial]
fn test_invalid_pretty_flag_is_rejected() {
    clear_env();
    env::set_var(env_vars::PRETTY, "maybe");

    let result = ShoppingListConfig::load();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { variable, .. }) if variable == env_vars::PRETTY
    ));
}

#[test]
#[serial]
fn test_blank_empty_label_fails_validation() {
    clear_env();
    env::set_var(env_vars::EMPTY_PRODUCTS_LABEL, "   ");

    let result = ShoppingListConfig::load();
    clear_env();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::MissingField("empty_products_label")
    );
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error = AppError::from(ConfigError::MissingField("empty_products_label"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("empty_products_label"));
    assert_eq!(error.code.exit_code(), 78);
}

// ABOUTME: Output format abstraction for rendering shopping list documents
// ABOUTME: Supports JSON (default), TOON (token-efficient for LLMs), and a printable text checklist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

//! Output Format Abstraction Layer
//!
//! Turns an aggregation into a [`ShoppingListDocument`] view model and
//! serializes it for the consumer.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, universal compatibility
//! - **TOON**: Token-efficient format for LLM input (`toon` feature)
//! - **Text**: Printable checklist, one block per ingredient
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mealplan_shopping::formatters::{format_output, OutputFormat, RenderOptions, ShoppingListDocument};
//!
//! let document = ShoppingListDocument::build(Some(&plan), &aggregation, &RenderOptions::default());
//! let output = format_output(&document, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

/// Shopping list view model built from an aggregation
pub mod document;
/// Printable text rendering
pub mod text;

pub use document::{RenderOptions, RowContribution, ShoppingListDocument, ShoppingListRow};

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use mealplan_core::errors::AppError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "toon")]
use toon_format::{encode, EncodeOptions};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
    /// Printable checklist
    Text,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
            Self::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
            Self::Text => "text",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parse format from string parameter (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toon" => Ok(Self::Toon),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}' (expected json, toon or text)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a repeated meal is reflected next to its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplierStyle {
    /// Keep the per-meal quantity and append ` xN`
    #[default]
    Suffix,
    /// Multiply numeric quantities by N; textual quantities fall back to the suffix
    Multiply,
}

impl FromStr for MultiplierStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "suffix" => Ok(Self::Suffix),
            "multiply" => Ok(Self::Multiply),
            other => Err(format!(
                "unknown multiplier style '{other}' (expected suffix or multiply)"
            )),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Format a shopping list document in the specified output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - TOON encoding fails or the `toon` feature is disabled (for TOON format)
pub fn format_output(
    document: &ShoppingListDocument,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(document).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Toon => encode_toon(document)?,
        OutputFormat::Text => text::render(document)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format a shopping list document to pretty-printed output
///
/// Only JSON differs from [`format_output`]; TOON and text are already
/// human-readable.
///
/// # Errors
/// Same as [`format_output`].
pub fn format_output_pretty(
    document: &ShoppingListDocument,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    if format != OutputFormat::Json {
        return format_output(document, format);
    }

    let data = serde_json::to_string_pretty(document).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })?;

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = EncodeOptions::default();
    encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON support is not enabled (build with the `toon` feature)".to_owned(),
        format: OutputFormat::Toon,
    })
}

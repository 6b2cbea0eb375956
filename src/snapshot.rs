// ABOUTME: Snapshot document parsing for meal plan query results
// ABOUTME: Accepts the GraphQL data envelope or a bare response, from a file or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::ShoppingListResponse;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Accepted top-level document shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    /// `{ "data": { "mealPlan": ... } }` as returned by a GraphQL endpoint
    Envelope { data: ShoppingListResponse },
    /// `{ "mealPlan": ... }`
    Bare(ShoppingListResponse),
}

/// Parse a snapshot document
///
/// # Errors
///
/// Returns `InvalidFormat` if the input is not JSON or does not match the
/// query shape.
pub fn parse_snapshot(input: &str) -> AppResult<ShoppingListResponse> {
    // Surface serde's line/column on malformed JSON before shape matching
    let value: serde_json::Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(AppError::invalid_input("Snapshot document must be a JSON object"));
    }

    let document = SnapshotDocument::deserialize(value).map_err(|e| {
        AppError::from(e).with_details(json!({ "expected": "{ data: { mealPlan } } or { mealPlan }" }))
    })?;

    Ok(match document {
        SnapshotDocument::Envelope { data } => {
            debug!("Parsed snapshot from GraphQL data envelope");
            data
        }
        SnapshotDocument::Bare(response) => response,
    })
}

/// Read and parse a snapshot from `path`, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns `IoError` if the source cannot be read, or the errors of
/// [`parse_snapshot`].
pub fn read_snapshot(path: &Path) -> AppResult<ShoppingListResponse> {
    let input = if path.as_os_str() == STDIN_PATH {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_resource_id(path.display().to_string())
        })?
    };

    debug!(bytes = input.len(), source = %path.display(), "Read meal plan snapshot");
    parse_snapshot(&input)
}

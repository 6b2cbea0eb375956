// ABOUTME: Opaque ingredient quantity that may be numeric or free text
// ABOUTME: Numbers keep their JSON representation; only rendering scales them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealplan Shopping Contributors

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Decimal places kept when scaling a fractional quantity
const SCALED_DECIMALS: i32 = 6;

/// Largest integer an `f64` holds exactly (2^53)
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Ingredient quantity as recorded on the meal
///
/// The engine never sums or converts quantities across units. A quantity is
/// either a JSON number, kept exactly as received (`2` stays an integer), or
/// whatever text the author entered (`"a pinch"`, `"1/2"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Numeric magnitude
    Number(Number),
    /// Free-text magnitude
    Text(String),
}

impl Quantity {
    /// Numeric value, if this quantity is a number
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            Self::Text(_) => None,
        }
    }

    /// Multiply a numeric quantity by a repeat count
    ///
    /// Integers are multiplied exactly. Fractional values are rounded to six
    /// decimal places, and whole results come back as integers. Returns `None`
    /// for textual quantities, which cannot be scaled.
    #[must_use]
    pub fn scaled(&self, factor: usize) -> Option<Self> {
        let Self::Number(value) = self else {
            return None;
        };
        let factor = u64::try_from(factor).ok()?;

        if let Some(int) = value.as_u64() {
            if let Some(product) = int.checked_mul(factor) {
                return Some(Self::Number(Number::from(product)));
            }
        } else if let Some(int) = value.as_i64() {
            if let Some(product) = i64::try_from(factor).ok().and_then(|f| int.checked_mul(f)) {
                return Some(Self::Number(Number::from(product)));
            }
        }

        let factor = u32::try_from(factor).ok()?;
        rounded_number(value.as_f64()? * f64::from(factor)).map(Self::Number)
    }
}

/// Round to [`SCALED_DECIMALS`], collapsing whole values to integers
fn rounded_number(value: f64) -> Option<Number> {
    let scale = 10_f64.powi(SCALED_DECIMALS);
    let rounded = (value * scale).round() / scale;

    if rounded.fract().abs() < f64::EPSILON && rounded.abs() < MAX_EXACT_F64_INT {
        Some(Number::from(rounded as i64))
    } else {
        Number::from_f64(rounded)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

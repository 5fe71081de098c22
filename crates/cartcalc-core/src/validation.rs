//! # Validation Module
//!
//! Boundary validation for pricing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization / Builder                                    │
//! │  ├── Type checks (serde)                                               │
//! │  └── THIS MODULE: value rules (price ≥ 0, quantity > 0, ...)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing Engine                                               │
//! │  ├── Cross-line checks only (unique ids)                               │
//! │  └── Trusts every CartLineItem it receives                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `CartLineItem` can only be built through these checks, so the engine
//! never sees a negative price, a zero quantity, or a NaN weight.
//!
//! ## Usage
//! ```rust
//! use cartcalc_core::validation::{validate_line_id, validate_quantity};
//!
//! assert!(validate_line_id("WIDGET-01").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line identifier.
///
/// Any non-empty string is an id: spaces, dots and slashes are all fine.
/// Ids are compared exactly, so nothing is trimmed.
///
/// ## Example
/// ```rust
/// use cartcalc_core::validation::validate_line_id;
///
/// assert!(validate_line_id("COKE-330").is_ok());
/// assert!(validate_line_id("Desk Lamp").is_ok());
/// assert!(validate_line_id("").is_err());
/// ```
pub fn validate_line_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cartcalc_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit_price_cents".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0); a present line with zero quantity is malformed
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit weight in kilograms.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative
///
/// ## Example
/// ```rust
/// use cartcalc_core::validation::validate_weight_kg;
///
/// assert!(validate_weight_kg(0.0).is_ok());
/// assert!(validate_weight_kg(2.5).is_ok());
/// assert!(validate_weight_kg(-0.1).is_err());
/// assert!(validate_weight_kg(f64::NAN).is_err());
/// ```
pub fn validate_weight_kg(kg: f64) -> ValidationResult<()> {
    if !kg.is_finite() || kg < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit_weight_kg".to_string(),
        });
    }

    Ok(())
}

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that no two ids in a cart are equal.
///
/// ## Example
/// ```rust
/// use cartcalc_core::validation::validate_unique_ids;
///
/// assert!(validate_unique_ids(["A", "B"]).is_ok());
/// assert!(validate_unique_ids(["A", "B", "A"]).is_err());
/// ```
pub fn validate_unique_ids<'a, I>(ids: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: "line id".to_string(),
                value: id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for cartcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartcalc-core errors (this file)                                      │
//! │  ├── CoreError        - Engine and policy failures                     │
//! │  └── ValidationError  - Input rejected at construction time            │
//! │                                                                         │
//! │  cartcalc-cli errors (separate crate)                                  │
//! │  └── ConfigError / InputError - Files, env, request parsing            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary edge)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line id, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. There is no partial result: a failed call yields only the error

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors produced by the pricing engine and its configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A shipping method name outside the closed set.
    ///
    /// ## When This Occurs
    /// - Parsing a method from a request or CLI flag (`"OVERNIGHT"`)
    ///
    /// Inside the engine the method is an enum, so this can only surface at
    /// the parsing boundary.
    #[error("Unknown shipping method '{0}'. Valid options: STANDARD, EXPEDITED, EXPRESS")]
    UnknownShippingMethod(String),

    /// An intermediate amount no longer fits in i64 cents.
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },

    /// A pricing policy with values the engine cannot honor.
    #[error("Invalid pricing policy: {reason}")]
    InvalidPolicy { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are raised while building `CartLineItem`s and other inputs, before
/// any pricing runs. The engine never re-validates what they guard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater (and finite, for weights).
    #[error("{field} must be a non-negative number")]
    MustBeNonNegative { field: String },

    /// Duplicate value (e.g., two cart lines with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownShippingMethod("OVERNIGHT".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown shipping method 'OVERNIGHT'. Valid options: STANDARD, EXPEDITED, EXPRESS"
        );

        let err = CoreError::AmountOverflow {
            operation: "line value",
        };
        assert_eq!(err.to_string(), "Amount overflow while computing line value");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBeNonNegative {
            field: "unit_weight_kg".to_string(),
        };
        assert_eq!(err.to_string(), "unit_weight_kg must be a non-negative number");

        let err = ValidationError::Duplicate {
            field: "line id".to_string(),
            value: "SKU-1".to_string(),
        };
        assert_eq!(err.to_string(), "line id 'SKU-1' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

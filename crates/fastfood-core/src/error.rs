//! # Error Types
//!
//! Domain-specific error types for fastfood-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fastfood-core errors (this file)                                      │
//! │  ├── CoreError        - Domain errors that abort an import             │
//! │  └── ValidationError  - Record validation failures (record skipped)    │
//! │                                                                         │
//! │  fastfood-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  fastfood-processor errors                                             │
//! │  └── ProcessorError   - What import/export callers see                 │
//! │                                                                         │
//! │  Flow: CoreError → ProcessorError → CLI                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, token, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// Unlike [`ValidationError`], these are not recovered per record: an
/// importer that hits one stops and hands it to its caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order type token is not one of the known variants.
    ///
    /// ## When This Occurs
    /// - `<Type>Delivery</Type>` in an orders import
    /// - Wrong case: `<Type>togo</Type>`
    #[error("Unknown order type: '{0}'")]
    UnknownOrderType(String),

    /// Order timestamp does not follow `dd/MM/yyyy HH:mm`.
    #[error("Invalid order date/time '{value}': {reason}")]
    InvalidDateTime { value: String, reason: String },

    /// A total does not fit in i64 cents.
    ///
    /// ## When This Occurs
    /// - Export of an order whose line totals overflow when summed
    #[error("Amount overflow while computing {what}")]
    AmountOverflow { what: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Importers only look at pass/fail; the variant is kept for logging.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Decimal amount is below the minimum or too large to store in cents.
    #[error("{field} must be at least {min} and fit in cents")]
    InvalidAmount { field: String, min: Money },
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
        let err = CoreError::UnknownOrderType("Delivery".to_string());
        assert_eq!(err.to_string(), "Unknown order type: 'Delivery'");

        let err = CoreError::InvalidDateTime {
            value: "2018-08-21".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid order date/time '2018-08-21'"));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer".to_string(),
        };
        assert_eq!(err.to_string(), "customer is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 15,
            max: 80,
        };
        assert_eq!(err.to_string(), "age must be between 15 and 80");
    }

    #[test]
    fn test_amount_errors() {
        let err = CoreError::AmountOverflow { what: "order total" };
        assert_eq!(err.to_string(), "Amount overflow while computing order total");

        let err = ValidationError::InvalidAmount {
            field: "price".to_string(),
            min: Money::from_cents(1),
        };
        assert_eq!(err.to_string(), "price must be at least 0.01 and fit in cents");
    }
}

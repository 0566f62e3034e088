//! # Validation Module
//!
//! Field validators and the [`Validate`] trait implemented by every import
//! record.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde_json / quick-xml)                     │
//! │  ├── Wrong types → whole payload rejected (fatal)                      │
//! │  └── Missing fields → None / 0, caught below                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required, length and range rules per record                       │
//! │  └── Failure → record skipped, "Invalid data format." in the report    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── UNIQUE item / category names                                      │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fastfood_core::validation::{validate_length, validate_range};
//!
//! assert!(validate_length("name", Some("Burger"), 3, 30).is_ok());
//! assert!(validate_length("name", Some("Bu"), 3, 30).is_err());
//! assert!(validate_range("age", 14, 15, 80).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validate Trait
// =============================================================================

/// A record that knows its own field constraints.
pub trait Validate {
    /// Checks every constraint, stopping at the first failure.
    fn validate(&self) -> ValidationResult<()>;

    /// Pass/fail view of [`Validate::validate`].
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Requires a present, non-blank value and returns it.
///
/// ## Example
/// ```rust
/// use fastfood_core::validation::validate_required;
///
/// assert_eq!(validate_required("customer", Some("Garry")).unwrap(), "Garry");
/// assert!(validate_required("customer", Some("   ")).is_err());
/// assert!(validate_required("customer", None).is_err());
/// ```
pub fn validate_required<'a>(field: &str, value: Option<&'a str>) -> ValidationResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

/// Requires a present value whose length, in characters, is within
/// `min..=max`.
///
/// The value is not trimmed: surrounding spaces count.
pub fn validate_length(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    let value = value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })?;

    let len = value.chars().count();

    if len < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }

    if len > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Requires `min <= value <= max`.
pub fn validate_range(field: &str, value: i64, min: i64, max: i64) -> ValidationResult<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Smallest accepted item price.
pub const MIN_PRICE: Money = Money::from_cents(1);

/// Validates a decimal price and converts it to [`Money`].
///
/// ## Rules
/// - The amount as sent must be at least 0.01 (0.005 does not round up)
/// - Its cents must fit in an i64
///
/// ## Example
/// ```rust
/// use fastfood_core::validation::validate_price;
///
/// assert_eq!(validate_price("price", 3.5).unwrap().cents(), 350);
/// assert!(validate_price("price", 0.0).is_err());
/// assert!(validate_price("price", 0.0099).is_err());
/// assert!(validate_price("price", 1e20).is_err());
/// ```
pub fn validate_price(field: &str, amount: f64) -> ValidationResult<Money> {
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        min: MIN_PRICE,
    };

    if amount.is_nan() || amount < MIN_PRICE.to_decimal() {
        return Err(invalid());
    }

    Money::try_from_decimal(amount).ok_or_else(invalid)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("employee", Some("Ivan")).is_ok());
        assert!(validate_required("employee", Some("")).is_err());
        assert!(validate_required("employee", Some("\t ")).is_err());
        assert!(validate_required("employee", None).is_err());
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_length("name", Some("abc"), 3, 30).is_ok());
        assert!(validate_length("name", Some(&"a".repeat(30)), 3, 30).is_ok());

        assert!(matches!(
            validate_length("name", Some("ab"), 3, 30),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(matches!(
            validate_length("name", Some(&"a".repeat(31)), 3, 30),
            Err(ValidationError::TooLong { max: 30, .. })
        ));
        assert!(matches!(
            validate_length("name", None, 3, 30),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_length_counts_characters() {
        // 3 characters, 6 bytes
        assert!(validate_length("name", Some("ÄÖÜ"), 3, 30).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("age", 15, 15, 80).is_ok());
        assert!(validate_range("age", 80, 15, 80).is_ok());
        assert!(validate_range("age", 14, 15, 80).is_err());
        assert!(validate_range("age", 81, 15, 80).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_bounds() {
        assert_eq!(validate_price("price", 0.01).unwrap(), MIN_PRICE);
        assert_eq!(validate_price("price", 9.99).unwrap().cents(), 999);

        assert!(validate_price("price", 0.0).is_err());
        assert!(validate_price("price", -1.0).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_price_does_not_round_up_to_minimum() {
        // Both would round to one cent
        assert!(matches!(
            validate_price("price", 0.005),
            Err(ValidationError::InvalidAmount { .. })
        ));
        assert!(validate_price("price", 0.0099).is_err());
    }

    #[test]
    fn test_validate_price_rejects_amounts_too_large_for_cents() {
        assert!(matches!(
            validate_price("price", 1e20),
            Err(ValidationError::InvalidAmount { ref field, .. }) if field == "price"
        ));
        assert!(validate_price("price", f64::INFINITY).is_err());
        assert!(validate_price("price", 1e15).is_ok());
    }

    #[test]
    fn test_is_valid_defaults_to_validate() {
        struct AlwaysShort;
        impl Validate for AlwaysShort {
            fn validate(&self) -> ValidationResult<()> {
                validate_length("name", Some("x"), 3, 30)
            }
        }
        assert!(!AlwaysShort.is_valid());
    }
}

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Floating point: 0.1 + 0.2 = 0.30000000000000004                        │
//! │  Integer cents:  10  + 20  = 30                                         │
//! │                                                                         │
//! │  Item prices arrive as decimals ("Price": 3.50). They are converted    │
//! │  to cents ONCE at the edge (`try_from_decimal`), every checked sum and │
//! │  product after that is integer math, and they turn back into decimals │
//! │  only when a report is written (`to_decimal` / `Display`).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fastfood_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let doubled = price.checked_mul(2).unwrap();
//! let total = price.checked_add(Money::from_cents(500)).unwrap();
//! assert_eq!(total.to_string(), "15.99");
//! assert_eq!(doubled.cents(), 2198);
//! assert!(Money::from_cents(i64::MAX).checked_mul(2).is_none());
//! ```

use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the SQLite INTEGER column it is stored in
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked arithmetic only**: totals report overflow as `None`
/// - **No serde derive**: the wire format is a decimal, see [`decimal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an external decimal amount to Money, rounding to the
    /// nearest cent (half away from zero).
    ///
    /// Returns `None` for NaN, infinities and amounts whose cents do not
    /// fit in an i64.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_decimal(3.5).map(|m| m.cents()), Some(350));
    /// assert_eq!(Money::try_from_decimal(1.005).map(|m| m.cents()), Some(101));
    /// assert_eq!(Money::try_from_decimal(1e20), None);
    /// ```
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        // The epsilon nudges values like 1.005 (really 1.00499999...) the
        // way a decimal reader would round them.
        let scaled = amount * 100.0;
        let rounded = (scaled + scaled.signum() * 1e-7).round();

        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
            return None;
        }

        Some(Money(rounded as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal number (for JSON output only).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_mul(3), Some(Money::from_cents(897)));
    /// ```
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sums amounts, `None` as soon as the running total overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering (`12.50`, `-5.05`), used by the XML export.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

/// Writes [`Money`] as a decimal number, and reads raw decimal amounts.
///
/// Reading yields the amount as sent (`f64`), before any rounding to cents,
/// so validation can check the exact value.
///
/// ## Usage
/// ```rust
/// use fastfood_core::money::{self, Money};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize)]
/// struct Line {
///     #[serde(serialize_with = "money::decimal::serialize")]
///     price: Money,
/// }
///
/// #[derive(Deserialize)]
/// struct Input {
///     #[serde(deserialize_with = "money::decimal::deserialize_amount")]
///     price: f64,
/// }
///
/// let line = Line { price: Money::from_cents(350) };
/// assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"price":3.5}"#);
///
/// let input: Input = serde_json::from_str(r#"{"price": "3.50"}"#).unwrap();
/// assert_eq!(input.price, 3.5);
/// ```
pub mod decimal {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(value: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.to_decimal())
    }

    /// Accepts a JSON number or a numeric string.
    pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal amount")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

/// Writes [`Money`] as its two-decimal text (`12.50`).
///
/// Used where the output format is text-only, such as XML element bodies.
pub mod plain {
    use serde::Serializer;

    use super::Money;

    pub fn serialize<S>(value: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

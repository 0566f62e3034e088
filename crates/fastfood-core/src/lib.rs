//! # fastfood-core: Pure Domain Logic for the FastFood back-end
//!
//! This crate holds the entity model, money arithmetic, import/export DTOs
//! and record validation as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FastFood Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 fastfood CLI / fastfood-processor               │   │
//! │  │   import_employees, import_items, import_orders, exports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fastfood-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    dto    │  │ validation│  │   │
//! │  │   │  Item     │  │   Money   │  │ import    │  │ Validate  │  │   │
//! │  │   │  Order    │  │  (cents)  │  │ export    │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  fastfood-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Category, Item, Position, Employee, Order, OrderItem)
//! - [`money`] - Money type with checked integer arithmetic (no floating point!)
//! - [`dto`] - Wire shapes for the JSON/XML imports and exports
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators and the [`Validate`] trait
//!
//! ## Example Usage
//!
//! ```rust
//! use fastfood_core::money::Money;
//! use fastfood_core::types::OrderType;
//!
//! let price = Money::from_cents(350); // 3.50
//! let line = price.checked_mul(3).unwrap();
//! assert_eq!(line.to_string(), "10.50");
//!
//! let kind: OrderType = "ToGo".parse().unwrap();
//! assert_eq!(kind.as_str(), "ToGo");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::Validate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Wire format for order timestamps (`dd/MM/yyyy HH:mm`).
///
/// Used both to parse `<DateTime>` during import and to render the
/// "Order for ... on ... added" report line.
pub const ORDER_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Report line emitted for any rejected import record.
pub const FAILURE_MESSAGE: &str = "Invalid data format.";

/// Shortest allowed name for people, items, categories and positions.
pub const MIN_NAME_LENGTH: usize = 3;

/// Longest allowed name for people, items, categories and positions.
pub const MAX_NAME_LENGTH: usize = 30;

/// Youngest employee the shop may register.
pub const MIN_EMPLOYEE_AGE: i64 = 15;

/// Oldest employee the shop may register.
pub const MAX_EMPLOYEE_AGE: i64 = 80;

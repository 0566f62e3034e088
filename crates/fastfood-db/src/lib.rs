//! # fastfood-db: Database Layer for the FastFood back-end
//!
//! This crate provides database access for the FastFood importer/exporter.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FastFood Data Flow                               │
//! │                                                                         │
//! │  fastfood CLI (import-orders, export-categories, ...)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fastfood-processor (importer / exporter)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   fastfood-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (one per     │    │  (embedded)  │  │   │
//! │  │   │               │    │   aggregate)  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ EmployeeRepo  │    │ 001_initial  │  │   │
//! │  │   │               │    │ OrderRepo ... │    │  _schema.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (FASTFOOD_DB_PATH, default ./fastfood.db)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (employee, item, order, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fastfood_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./fastfood.db")).await?;
//!
//! let avery = db.employees().get_details_by_name("Avery").await?;
//! let stats = db.categories().load_details(&["Grill", "Beverages"]).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::employee::EmployeeRepository;
pub use repository::item::ItemRepository;
pub use repository::order::OrderRepository;
pub use repository::position::PositionRepository;

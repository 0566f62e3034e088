//! # fastfood-processor: Import/Export Pipelines
//!
//! Moves data between external JSON/XML payloads and the SQLite store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  employees.json ─┐                                                      │
//! │  items.json ─────┼─► importer ──► fastfood-db ──► exporter ─┬─► JSON   │
//! │  orders.xml ─────┘   (reports)                    (reports) └─► XML    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`importer`] - `import_employees`, `import_items`, `import_orders`
//! - [`exporter`] - `export_orders_by_employee`, `export_category_statistics`
//! - [`config`] - Environment configuration
//! - [`error`] - Fatal error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fastfood_db::{Database, DbConfig};
//! use fastfood_processor::{exporter, importer};
//!
//! let db = Database::new(DbConfig::new("./fastfood.db")).await?;
//! println!("{}", importer::import_employees(&db, &json).await?);
//! println!("{}", exporter::export_orders_by_employee(&db, "Avery Quinn", "ToGo").await?);
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod importer;

pub use config::{AppConfig, ConfigError};
pub use error::{ProcessorError, ProcessorResult};
pub use exporter::{export_category_statistics, export_orders_by_employee};
pub use importer::{import_employees, import_items, import_orders};

//! # Repository Module
//!
//! Database repository implementations, one per aggregate.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Importer / Exporter                                                    │
//! │       │   db.positions().get_by_name("Cook")                           │
//! │       ▼                                                                 │
//! │  Repository (owns a SqlitePool clone, no state of its own)             │
//! │       │   SELECT / INSERT, batches inside one transaction              │
//! │       ▼                                                                 │
//! │  SQLite                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PositionRepository`](position::PositionRepository) - Lookup by name, eager insert
//! - [`CategoryRepository`](category::CategoryRepository) - Lookup, eager insert, statistics graph
//! - [`EmployeeRepository`](employee::EmployeeRepository) - Lookup, batch insert, order graph
//! - [`ItemRepository`](item::ItemRepository) - Lookup, batch insert, sales per item
//! - [`OrderRepository`](order::OrderRepository) - Batch insert of orders + lines, loading

pub mod category;
pub mod employee;
pub mod item;
pub mod order;
pub mod position;

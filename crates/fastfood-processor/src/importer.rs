//! # Importer
//!
//! Three independent pipelines turning external payloads into stored rows.
//!
//! ## Pipeline Shape
//! ```text
//! payload ──parse──► DTOs ──for each──┬─ invalid / unresolvable ─► "Invalid data format."
//!                                     └─ accepted ─► pending batch + success line
//!                                                          │
//!                              after the loop: one transaction per batch
//! ```
//!
//! Lookup rows (positions, categories) are resolve-or-create and committed
//! as soon as they are created, so later records of the same call reuse
//! them. Employees and items referenced by orders are resolve-or-reject.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::ProcessorResult;
use fastfood_core::dto::{EmployeeImportDto, ItemImportDto, OrdersImportDocument};
use fastfood_core::{
    generate_id, Category, CoreError, Employee, Item, Order, OrderItem, OrderType, Position,
    Validate, FAILURE_MESSAGE, ORDER_DATETIME_FORMAT,
};
use fastfood_db::{Database, DbResult};

// =============================================================================
// Report
// =============================================================================

/// Accumulates one line per input record.
#[derive(Debug, Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn success(&mut self, line: String) {
        self.lines.push(line);
    }

    fn failure(&mut self) {
        self.lines.push(FAILURE_MESSAGE.to_string());
    }

    /// Lines joined by `\n`, no trailing newline.
    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn imported(name: &str) -> String {
    format!("Record {} successfully imported.", name)
}

/// Runs record validation, logging the reason for a rejection.
fn accept<T: Validate + std::fmt::Debug>(record: &T) -> bool {
    match record.validate() {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "Rejected record");
            debug!(?record, "Rejected record payload");
            false
        }
    }
}

// =============================================================================
// Employees
// =============================================================================

/// Imports employees from a JSON array of `{Name, Age, Position}`.
///
/// ## Returns
/// One report line per record, in input order, joined by `\n`.
pub async fn import_employees(db: &Database, json: &str) -> ProcessorResult<String> {
    let records: Vec<EmployeeImportDto> = serde_json::from_str(json)?;
    debug!(records = records.len(), "Parsed employees payload");

    let mut report = Report::default();
    let mut employees = Vec::new();

    for record in &records {
        let (Some(name), Some(position_name)) =
            (record.name.as_deref(), record.position.as_deref())
        else {
            warn!("Rejected employee without name or position");
            report.failure();
            continue;
        };

        if !accept(record) {
            report.failure();
            continue;
        }

        let position = resolve_position(db, position_name).await?;

        employees.push(Employee {
            id: generate_id(),
            name: name.to_string(),
            age: record.age,
            position_id: position.id,
        });
        report.success(imported(name));
    }

    db.employees().insert_batch(&employees).await?;
    info!(
        records = records.len(),
        imported = employees.len(),
        "Employee import complete"
    );

    Ok(report.finish())
}

/// Finds a position by exact name, creating it when missing.
async fn resolve_position(db: &Database, name: &str) -> DbResult<Position> {
    let repo = db.positions();
    if let Some(position) = repo.get_by_name(name).await? {
        return Ok(position);
    }

    let position = Position::new(name);
    repo.insert(&position).await?;
    debug!(name, "Created position");
    Ok(position)
}

// =============================================================================
// Items
// =============================================================================

/// Imports menu items from a JSON array of `{Name, Price, Category}`.
///
/// A record whose name is already stored, or already accepted earlier in
/// the same payload, is rejected.
pub async fn import_items(db: &Database, json: &str) -> ProcessorResult<String> {
    let records: Vec<ItemImportDto> = serde_json::from_str(json)?;
    debug!(records = records.len(), "Parsed items payload");

    let mut report = Report::default();
    let mut items = Vec::new();
    let mut pending_names: HashSet<String> = HashSet::new();

    for record in &records {
        let (Some(name), Some(category_name)) =
            (record.name.as_deref(), record.category.as_deref())
        else {
            warn!("Rejected item without name or category");
            report.failure();
            continue;
        };

        if !accept(record) {
            report.failure();
            continue;
        }
        // Checked by accept() above
        let Ok(price) = record.price() else {
            report.failure();
            continue;
        };

        if pending_names.contains(name) || db.items().exists_by_name(name).await? {
            warn!(name, "Rejected duplicate item");
            report.failure();
            continue;
        }

        let category = resolve_category(db, category_name).await?;

        pending_names.insert(name.to_string());
        items.push(Item {
            id: generate_id(),
            name: name.to_string(),
            price_cents: price.cents(),
            category_id: category.id,
        });
        report.success(imported(name));
    }

    db.items().insert_batch(&items).await?;
    info!(
        records = records.len(),
        imported = items.len(),
        "Item import complete"
    );

    Ok(report.finish())
}

/// Finds a category by exact name, creating it when missing.
async fn resolve_category(db: &Database, name: &str) -> DbResult<Category> {
    let repo = db.categories();
    if let Some(category) = repo.get_by_name(name).await? {
        return Ok(category);
    }

    let category = Category::new(name);
    repo.insert(&category).await?;
    debug!(name, "Created category");
    Ok(category)
}

// =============================================================================
// Orders
// =============================================================================

/// Imports orders from an `<Orders>` XML document.
///
/// ## Fatal Errors
/// * `ProcessorError::Core(UnknownOrderType)` - `<Type>` is not `ForHere`/`ToGo`
/// * `ProcessorError::Core(InvalidDateTime)` - `<DateTime>` is not `dd/MM/yyyy HH:mm`
///
/// Either aborts the call before anything from it is written.
pub async fn import_orders(db: &Database, xml: &str) -> ProcessorResult<String> {
    let document: OrdersImportDocument = quick_xml::de::from_str(xml)?;
    debug!(records = document.orders.len(), "Parsed orders payload");

    let mut report = Report::default();
    let mut orders = Vec::new();
    let mut order_items = Vec::new();

    for record in &document.orders {
        let (Some(customer), Some(employee_name), Some(date_time), Some(order_type)) = (
            record.customer.as_deref(),
            record.employee.as_deref(),
            record.date_time.as_deref(),
            record.order_type.as_deref(),
        ) else {
            warn!("Rejected order with missing fields");
            report.failure();
            continue;
        };

        if !accept(record) {
            report.failure();
            continue;
        }

        let Some(employee) = db.employees().get_by_name(employee_name).await? else {
            warn!(employee = employee_name, "Rejected order for unknown employee");
            report.failure();
            continue;
        };

        let mut items = Vec::with_capacity(record.lines().len());
        for line in record.lines() {
            let name = line.name.as_deref().unwrap_or_default();
            match db.items().get_by_name(name).await? {
                Some(item) => items.push((item, line.quantity)),
                None => {
                    warn!(item = name, "Order references unknown item");
                    break;
                }
            }
        }
        if items.len() != record.lines().len() {
            report.failure();
            continue;
        }

        let date_time = parse_order_date_time(date_time)?;
        let order_type: OrderType = order_type.parse()?;

        let order = Order {
            id: generate_id(),
            customer: customer.to_string(),
            date_time,
            order_type,
            employee_id: employee.id,
        };

        order_items.extend(items.into_iter().map(|(item, quantity)| OrderItem {
            item_id: item.id,
            order_id: order.id.clone(),
            quantity,
        }));

        report.success(format!(
            "Order for {} on {} added",
            order.customer,
            order.date_time.format(ORDER_DATETIME_FORMAT)
        ));
        orders.push(order);
    }

    db.orders().insert_batch(&orders, &order_items).await?;
    info!(
        records = document.orders.len(),
        imported = orders.len(),
        lines = order_items.len(),
        "Order import complete"
    );

    Ok(report.finish())
}

/// Parses an order timestamp in `dd/MM/yyyy HH:mm` form.
pub fn parse_order_date_time(value: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(value, ORDER_DATETIME_FORMAT).map_err(|err| {
        CoreError::InvalidDateTime {
            value: value.to_string(),
            reason: err.to_string(),
        }
    })
}

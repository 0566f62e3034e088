//! # Data Transfer Objects
//!
//! Wire shapes for the three imports and two exports.
//!
//! ## Payloads
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IMPORT (parse → validate → resolve → persist)                          │
//! │                                                                         │
//! │  employees.json  [{ "Name", "Age", "Position" }]    EmployeeImportDto  │
//! │  items.json      [{ "Name", "Price", "Category" }]  ItemImportDto      │
//! │  orders.xml      <Orders><Order>...</Order></Orders> OrdersImportDocument│
//! │                                                                         │
//! │  EXPORT (load → aggregate → sort → serialize)                           │
//! │                                                                         │
//! │  orders by employee  JSON { Name, Orders, TotalMade }                  │
//! │  category statistics XML  <Categories><Category>...</Categories>       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Import fields are `Option`/defaulted so that a missing field fails
//! validation for that record only, instead of rejecting the whole payload.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::{self, Money};
use crate::types::{ItemDetails, OrderDetails, OrderLine};
use crate::validation::{
    validate_length, validate_price, validate_quantity, validate_range, validate_required,
    Validate, ValidationResult,
};
use crate::{MAX_EMPLOYEE_AGE, MAX_NAME_LENGTH, MIN_EMPLOYEE_AGE, MIN_NAME_LENGTH};

// =============================================================================
// Import: Employees (JSON)
// =============================================================================

/// One element of the employees JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeImportDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub position: Option<String>,
}

impl Validate for EmployeeImportDto {
    fn validate(&self) -> ValidationResult<()> {
        validate_length("name", self.name.as_deref(), MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        validate_range("age", self.age, MIN_EMPLOYEE_AGE, MAX_EMPLOYEE_AGE)?;
        validate_length(
            "position",
            self.position.as_deref(),
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )
    }
}

// =============================================================================
// Import: Items (JSON)
// =============================================================================

/// One element of the items JSON array.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemImportDto {
    #[serde(default)]
    pub name: Option<String>,
    /// The amount as sent; converted to cents by [`ItemImportDto::price`].
    #[serde(default, deserialize_with = "money::decimal::deserialize_amount")]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
}

impl ItemImportDto {
    /// The validated price in cents.
    pub fn price(&self) -> ValidationResult<Money> {
        validate_price("price", self.price)
    }
}

impl Validate for ItemImportDto {
    fn validate(&self) -> ValidationResult<()> {
        validate_length("name", self.name.as_deref(), MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        self.price()?;
        validate_length(
            "category",
            self.category.as_deref(),
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )
    }
}

// =============================================================================
// Import: Orders (XML)
// =============================================================================

/// The `<Orders>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "Orders")]
pub struct OrdersImportDocument {
    #[serde(rename = "Order", default)]
    pub orders: Vec<OrderImportDto>,
}

/// One `<Order>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderImportDto {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub employee: Option<String>,
    /// Raw `dd/MM/yyyy HH:mm` text, parsed by the importer.
    #[serde(default)]
    pub date_time: Option<String>,
    /// Raw order type token, parsed strictly by the importer.
    #[serde(rename = "Type", default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub items: OrderItemsImportDto,
}

/// The `<Items>` wrapper around an order's lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderItemsImportDto {
    #[serde(rename = "Item", default)]
    pub lines: Vec<OrderLineImportDto>,
}

/// One `<Item>` line of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderLineImportDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: i64,
}

impl OrderImportDto {
    /// The order's lines.
    pub fn lines(&self) -> &[OrderLineImportDto] {
        &self.items.lines
    }
}

impl Validate for OrderLineImportDto {
    fn validate(&self) -> ValidationResult<()> {
        validate_length("item", self.name.as_deref(), MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        validate_quantity(self.quantity)
    }
}

impl Validate for OrderImportDto {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("customer", self.customer.as_deref())?;
        validate_required("employee", self.employee.as_deref())?;
        validate_required("date_time", self.date_time.as_deref())?;
        validate_required("type", self.order_type.as_deref())?;
        self.lines().iter().try_for_each(Validate::validate)
    }
}

// =============================================================================
// Export: Orders by Employee (JSON)
// =============================================================================

/// Root object of the orders-by-employee report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeOrdersExportDto {
    pub name: String,
    pub orders: Vec<OrderExportDto>,
    #[serde(serialize_with = "money::decimal::serialize")]
    pub total_made: Money,
}

/// One order in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderExportDto {
    pub customer: String,
    pub items: Vec<OrderItemExportDto>,
    #[serde(serialize_with = "money::decimal::serialize")]
    pub total_price: Money,
}

/// One line of an order in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItemExportDto {
    pub name: String,
    #[serde(serialize_with = "money::decimal::serialize")]
    pub price: Money,
    pub quantity: i64,
}

impl From<&OrderLine> for OrderItemExportDto {
    fn from(line: &OrderLine) -> Self {
        OrderItemExportDto {
            name: line.item.name.clone(),
            price: line.item.price(),
            quantity: line.quantity,
        }
    }
}

impl TryFrom<&OrderDetails> for OrderExportDto {
    type Error = CoreError;

    fn try_from(details: &OrderDetails) -> CoreResult<Self> {
        Ok(OrderExportDto {
            customer: details.order.customer.clone(),
            items: details.lines.iter().map(OrderItemExportDto::from).collect(),
            total_price: details.total_price()?,
        })
    }
}

// =============================================================================
// Export: Category Statistics (XML)
// =============================================================================

/// The `<Categories>` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "Categories")]
pub struct CategoriesExportDocument {
    #[serde(rename = "Category")]
    pub categories: Vec<CategoryExportDto>,
}

/// One `<Category>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryExportDto {
    pub name: String,
    pub most_popular_item: MostPopularItemExportDto,
}

/// The `<MostPopularItem>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MostPopularItemExportDto {
    pub name: String,
    #[serde(serialize_with = "money::plain::serialize")]
    pub total_made: Money,
    pub times_sold: i64,
}

impl TryFrom<&ItemDetails> for MostPopularItemExportDto {
    type Error = CoreError;

    fn try_from(details: &ItemDetails) -> CoreResult<Self> {
        Ok(MostPopularItemExportDto {
            name: details.item.name.clone(),
            total_made: details.total_made()?,
            times_sold: details.times_sold()?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

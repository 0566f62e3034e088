//! # Domain Types
//!
//! Entities of the FastFood back-end and the loaded graphs built from them.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Model                                    │
//! │                                                                         │
//! │  ┌─────────────┐ 1     * ┌─────────────┐ 1     * ┌─────────────┐       │
//! │  │  Position   │────────►│  Employee   │────────►│    Order    │       │
//! │  │  name       │         │  name, age  │         │  customer   │       │
//! │  └─────────────┘         └─────────────┘         │  date_time  │       │
//! │                                                  │  order_type │       │
//! │                                                  └──────┬──────┘       │
//! │                                                         │ 1            │
//! │                                                         │ *            │
//! │  ┌─────────────┐ 1     * ┌─────────────┐ 1     * ┌──────▼──────┐       │
//! │  │  Category   │────────►│    Item     │────────►│  OrderItem  │       │
//! │  │  name (UQ)  │         │  name (UQ)  │         │  quantity   │       │
//! │  └─────────────┘         │  price      │         │ PK(item,ord)│       │
//! │                          └─────────────┘         └─────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has a UUID v4 `id` generated before insert, so an order and
//! its lines can be linked while both are still pending.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Generates a new entity ID.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Lookup Entities
// =============================================================================

/// A menu category. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Creates a category with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            id: generate_id(),
            name: name.into(),
        }
    }
}

/// A job position held by employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Position {
    pub id: String,
    pub name: String,
}

impl Position {
    /// Creates a position with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Position {
            id: generate_id(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A member of staff taking orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub age: i64,
    /// Position this employee holds (FK).
    pub position_id: String,
}

// =============================================================================
// Item
// =============================================================================

/// Something on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    pub id: String,
    /// Globally unique display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: i64,
    pub category_id: String,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Type
// =============================================================================

/// How an order is served.
///
/// The textual form is the variant name; that is what the orders import
/// carries in `<Type>` and what the orders-by-employee export filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum OrderType {
    /// Eaten in the restaurant.
    ForHere,
    /// Taken away by the customer.
    ToGo,
}

impl OrderType {
    /// All variants, in declaration order.
    pub const ALL: [OrderType; 2] = [OrderType::ForHere, OrderType::ToGo];

    /// Returns the textual form of the variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::ForHere => "ForHere",
            OrderType::ToGo => "ToGo",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict, case-sensitive lookup. Anything else is an error, never a default.
impl FromStr for OrderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownOrderType(s.to_string()))
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order taken by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    pub customer: String,
    /// Local wall-clock time the order was placed.
    pub date_time: NaiveDateTime,
    pub order_type: OrderType,
    /// Employee who took the order (FK).
    pub employee_id: String,
}

/// Join row between an order and an item. Identity is `(item_id, order_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub item_id: String,
    pub order_id: String,
    pub quantity: i64,
}

// =============================================================================
// Loaded Graphs
// =============================================================================
// Read-side shapes assembled by the repositories for the exports. Totals are
// always computed from the loaded lines, never stored.

/// One line of a loaded order: the item and how many were ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: Item,
    pub quantity: i64,
}

impl OrderLine {
    /// Item price × quantity.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.item
            .price()
            .checked_mul(self.quantity)
            .ok_or(CoreError::AmountOverflow { what: "line total" })
    }
}

/// An order together with its lines, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub order: Order,
    pub lines: Vec<OrderLine>,
}

impl OrderDetails {
    /// Sum of `price × quantity` over the lines.
    pub fn total_price(&self) -> CoreResult<Money> {
        let lines = self
            .lines
            .iter()
            .map(OrderLine::line_total)
            .collect::<CoreResult<Vec<_>>>()?;
        Money::checked_sum(lines).ok_or(CoreError::AmountOverflow { what: "order total" })
    }
}

/// An employee with every order they took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub employee: Employee,
    pub orders: Vec<OrderDetails>,
}

/// An item with every order line that references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub item: Item,
    pub order_items: Vec<OrderItem>,
}

impl ItemDetails {
    /// Revenue earned by this item across all orders.
    pub fn total_made(&self) -> CoreResult<Money> {
        let price = self.item.price();
        self.order_items
            .iter()
            .try_fold(Money::zero(), |total, oi| {
                price
                    .checked_mul(oi.quantity)
                    .and_then(|line| total.checked_add(line))
            })
            .ok_or(CoreError::AmountOverflow { what: "item revenue" })
    }

    /// Units sold across all orders.
    pub fn times_sold(&self) -> CoreResult<i64> {
        self.order_items
            .iter()
            .try_fold(0i64, |sold, oi| sold.checked_add(oi.quantity))
            .ok_or(CoreError::AmountOverflow { what: "units sold" })
    }
}

/// A category with its items, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetails {
    pub category: Category,
    pub items: Vec<ItemDetails>,
}

impl CategoryDetails {
    /// The item with the highest revenue.
    ///
    /// Ties keep the item seen first. `None` when the category has no items.
    pub fn most_popular_item(&self) -> CoreResult<Option<&ItemDetails>> {
        let mut best: Option<(&ItemDetails, Money)> = None;
        for item in &self.items {
            let made = item.total_made()?;
            match best {
                Some((_, top)) if made <= top => {}
                _ => best = Some((item, made)),
            }
        }
        Ok(best.map(|(item, _)| item))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(name: &str, price_cents: i64) -> Item {
        Item {
            id: generate_id(),
            name: name.to_string(),
            price_cents,
            category_id: "cat".to_string(),
        }
    }

    fn sold(item: &Item, quantities: &[i64]) -> ItemDetails {
        ItemDetails {
            item: item.clone(),
            order_items: quantities
                .iter()
                .map(|&quantity| OrderItem {
                    item_id: item.id.clone(),
                    order_id: generate_id(),
                    quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_order_type_parse_is_strict() {
        assert_eq!("ForHere".parse::<OrderType>().unwrap(), OrderType::ForHere);
        assert_eq!("ToGo".parse::<OrderType>().unwrap(), OrderType::ToGo);

        assert!(matches!(
            "togo".parse::<OrderType>(),
            Err(CoreError::UnknownOrderType(t)) if t == "togo"
        ));
        assert!("Delivery".parse::<OrderType>().is_err());
        assert!(" ToGo".parse::<OrderType>().is_err());
        assert!("".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_order_type_display_matches_parse() {
        for kind in OrderType::ALL {
            assert_eq!(kind.to_string().parse::<OrderType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_order_total_price() {
        let burger = item("Burger", 1000);
        let fries = item("Fries", 250);
        let details = OrderDetails {
            order: Order {
                id: generate_id(),
                customer: "Garry".to_string(),
                date_time: NaiveDate::from_ymd_opt(2018, 8, 21)
                    .unwrap()
                    .and_hms_opt(12, 30, 0)
                    .unwrap(),
                order_type: OrderType::ToGo,
                employee_id: generate_id(),
            },
            lines: vec![
                OrderLine { item: burger, quantity: 2 },
                OrderLine { item: fries, quantity: 3 },
            ],
        };

        assert_eq!(details.total_price().unwrap().cents(), 2750);
    }

    #[test]
    fn test_item_details_totals() {
        let cola = item("Cola", 150);
        let details = sold(&cola, &[2, 5]);
        assert_eq!(details.total_made().unwrap().cents(), 1050);
        assert_eq!(details.times_sold().unwrap(), 7);

        let unsold = sold(&cola, &[]);
        assert_eq!(unsold.total_made().unwrap(), Money::zero());
        assert_eq!(unsold.times_sold().unwrap(), 0);
    }

    #[test]
    fn test_most_popular_item_by_revenue() {
        let cheap = item("Water", 100);
        let pricey = item("Shake", 400);
        let category = CategoryDetails {
            category: Category::new("Drinks"),
            items: vec![sold(&cheap, &[10]), sold(&pricey, &[3])],
        };

        // 10 waters make 10.00, 3 shakes make 12.00
        let top = category.most_popular_item().unwrap().unwrap();
        assert_eq!(top.item.name, "Shake");
    }

    #[test]
    fn test_most_popular_item_tie_keeps_first() {
        let first = item("First", 200);
        let second = item("Second", 100);
        let category = CategoryDetails {
            category: Category::new("Ties"),
            items: vec![sold(&first, &[1]), sold(&second, &[2])],
        };

        assert_eq!(
            category.most_popular_item().unwrap().unwrap().item.name,
            "First"
        );
    }

    #[test]
    fn test_most_popular_item_empty_category() {
        let category = CategoryDetails {
            category: Category::new("Empty"),
            items: vec![],
        };
        assert!(category.most_popular_item().unwrap().is_none());
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let golden = item("Golden Burger", i64::MAX);
        let line = OrderLine { item: golden, quantity: 2 };

        assert!(matches!(
            line.line_total(),
            Err(CoreError::AmountOverflow { what: "line total" })
        ));
    }

    #[test]
    fn test_order_total_overflow_is_an_error() {
        let half = item("Half", i64::MAX / 2 + 1);
        let details = OrderDetails {
            order: Order {
                id: generate_id(),
                customer: "Garry".to_string(),
                date_time: NaiveDate::from_ymd_opt(2018, 8, 21)
                    .unwrap()
                    .and_hms_opt(12, 30, 0)
                    .unwrap(),
                order_type: OrderType::ToGo,
                employee_id: generate_id(),
            },
            // Each line fits on its own, their sum does not
            lines: vec![
                OrderLine { item: half.clone(), quantity: 1 },
                OrderLine { item: half, quantity: 1 },
            ],
        };

        assert!(matches!(
            details.total_price(),
            Err(CoreError::AmountOverflow { what: "order total" })
        ));
    }

    #[test]
    fn test_item_totals_overflow_is_an_error() {
        let golden = item("Golden Burger", i64::MAX / 2);
        let details = sold(&golden, &[2, 1]);
        assert!(details.total_made().is_err());

        let cola = item("Cola", 150);
        let details = sold(&cola, &[i64::MAX, 1]);
        assert!(matches!(
            details.times_sold(),
            Err(CoreError::AmountOverflow { what: "units sold" })
        ));

        let category = CategoryDetails {
            category: Category::new("Grill"),
            items: vec![sold(&golden, &[3])],
        };
        assert!(category.most_popular_item().is_err());
    }
}

//! # Order Repository
//!
//! Orders and their lines (`order_items`).
//!
//! ## Import Transaction
//! ```text
//! BEGIN
//!   INSERT INTO orders       (one row per accepted order)
//!   INSERT INTO order_items  (one row per line, PK (item_id, order_id))
//! COMMIT                     (any failure rolls back the whole import)
//! ```

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use fastfood_core::{Item, Order, OrderDetails, OrderItem, OrderLine};

/// A joined `order_items` + `items` row.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    order_id: String,
    quantity: i64,
    item_id: String,
    item_name: String,
    price_cents: i64,
    category_id: String,
}

impl OrderLineRow {
    fn into_line(self) -> OrderLine {
        OrderLine {
            item: Item {
                id: self.item_id,
                name: self.item_name,
                price_cents: self.price_cents,
                category_id: self.category_id,
            },
            quantity: self.quantity,
        }
    }
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts orders and their lines in one transaction.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - same item twice in one order
    /// * `Err(DbError::ForeignKeyViolation)` - line pointing at a missing order or item
    pub async fn insert_batch(&self, orders: &[Order], lines: &[OrderItem]) -> DbResult<()> {
        if orders.is_empty() && lines.is_empty() {
            return Ok(());
        }

        debug!(orders = orders.len(), lines = lines.len(), "Inserting order batch");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        for order in orders {
            sqlx::query(
                r#"
                INSERT INTO orders (id, customer, date_time, order_type, employee_id)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&order.id)
            .bind(&order.customer)
            .bind(order.date_time)
            .bind(order.order_type)
            .bind(&order.employee_id)
            .execute(&mut *tx)
            .await?;
        }

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (item_id, order_id, quantity)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&line.item_id)
            .bind(&line.order_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await.map_err(DbError::transaction)?;

        info!(orders = orders.len(), lines = lines.len(), "Order batch committed");

        Ok(())
    }

    /// Counts stored orders.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts stored order lines.
    pub async fn count_lines(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists an employee's orders in insertion order, each with its lines
    /// in insertion order.
    pub async fn list_for_employee(&self, employee_id: &str) -> DbResult<Vec<OrderDetails>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer, date_time, order_type, employee_id
            FROM orders
            WHERE employee_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT
                oi.order_id,
                oi.quantity,
                i.id AS item_id,
                i.name AS item_name,
                i.price_cents,
                i.category_id
            FROM order_items oi
            INNER JOIN orders o ON o.id = oi.order_id
            INNER JOIN items i ON i.id = oi.item_id
            WHERE o.employee_id = ?1
            ORDER BY oi.rowid
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        let mut by_order: HashMap<String, Vec<OrderLine>> = HashMap::new();
        for row in rows {
            by_order
                .entry(row.order_id.clone())
                .or_default()
                .push(row.into_line());
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let lines = by_order.remove(&order.id).unwrap_or_default();
                OrderDetails { order, lines }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{Database, DbConfig, DbError};
    use fastfood_core::{
        generate_id, Category, Employee, Item, Order, OrderItem, OrderType, Position,
    };

    struct Fixture {
        db: Database,
        employee: Employee,
        burger: Item,
        fries: Item,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let cook = Position::new("Cook");
        db.positions().insert(&cook).await.unwrap();
        let employee = Employee {
            id: generate_id(),
            name: "Avery".to_string(),
            age: 30,
            position_id: cook.id.clone(),
        };
        db.employees()
            .insert_batch(std::slice::from_ref(&employee))
            .await
            .unwrap();

        let grill = Category::new("Grill");
        db.categories().insert(&grill).await.unwrap();
        let burger = Item {
            id: generate_id(),
            name: "Burger".to_string(),
            price_cents: 500,
            category_id: grill.id.clone(),
        };
        let fries = Item {
            id: generate_id(),
            name: "Fries".to_string(),
            price_cents: 250,
            category_id: grill.id.clone(),
        };
        db.items()
            .insert_batch(&[burger.clone(), fries.clone()])
            .await
            .unwrap();

        Fixture {
            db,
            employee,
            burger,
            fries,
        }
    }

    fn order(customer: &str, employee: &Employee, order_type: OrderType) -> Order {
        Order {
            id: generate_id(),
            customer: customer.to_string(),
            date_time: NaiveDate::from_ymd_opt(2017, 8, 21)
                .unwrap()
                .and_hms_opt(13, 22, 0)
                .unwrap(),
            order_type,
            employee_id: employee.id.clone(),
        }
    }

    fn line(item: &Item, order: &Order, quantity: i64) -> OrderItem {
        OrderItem {
            item_id: item.id.clone(),
            order_id: order.id.clone(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_insert_and_load_graph() {
        let f = fixture().await;
        let first = order("Garry", &f.employee, OrderType::ForHere);
        let second = order("Billy", &f.employee, OrderType::ToGo);

        f.db.orders()
            .insert_batch(
                &[first.clone(), second.clone()],
                &[
                    line(&f.fries, &first, 2),
                    line(&f.burger, &first, 1),
                    line(&f.burger, &second, 3),
                ],
            )
            .await
            .unwrap();

        assert_eq!(f.db.orders().count().await.unwrap(), 2);
        assert_eq!(f.db.orders().count_lines().await.unwrap(), 3);

        let details = f.db.orders().list_for_employee(&f.employee.id).await.unwrap();
        assert_eq!(details.len(), 2);

        assert_eq!(details[0].order, first);
        let names: Vec<_> = details[0].lines.iter().map(|l| l.item.name.as_str()).collect();
        assert_eq!(names, vec!["Fries", "Burger"]);
        assert_eq!(details[0].total_price().unwrap().cents(), 1000);

        assert_eq!(details[1].order.order_type, OrderType::ToGo);
        assert_eq!(details[1].total_price().unwrap().cents(), 1500);
    }

    #[tokio::test]
    async fn test_duplicate_line_rolls_back_everything() {
        let f = fixture().await;
        let first = order("Garry", &f.employee, OrderType::ForHere);

        let err = f
            .db
            .orders()
            .insert_batch(
                std::slice::from_ref(&first),
                &[line(&f.burger, &first, 1), line(&f.burger, &first, 2)],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert_eq!(f.db.orders().count().await.unwrap(), 0);
        assert_eq!(f.db.orders().count_lines().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_employee_without_orders() {
        let f = fixture().await;
        let details = f.db.orders().list_for_employee(&f.employee.id).await.unwrap();
        assert!(details.is_empty());
    }
}

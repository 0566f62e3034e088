//! # Seed Data Generator
//!
//! Populates the database with a small staff, a menu and a handful of
//! orders for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./fastfood_dev.db with 20 orders (default)
//! cargo run -p fastfood-db --bin seed
//!
//! # Generate more orders
//! cargo run -p fastfood-db --bin seed -- --orders 200
//!
//! # Specify database path
//! cargo run -p fastfood-db --bin seed -- --db ./data/fastfood.db
//! ```

use std::env;

use chrono::{Duration, NaiveDate};
use fastfood_core::{
    generate_id, Category, Employee, Item, Order, OrderItem, OrderType, Position,
};
use fastfood_db::{Database, DbConfig};

/// (position, [(employee name, age)])
const STAFF: &[(&str, &[(&str, i64)])] = &[
    ("Cashier", &[("Avery Quinn", 24), ("Jordan Blake", 31)]),
    ("Cook", &[("Morgan Hale", 42), ("Riley Stone", 19)]),
    ("Manager", &[("Casey Lane", 55)]),
];

/// (category, [(item name, price in cents)])
const MENU: &[(&str, &[(&str, i64)])] = &[
    (
        "Grill",
        &[("Cheeseburger", 550), ("Hot Dog", 325), ("Chicken Wrap", 475)],
    ),
    (
        "Beverages",
        &[("Cola", 150), ("Lemonade", 175), ("Milkshake", 400)],
    ),
    ("Desserts", &[("Apple Pie", 225), ("Sundae", 300)]),
];

const CUSTOMERS: &[&str] = &["Garry", "Billy", "Theo", "Sam", "Robin", "Alex"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut order_count: usize = 20;
    let mut db_path = String::from("./fastfood_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--orders" => {
                if i + 1 < args.len() {
                    order_count = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-d" | "--db" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("FastFood Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --orders <N>   Number of orders to generate (default: 20)");
                println!("  -d, --db <PATH>    Database file path (default: ./fastfood_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 FastFood Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!("Orders:   {}", order_count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    if !db.health_check().await {
        return Err(format!("database at {} did not answer a test query", db_path).into());
    }
    println!("✓ Connected to database");

    let (total, applied) = db.migration_status().await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.employees().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} employees", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut employees = Vec::new();
    for (position_name, staff) in STAFF {
        let position = Position::new(*position_name);
        db.positions().insert(&position).await?;

        for (name, age) in staff.iter() {
            employees.push(Employee {
                id: generate_id(),
                name: name.to_string(),
                age: *age,
                position_id: position.id.clone(),
            });
        }
    }
    db.employees().insert_batch(&employees).await?;
    println!("✓ {} employees", employees.len());

    let mut items = Vec::new();
    for (category_name, menu) in MENU {
        let category = Category::new(*category_name);
        db.categories().insert(&category).await?;

        for (name, price_cents) in menu.iter() {
            items.push(Item {
                id: generate_id(),
                name: name.to_string(),
                price_cents: *price_cents,
                category_id: category.id.clone(),
            });
        }
    }
    db.items().insert_batch(&items).await?;
    println!("✓ {} items", items.len());

    let (orders, lines) = generate_orders(order_count, &employees, &items);
    db.orders().insert_batch(&orders, &lines).await?;
    println!("✓ {} orders with {} lines", orders.len(), lines.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds deterministic orders: employees, customers and items are picked
/// round-robin, one order every 17 minutes from a fixed start.
fn generate_orders(
    count: usize,
    employees: &[Employee],
    items: &[Item],
) -> (Vec<Order>, Vec<OrderItem>) {
    let mut orders = Vec::with_capacity(count);
    let mut lines = Vec::new();

    let Some(start) = NaiveDate::from_ymd_opt(2017, 8, 21).and_then(|d| d.and_hms_opt(11, 0, 0))
    else {
        return (orders, lines);
    };

    if employees.is_empty() || items.is_empty() {
        return (orders, lines);
    }

    for seed in 0..count {
        let order = Order {
            id: generate_id(),
            customer: CUSTOMERS[seed % CUSTOMERS.len()].to_string(),
            date_time: start + Duration::minutes(17 * seed as i64),
            order_type: OrderType::ALL[seed % OrderType::ALL.len()],
            employee_id: employees[seed % employees.len()].id.clone(),
        };

        // 1-3 distinct items per order
        let line_count = 1 + seed % 3.min(items.len());
        for offset in 0..line_count {
            let item = &items[(seed * 7 + offset) % items.len()];
            lines.push(OrderItem {
                item_id: item.id.clone(),
                order_id: order.id.clone(),
                quantity: 1 + ((seed + offset) % 4) as i64,
            });
        }

        orders.push(order);
    }

    (orders, lines)
}

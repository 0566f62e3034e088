//! # Item Repository
//!
//! Menu items: unique-name lookups used by both the items and the orders
//! import, batch insert, and the per-item sales used by category statistics.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use fastfood_core::{Item, ItemDetails, OrderItem};

/// Repository for item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Gets an item by its (unique) name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price_cents, category_id
            FROM items
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Checks whether an item with this name is already stored.
    pub async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE name = ?1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Inserts a batch of items in a single transaction.
    ///
    /// Either every item is stored or none is.
    pub async fn insert_batch(&self, items: &[Item]) -> DbResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        debug!(count = items.len(), "Inserting item batch");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO items (id, name, price_cents, category_id)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(item.price_cents)
            .bind(&item.category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await.map_err(DbError::transaction)?;

        Ok(())
    }

    /// Counts stored items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists a category's items (insertion order), each with the order
    /// lines that reference it (insertion order).
    pub async fn list_details_for_category(&self, category_id: &str) -> DbResult<Vec<ItemDetails>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price_cents, category_id
            FROM items
            WHERE category_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        let lines = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT oi.item_id, oi.order_id, oi.quantity
            FROM order_items oi
            INNER JOIN items i ON i.id = oi.item_id
            WHERE i.category_id = ?1
            ORDER BY oi.rowid
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        let mut by_item: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for line in lines {
            by_item.entry(line.item_id.clone()).or_default().push(line);
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let order_items = by_item.remove(&item.id).unwrap_or_default();
                ItemDetails { item, order_items }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use fastfood_core::{generate_id, Category, Item};

    fn item(name: &str, price_cents: i64, category: &Category) -> Item {
        Item {
            id: generate_id(),
            name: name.to_string(),
            price_cents,
            category_id: category.id.clone(),
        }
    }

    async fn db_with_category(name: &str) -> (Database, Category) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let category = Category::new(name);
        db.categories().insert(&category).await.unwrap();
        (db, category)
    }

    #[tokio::test]
    async fn test_insert_batch_and_lookup() {
        let (db, grill) = db_with_category("Grill").await;
        let repo = db.items();

        repo.insert_batch(&[item("Burger", 500, &grill), item("Hot Dog", 300, &grill)])
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.exists_by_name("Burger").await.unwrap());
        assert!(!repo.exists_by_name("burger").await.unwrap());

        let burger = repo.get_by_name("Burger").await.unwrap().unwrap();
        assert_eq!(burger.price().cents(), 500);
        assert_eq!(burger.category_id, grill.id);
    }

    #[tokio::test]
    async fn test_insert_batch_is_all_or_nothing() {
        let (db, grill) = db_with_category("Grill").await;
        let repo = db.items();

        let err = repo
            .insert_batch(&[item("Burger", 500, &grill), item("Burger", 600, &grill)])
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_requires_existing_category() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let orphan = Category::new("Nowhere");

        let err = db
            .items()
            .insert_batch(&[item("Burger", 500, &orphan)])
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.items().insert_batch(&[]).await.unwrap();
        assert_eq!(db.items().count().await.unwrap(), 0);
    }
}

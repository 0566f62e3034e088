//! # Category Repository
//!
//! Categories are lookup rows created on first mention by an items import,
//! and the root of the category statistics graph.
//!
//! ## Statistics Graph
//! ```text
//! categories (WHERE name IN (...), rowid order)
//!     └── items (rowid order)
//!           └── order_items (rowid order)
//! ```

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::item::ItemRepository;
use fastfood_core::{Category, CategoryDetails};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Gets a category by exact (case-sensitive) name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Inserts a category and commits it immediately.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - name already exists
    pub async fn insert(&self, category: &Category) -> DbResult<()> {
        debug!(name = %category.name, "Inserting category");

        sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
            .bind(&category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts stored categories.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Gets the categories whose name is in `names`, in insertion order.
    ///
    /// Unknown names are ignored.
    pub async fn list_by_names(&self, names: &[&str]) -> DbResult<Vec<Category>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name FROM categories WHERE name IN (");
        let mut separated = query.separated(", ");
        for name in names {
            separated.push_bind(*name);
        }
        separated.push_unseparated(") ORDER BY rowid");

        let categories = query
            .build_query_as::<Category>()
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    /// Loads the named categories with their items and every order line
    /// referencing those items.
    pub async fn load_details(&self, names: &[&str]) -> DbResult<Vec<CategoryDetails>> {
        let categories = self.list_by_names(names).await?;
        let items = ItemRepository::new(self.pool.clone());

        let mut details = Vec::with_capacity(categories.len());
        for category in categories {
            let category_items = items.list_details_for_category(&category.id).await?;
            debug!(
                category = %category.name,
                items = category_items.len(),
                "Loaded category graph"
            );
            details.push(CategoryDetails {
                category,
                items: category_items,
            });
        }

        Ok(details)
    }
}

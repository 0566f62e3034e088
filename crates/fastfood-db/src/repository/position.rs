//! # Position Repository
//!
//! Positions are lookup rows created the first time an employee import
//! mentions them. Inserts are committed one by one so the next record of the
//! same import already sees the new row.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fastfood_core::Position;

/// Repository for position database operations.
#[derive(Debug, Clone)]
pub struct PositionRepository {
    pool: SqlitePool,
}

impl PositionRepository {
    /// Creates a new PositionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PositionRepository { pool }
    }

    /// Gets a position by exact (case-sensitive) name.
    ///
    /// Position names are not unique in the schema; the oldest match wins.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Position>> {
        let position = sqlx::query_as::<_, Position>(
            r#"
            SELECT id, name
            FROM positions
            WHERE name = ?1
            ORDER BY rowid
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(position)
    }

    /// Inserts a position and commits it immediately.
    pub async fn insert(&self, position: &Position) -> DbResult<()> {
        debug!(name = %position.name, "Inserting position");

        sqlx::query("INSERT INTO positions (id, name) VALUES (?1, ?2)")
            .bind(&position.id)
            .bind(&position.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts stored positions.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM positions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

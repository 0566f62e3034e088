//! # Employee Repository
//!
//! Employees are resolved by name when importing orders and when exporting
//! an employee's orders. Names are not unique; the first stored match wins.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::order::OrderRepository;
use fastfood_core::{Employee, EmployeeDetails};

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Gets the first employee (by insertion) with exactly this name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, age, position_id
            FROM employees
            WHERE name = ?1
            ORDER BY rowid
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Inserts a batch of employees in a single transaction.
    pub async fn insert_batch(&self, employees: &[Employee]) -> DbResult<()> {
        if employees.is_empty() {
            return Ok(());
        }

        debug!(count = employees.len(), "Inserting employee batch");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        for employee in employees {
            sqlx::query(
                r#"
                INSERT INTO employees (id, name, age, position_id)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&employee.id)
            .bind(&employee.name)
            .bind(employee.age)
            .bind(&employee.position_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await.map_err(DbError::transaction)?;

        Ok(())
    }

    /// Counts stored employees.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Loads an employee with every order they took, each with its lines
    /// and the items of those lines.
    pub async fn get_details_by_name(&self, name: &str) -> DbResult<Option<EmployeeDetails>> {
        let Some(employee) = self.get_by_name(name).await? else {
            return Ok(None);
        };

        let orders = OrderRepository::new(self.pool.clone())
            .list_for_employee(&employee.id)
            .await?;

        debug!(employee = %employee.name, orders = orders.len(), "Loaded employee graph");

        Ok(Some(EmployeeDetails { employee, orders }))
    }
}

//! Department repository.
//!
//! Membership lives in `department_members` keyed by
//! `(department_id, username)`. Add and remove are single statements, so the
//! set cannot end up with a duplicate even when requests race.

use crate::{DbError, Result as DbErrorResult};

use bc_core::Department;

use std::collections::HashMap;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the department and its initial members in one transaction.
    /// A taken name surfaces as [`DbError::UniqueViolation`].
    pub async fn create(&self, department: &Department) -> DbErrorResult<()> {
        let id = department.id.to_string();
        let created_at = department.created_at.timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO departments (id, name, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&department.name)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;

        for username in &department.employees {
            sqlx::query(
                r#"
                    INSERT INTO department_members (department_id, username, added_at)
                    VALUES (?, ?, ?)
                    ON CONFLICT(department_id, username) DO NOTHING
                "#,
            )
            .bind(&id)
            .bind(username)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_name(&self, name: &str) -> DbErrorResult<Option<Department>> {
        let row = sqlx::query("SELECT id, name, created_at FROM departments WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut department = department_from_row(&row)?;
        department.employees = self.members(department.id).await?;

        Ok(Some(department))
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Department>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM departments ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        let member_rows = sqlx::query(
            "SELECT department_id, username FROM department_members ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut members: HashMap<String, Vec<String>> = HashMap::new();
        for row in &member_rows {
            let department_id: String = row.try_get("department_id")?;
            let username: String = row.try_get("username")?;
            members.entry(department_id).or_default().push(username);
        }

        rows.iter()
            .map(|row| -> DbErrorResult<Department> {
                let mut department = department_from_row(row)?;
                department.employees = members
                    .remove(&department.id.to_string())
                    .unwrap_or_default();
                Ok(department)
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Member usernames in the order they were added
    pub async fn members(&self, department_id: Uuid) -> DbErrorResult<Vec<String>> {
        let usernames: Vec<String> = sqlx::query_scalar(
            "SELECT username FROM department_members WHERE department_id = ? ORDER BY rowid",
        )
        .bind(department_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(usernames)
    }

    /// Add `username` unless it is already a member.
    /// Returns `false` when the username was already present.
    pub async fn add_member(&self, department_id: Uuid, username: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT INTO department_members (department_id, username, added_at)
                VALUES (?, ?, ?)
                ON CONFLICT(department_id, username) DO NOTHING
            "#,
        )
        .bind(department_id.to_string())
        .bind(username)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove `username` from the set.
    /// Returns `false` when it was not a member.
    pub async fn remove_member(&self, department_id: Uuid, username: &str) -> DbErrorResult<bool> {
        let result =
            sqlx::query("DELETE FROM department_members WHERE department_id = ? AND username = ?")
                .bind(department_id.to_string())
                .bind(username)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn department_from_row(row: &SqliteRow) -> DbErrorResult<Department> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Department {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in departments.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        employees: Vec::new(),
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in departments.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}

//! Department read and insert operations.

use sqlx::PgPool;

use crate::{models::DepartmentRow, DbError};

/// Return every department ordered by id.
///
/// Serves both the departments report and the department selector shown
/// while adding a role.
pub async fn list_departments(pool: &PgPool) -> Result<Vec<DepartmentRow>, DbError> {
    let rows = sqlx::query_as::<_, DepartmentRow>(
        "SELECT id, name FROM department ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new department and return the stored row.
pub async fn insert_department(pool: &PgPool, name: &str) -> Result<DepartmentRow, DbError> {
    let row = sqlx::query_as::<_, DepartmentRow>(
        "INSERT INTO department (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

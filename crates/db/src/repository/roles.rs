//! Role read and insert operations.

use sqlx::PgPool;

use crate::{
    models::{RoleReportRow, RoleRow},
    DbError,
};

/// Return every role ordered by id, for the role selector.
pub async fn list_roles(pool: &PgPool) -> Result<Vec<RoleRow>, DbError> {
    let rows = sqlx::query_as::<_, RoleRow>(
        "SELECT id, title, salary, department_id FROM role ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every role joined to its department name, for the roles report.
pub async fn list_role_report(pool: &PgPool) -> Result<Vec<RoleReportRow>, DbError> {
    let rows = sqlx::query_as::<_, RoleReportRow>(
        "SELECT role.id, role.title, department.name AS department, role.salary \
         FROM role \
         INNER JOIN department ON role.department_id = department.id \
         ORDER BY role.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new role and return the stored row.
///
/// `department_id` must reference an existing department; the foreign key
/// rejects anything else.
pub async fn insert_role(
    pool: &PgPool,
    title: &str,
    salary: f64,
    department_id: i32,
) -> Result<RoleRow, DbError> {
    let row = sqlx::query_as::<_, RoleRow>(
        "INSERT INTO role (title, salary, department_id) VALUES ($1, $2, $3) \
         RETURNING id, title, salary, department_id",
    )
    .bind(title)
    .bind(salary)
    .bind(department_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

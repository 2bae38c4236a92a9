//! Employee read, insert, and role-update operations.

use sqlx::PgPool;

use crate::{
    models::{EmployeeReportRow, EmployeeRow},
    DbError,
};

/// Return every employee ordered by id, for the employee selectors.
pub async fn list_employees(pool: &PgPool) -> Result<Vec<EmployeeRow>, DbError> {
    let rows = sqlx::query_as::<_, EmployeeRow>(
        "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every employee joined to role, department, and manager, for the
/// employees report.
///
/// The manager column is the manager's full name, NULL for employees without
/// one (the `||` concatenation propagates the NULL from the left join).
pub async fn list_employee_report(pool: &PgPool) -> Result<Vec<EmployeeReportRow>, DbError> {
    let rows = sqlx::query_as::<_, EmployeeReportRow>(
        "SELECT e.id, e.first_name, e.last_name, role.title, \
                department.name AS department, role.salary, \
                manager.first_name || ' ' || manager.last_name AS manager \
         FROM employee e \
         INNER JOIN role ON e.role_id = role.id \
         INNER JOIN department ON role.department_id = department.id \
         LEFT JOIN employee manager ON e.manager_id = manager.id \
         ORDER BY e.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new employee and return the stored row.
///
/// `manager_id` is nullable; `None` records an employee with no manager.
pub async fn insert_employee(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    role_id: i32,
    manager_id: Option<i32>,
) -> Result<EmployeeRow, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(
        "INSERT INTO employee (first_name, last_name, role_id, manager_id) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id, first_name, last_name, role_id, manager_id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(role_id)
    .bind(manager_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Reassign an employee to a new role.
///
/// Returns `DbError::NotFound` if no row was updated.
pub async fn update_employee_role(
    pool: &PgPool,
    employee_id: i32,
    role_id: i32,
) -> Result<(), DbError> {
    let result = sqlx::query("UPDATE employee SET role_id = $1 WHERE id = $2")
        .bind(role_id)
        .bind(employee_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}

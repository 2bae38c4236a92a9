//! Row structs that map 1-to-1 onto database tables, plus the joined row
//! shapes produced by the report queries.
//!
//! These are *persistence* models — they carry no prompting or rendering
//! behaviour.  Choice shaping and table layout live in the `tracker` crate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// department
// ---------------------------------------------------------------------------

/// A persisted department row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

// ---------------------------------------------------------------------------
// role
// ---------------------------------------------------------------------------

/// A persisted role row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRow {
    pub id: i32,
    pub title: String,
    pub salary: f64,
    pub department_id: i32,
}

// ---------------------------------------------------------------------------
// employee
// ---------------------------------------------------------------------------

/// A persisted employee row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    /// Reporting line; `None` for employees without a manager.
    pub manager_id: Option<i32>,
}

// ---------------------------------------------------------------------------
// report rows (join results, not tables)
// ---------------------------------------------------------------------------

/// A role joined to its department, as shown by the roles report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleReportRow {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub salary: f64,
}

/// An employee joined to role, department, and manager, as shown by the
/// employees report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeReportRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    /// Manager's full name; `None` for employees without a manager.
    pub manager: Option<String>,
}

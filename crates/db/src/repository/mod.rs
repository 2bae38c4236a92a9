//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No prompting, no rendering — pure SQL.

pub mod departments;
pub mod employees;
pub mod roles;

//! `db` crate — pure persistence layer.
//!
//! Provides the single-connection handle, typed row structs, and repository
//! functions for every table in the staff-tracker schema.  No prompting or
//! rendering logic lives here.

pub mod error;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use pool::DbPool;

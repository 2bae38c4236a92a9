//! Postgres connection handling.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Type alias for the connection handle threaded through the session.
pub type DbPool = PgPool;

/// Open a handle to the server at `database_url`.
///
/// The interactive session issues exactly one statement at a time, so the
/// pool is capped at a single connection for its whole lifetime.  The caller
/// owns the handle and must release it with [`sqlx::Pool::close`] once the
/// session ends.
pub async fn connect(database_url: &str) -> Result<DbPool, DbError> {
    info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Run embedded migrations located in `./migrations` (relative to the
/// workspace root at build time).
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("Running database migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

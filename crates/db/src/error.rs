//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Whether the connection itself is unusable after this error.
    ///
    /// Statement-level failures (constraint violations, bad values, missing
    /// rows) leave the session able to continue; transport and pool failures
    /// do not.
    pub fn is_fatal(&self) -> bool {
        match self {
            DbError::Sqlx(err) => matches!(
                err,
                sqlx::Error::Configuration(_)
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::Protocol(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::WorkerCrashed
            ),
            DbError::NotFound => false,
            DbError::Migration(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_pool_is_fatal() {
        let err = DbError::from(sqlx::Error::PoolClosed);
        assert!(err.is_fatal());
    }

    #[test]
    fn io_failure_is_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(err.is_fatal());
    }

    #[test]
    fn missing_row_is_not_fatal() {
        assert!(!DbError::NotFound.is_fatal());
    }

    #[test]
    fn row_not_found_from_sqlx_is_not_fatal() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_fatal());
    }
}

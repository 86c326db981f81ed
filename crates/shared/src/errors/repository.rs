use sqlx::Error as SqlxError;
use thiserror::Error;

/// SQLSTATE codes Postgres reports when a statement lost a race with a
/// concurrent transaction (`serialization_failure`, `deadlock_detected`).
const CONCURRENCY_SQLSTATES: [&str; 2] = ["40001", "40P01"];

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err)
                if db_err
                    .code()
                    .is_some_and(|code| CONCURRENCY_SQLSTATES.contains(&&*code)) =>
            {
                RepositoryError::Conflict(db_err.message().to_string())
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

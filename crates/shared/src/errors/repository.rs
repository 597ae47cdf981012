use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) => {
                // 23505 is the Postgres unique_violation code
                if db_err.code().as_deref() == Some("23505") {
                    RepositoryError::AlreadyExists(
                        db_err
                            .constraint()
                            .map(|c| format!("Unique constraint violated: {c}"))
                            .unwrap_or_else(|| "Unique constraint violated".to_string()),
                    )
                } else {
                    RepositoryError::Sqlx(err)
                }
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}

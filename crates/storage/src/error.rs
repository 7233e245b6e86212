use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    fn has_code(&self, code: &str) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(code)
        )
    }

    fn is_check_violation(&self) -> bool {
        self.has_code("23514")
    }

    /// A numeric value did not fit its column (`numeric_value_out_of_range`)
    fn is_out_of_range(&self) -> bool {
        self.has_code("22003")
    }

    /// The store refused a value the caller sent
    pub fn is_rejected_value(&self) -> bool {
        self.is_check_violation() || self.is_out_of_range()
    }
}

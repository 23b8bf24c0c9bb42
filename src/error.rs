use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// The store rejected a read or write. Any open transaction is rolled back.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Migration failure: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Soldier not found: {0}")]
    SoldierNotFound(i64),

    #[error("Unavailability record not found: {0}")]
    UnavailabilityNotFound(i64),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

use thiserror::Error;

use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("An account with email '{0}' already exists")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("Donation amount must be a positive number")]
    InvalidAmount,

    #[error("Project {0} not found")]
    ProjectNotFound(Uuid),

    #[error("A donation with this transaction reference was already recorded")]
    DuplicateReference,

    #[error("Payment error: {0}")]
    Payment(#[from] crate::services::PaymentError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Budget must be a positive number")]
    InvalidBudget,

    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum StoryError {
    #[error("Title and story text are required")]
    MissingFields,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

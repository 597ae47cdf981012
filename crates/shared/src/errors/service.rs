use crate::errors::{client::ClientError, repository::RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    NotFound(String),

    #[error("Customer does not exist")]
    CustomerNotFound,

    #[error("Account does not exist")]
    AccountNotFound,

    #[error("{0}")]
    DuplicateResource(String),

    #[error("Account already has 2 cards")]
    CardLimitExceeded,

    #[error("Account already has a card of this type")]
    DuplicateCardType,

    #[error("Duplicate card alias for this account")]
    DuplicateAlias,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Custom(String),
}

// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid time window: {0}")]
    InvalidTimeWindow(String),
    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

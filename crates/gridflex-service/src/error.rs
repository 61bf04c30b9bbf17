use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RecurError(#[from] gridflex_recur::error::RecurError),

    #[error(transparent)]
    CoreError(#[from] gridflex_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

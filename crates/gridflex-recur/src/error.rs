use thiserror::Error;

/// Slot addressing and recurrence errors
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    CoreError(#[from] gridflex_core::error::CoreError),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;

use salvo::Response;
use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

use gridflex_core::error::CoreError;
use gridflex_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    RecurError(#[from] gridflex_recur::error::RecurError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => match err {
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::ValidationError(_) | ServiceError::RecurError(_) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::CoreError(core) => core_status(core),
            },
            Self::RecurError(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(core) => core_status(core),
        }
    }

    /// ## Summary
    /// Writes this error to `res` as `{"error": "..."}` with its status.
    pub fn render(&self, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }
        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.to_string(),
        }));
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::ValidationError(_) | CoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CoreError::ConfigError(_) | CoreError::InvariantViolation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

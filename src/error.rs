use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SplitError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

impl From<figment::Error> for SplitError {
    fn from(e: figment::Error) -> Self {
        SplitError::ConfigError(Box::new(e))
    }
}

impl IntoResponse for SplitError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            SplitError::InvalidAmount(raw) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "INVALID_AMOUNT".to_string(),
                    message: format!("Amount {raw:?} is not a number."),
                };
                (status, body)
            }
            SplitError::DatabaseError(_)
            | SplitError::ConfigError(_)
            | SplitError::TemplateError(_)
            | SplitError::IoError(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

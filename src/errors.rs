use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::extraction::{DispatchError, ExtractionError};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("No text extracted from file")]
    EmptyExtraction,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Completion API error: {0}")]
    CompletionError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Client input problems are the caller's to fix; everything else is ours.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyExtraction => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CompletionError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_client_error() {
            log::debug!("Rejected request: {}", self);
        } else {
            log::error!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}
impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::UnsupportedFormat(tag) => AppError::UnsupportedFormat(tag),
            DispatchError::Extraction(e) => AppError::Extraction(e),
            DispatchError::Empty { .. } => AppError::EmptyExtraction,
        }
    }
}
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::ValidationError(format!("fileContent is not valid base64: {}", err))
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::CompletionError(err.to_string())
    }
}
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

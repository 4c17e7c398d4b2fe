use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    /// A document-store round trip failed. The collection routes surface this
    /// as 418, the by-id routes as 400; the raw driver error is returned to
    /// the client in the body.
    #[error("Store error: {source}")]
    Store {
        status: StatusCode,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Store failure on `GET /people` or `POST /people`.
    pub fn store_teapot(source: mongodb::error::Error) -> Self {
        AppError::Store {
            status: StatusCode::IM_A_TEAPOT,
            source,
        }
    }

    /// Store failure on `PUT /people/:id` or `DELETE /people/:id`.
    pub fn store_bad_request(source: mongodb::error::Error) -> Self {
        AppError::Store {
            status: StatusCode::BAD_REQUEST,
            source,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON body of every error response. `details` carries the raw driver error
/// text, whose shape is implementation-specific rather than a stable contract.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::Store { status, source } => {
                (status, "Store error".to_string(), Some(source.to_string()))
            }
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(err.to_string()),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}

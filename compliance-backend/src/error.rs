// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Failed to parse UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Validation failed")]
    ValidationFailure(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                tracing::error!("Database error: {:?}", db_err); // サーバーログには詳細を出す

                // RecordNotFound のみ 404、それ以外はストレージ障害として 500
                let status = match db_err {
                    DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                let message = match &db_err {
                    DbErr::RecordNotFound(_) => "The requested resource was not found".to_string(),
                    _ => "A database error occurred".to_string(),
                };

                (
                    status,
                    ErrorResponse {
                        success: false,
                        message,
                        errors: None,
                        error_type: "database_error".to_string(),
                    },
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    success: false,
                    message,
                    errors: None,
                    error_type: "not_found".to_string(),
                },
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message,
                    errors: None,
                    error_type: "validation_error".to_string(),
                },
            ),
            AppError::ValidationErrors(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message: "Validation failed".to_string(),
                    errors: Some(errors),
                    error_type: "validation_errors".to_string(),
                },
            ),
            AppError::UuidError(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message: format!("Invalid UUID: {}", err),
                    errors: None,
                    error_type: "invalid_uuid".to_string(),
                },
            ),
            AppError::ValidationFailure(errors) => {
                let messages: Vec<String> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                            format!("{}: {}", field, message)
                        })
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        success: false,
                        message: "Validation failed".to_string(),
                        errors: Some(messages),
                        error_type: "validation_errors".to_string(),
                    },
                )
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message,
                    errors: None,
                    error_type: "bad_request".to_string(),
                },
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    success: false,
                    message,
                    errors: None,
                    error_type: "unauthorized".to_string(),
                },
            ),
            AppError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: false,
                        message: "An internal server error occurred".to_string(),
                        errors: None,
                        error_type: "internal_server_error".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
///
/// message は人間向け、error_type は機械判別用の識別子。
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    pub error_type: String,
}

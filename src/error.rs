/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 認証エラー / 認可エラー / service エラーを統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::middleware::auth::guard::AuthorizationDenied;
use crate::services::auth::VerificationFailure;
use crate::services::directory::ServiceError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// 401 body. Clients of the original API parse exactly this single key.
#[derive(Debug, Serialize)]
pub struct UnauthenticatedBody {
    pub error_message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("{0}")]
    Unauthenticated(String),
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("{0}")]
    Unprocessable(String),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthenticated(message) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(UnauthenticatedBody {
                        error_message: message,
                    }),
                )
                    .into_response();
            }
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN", "forbidden".into()),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{resource} not found."),
            ),
            AppError::Unprocessable(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE", message)
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<VerificationFailure> for AppError {
    fn from(e: VerificationFailure) -> Self {
        AppError::Unauthenticated(e.to_string())
    }
}

impl From<AuthorizationDenied> for AppError {
    fn from(_: AuthorizationDenied) -> Self {
        AppError::Forbidden
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(resource) => AppError::not_found(resource),
            ServiceError::Conflict(message) => AppError::Unprocessable(message),
            ServiceError::Backend(message) => {
                tracing::error!(error = %message, "service backend failure");
                AppError::Internal
            }
        }
    }
}

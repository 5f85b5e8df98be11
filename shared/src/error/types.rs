//! Error types and API response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, offending ids)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a malformed id error
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidId).with_detail("id", raw.into())
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an admin required error
    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Create an invalid token error
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    /// Create a token expired error
    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut err = AppError::validation(ErrorCode::ValidationFailed.message());
        for (field, field_errors) in errors.field_errors() {
            let reasons: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| Value::from(m.to_string()))
                        .unwrap_or_else(|| Value::from(e.code.to_string()))
                })
                .collect();
            err = err.with_detail(field.to_string(), reasons);
        }
        err
    }
}

/// Unified error response structure
///
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// Create an error response from an AppError
    ///
    /// System 类错误只返回错误码的通用消息，内部细节留在日志里。
    pub fn error(err: &AppError) -> Self {
        if err.code.category() == ErrorCategory::System {
            return Self {
                code: Some(err.code.code()),
                message: err.code.message().to_string(),
                data: None,
                details: None,
            };
        }
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

/// 请求体无法解析 (非 JSON、缺少 content-type、字段类型不符) 一律按校验失败处理
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        if self.code.category() == ErrorCategory::System {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ItemNotFound);
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(err.message, "Item not found.");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::ItemNotFound).with_detail("itemId", "item:ghost");
        let details = err.details.unwrap();
        assert_eq!(details.get("itemId").unwrap(), "item:ghost");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::invalid_id("bad id!").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::admin_required().http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_authenticated().http_status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OrderNotFound, "Order not found.");
        assert_eq!(format!("{}", err), "Order not found.");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::new(ErrorCode::FavouriteExists).with_detail("itemId", "item:1");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(5002));
        assert_eq!(response.message, "Item is already in your favourites.");
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_system_error_message_is_generic() {
        let err = AppError::database("connection refused at 10.0.0.3");
        let response = ApiResponse::<()>::error(&err);
        assert_eq!(response.code, Some(9002));
        assert_eq!(response.message, "Database error");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_api_response_serialize() {
        let err = AppError::new(ErrorCode::InvalidStatus);
        let json = serde_json::to_string(&ApiResponse::<()>::error(&err)).unwrap();
        assert!(json.contains("\"code\":4002"));
        assert!(json.contains("\"message\":\"Invalid status.\""));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_json_rejection_is_validation_error() {
        use axum::extract::rejection::{JsonRejection, MissingJsonContentType};

        let err: AppError = JsonRejection::from(MissingJsonContentType::default()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Invalid request body"));
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_from_validation_errors() {
        let probe = Probe {
            email: "not-an-email".into(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.unwrap().contains_key("email"));
    }
}

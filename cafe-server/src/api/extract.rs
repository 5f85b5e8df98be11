//! 请求体提取器
//!
//! [`AppJson`] 与 `axum::Json` 行为一致，但解析失败时返回
//! `AppError` (ValidationFailed, 400) 而不是 axum 默认的纯文本 422。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::error::AppError;

/// JSON 请求体，拒绝时走统一错误格式
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            AppError::from(rejection)
        })?;
        Ok(Self(value))
    }
}

//! `CurrentUser` 提取器
//!
//! 处理函数参数里声明 `CurrentUser` 即要求请求携带有效的 Bearer 令牌。
//! 同一请求内多次提取只校验一次 (结果缓存在 request extensions)。

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::{AppError, AppResult};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// 从 Authorization 头取出令牌
///
/// - 没有头: `NotAuthenticated`
/// - 不是 `Bearer <token>` 形式: `TokenInvalid`
fn bearer_token(parts: &Parts) -> AppResult<&str> {
    let Some(header) = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        security_log!(WARN, "auth_missing", uri = %parts.uri);
        return Err(AppError::not_authenticated());
    };

    JwtService::extract_from_header(header).ok_or_else(|| {
        security_log!(WARN, "auth_malformed", uri = %parts.uri);
        AppError::invalid_token("Invalid token")
    })
}

fn rejection(err: JwtError) -> AppError {
    match err {
        JwtError::ExpiredToken => AppError::token_expired(),
        _ => AppError::invalid_token("Invalid token"),
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = bearer_token(parts)?;
        let claims = state.get_jwt_service().validate_token(token).map_err(|e| {
            security_log!(WARN, "auth_failed", error = %e, uri = %parts.uri);
            rejection(e)
        })?;

        let user = CurrentUser::from(claims);
        tracing::debug!(user_id = %user.id, admin = user.admin, "Caller authenticated");
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use shared::error::ErrorCode;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/users/me");
        if let Some(value) = header {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn missing_header_is_not_authenticated() {
        let err = bearer_token(&parts_with(None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn non_bearer_header_is_invalid() {
        let err = bearer_token(&parts_with(Some("Basic abc"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn bearer_token_is_extracted() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn expired_tokens_keep_their_own_code() {
        assert_eq!(rejection(JwtError::ExpiredToken).code, ErrorCode::TokenExpired);
    }
}

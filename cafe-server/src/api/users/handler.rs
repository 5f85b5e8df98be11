//! User API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use shared::models::{
    AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserProfile, UserUpdate,
};

use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /users/signup - 注册并返回令牌
pub async fn signup(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let response = state.identity().signup(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /users/login - 登录
pub async fn login(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    Ok(Json(state.identity().login(payload).await?))
}

/// PATCH /users/update - 修改当前用户资料，返回新令牌
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    AppJson(payload): AppJson<UserUpdate>,
) -> AppResult<Json<AuthResponse>> {
    let id = user.record_id()?;
    Ok(Json(state.identity().update(&id, payload).await?))
}

/// DELETE /users/delete - 注销当前用户
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<MessageResponse>> {
    let id = user.record_id()?;
    state.identity().delete(&id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully.")))
}

/// GET /users/me - 当前用户资料
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<UserProfile>> {
    let id = user.record_id()?;
    Ok(Json(state.identity().profile(&id).await?))
}

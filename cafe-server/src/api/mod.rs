//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 欢迎页与健康检查
//! - [`users`] - 注册 / 登录 / 资料
//! - [`menu`] - 分类与菜品
//! - [`orders`] - 下单与订单状态
//! - [`favourites`] - 收藏
//! - [`upload`] - 图片上传与静态访问
//!
//! 请求体统一通过 [`AppJson`](extract::AppJson) 提取，解析失败返回 400 结构化错误。
//!
//! 认证通过 [`CurrentUser`](crate::auth::CurrentUser) 提取器在处理函数上声明，
//! 管理员能力在处理函数内显式检查 (`require_admin`)。

pub mod extract;
pub mod favourites;
pub mod health;
pub mod menu;
pub mod middleware;
pub mod orders;
pub mod upload;
pub mod users;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(users::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(favourites::router())
        .merge(upload::router(state.config.max_upload_bytes))
        .fallback(not_found)
}

/// Build a fully configured application with all middleware and state
///
/// HTTP 服务与集成测试共用
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state)
}

async fn not_found() -> (StatusCode, axum::Json<shared::models::MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        axum::Json(shared::models::MessageResponse::new("404 Page not found")),
    )
}

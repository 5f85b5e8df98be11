//! 请求日志中间件
//!
//! 记录每个 HTTP 请求的方法、匹配路由、状态码与耗时

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
///
/// - 请求 ID (x-request-id，由 `SetRequestIdLayer` 写入)
/// - HTTP 方法和路由模板
/// - 响应状态码与延迟 (毫秒)
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        info!(%request_id, %method, %path, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}

//! 欢迎页与健康检查 - 公共路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 欢迎信息 |
//! | /health | GET | 健康检查 |

use axum::{Json, Router, routing::get};
use shared::models::{HealthResponse, MessageResponse};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
}

async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Three Beans Cafe!"))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

//! Order API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /orders | POST | 无 (用户或访客) |
//! | /orders | GET | 管理员 |
//! | /orders/user/{id} | GET | 登录 |
//! | /orders/status/{status} | GET | 管理员 |
//! | /orders/status/{id} | PATCH | 管理员 |
//! | /orders/active | GET | 管理员 |
//! | /orders/delete/{id} | DELETE | 管理员 |

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::create))
        .route("/active", get(handler::list_active))
        .route("/user/{id}", get(handler::list_by_user))
        // GET 参数为状态名，PATCH 参数为订单 ID
        .route(
            "/status/{id}",
            get(handler::list_by_status).patch(handler::update_status),
        )
        .route("/delete/{id}", delete(handler::delete))
}

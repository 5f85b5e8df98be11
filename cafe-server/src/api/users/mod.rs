//! User API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /users/signup | POST | 无 |
//! | /users/login | POST | 无 |
//! | /users/update | PATCH | 登录 |
//! | /users/delete | DELETE | 登录 |
//! | /users/me | GET | 登录 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
        .route("/update", patch(handler::update))
        .route("/delete", delete(handler::delete))
        .route("/me", get(handler::me))
}

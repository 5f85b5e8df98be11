//! Favourite API 模块 - 全部需要登录
//!
//! `GET /favourites/{id}` 的参数是用户 ID，`PATCH` / `DELETE` 的参数是收藏 ID。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/favourites", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create)).route(
        "/{id}",
        get(handler::list_by_user)
            .patch(handler::update)
            .delete(handler::delete),
    )
}

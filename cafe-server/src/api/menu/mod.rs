//! Menu API 模块
//!
//! 读取接口公开；创建 / 修改 / 删除需要管理员。

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Public reads
        .route("/items", get(handler::list_items))
        .route("/categories", get(handler::list_categories))
        .route("/item/{id}", get(handler::get_item))
        .route("/category/{id}", get(handler::category_items))
        // Admin writes
        .route("/create/item", post(handler::create_item))
        .route("/create/category", post(handler::create_category))
        .route("/update/item/{id}", patch(handler::update_item))
        .route("/update/category/{id}", patch(handler::update_category))
        .route("/delete/item/{id}", delete(handler::delete_item))
        .route("/delete/category/{id}", delete(handler::delete_category))
}

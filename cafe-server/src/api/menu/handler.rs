//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde_json::{Value, json};
use shared::models::{
    CategoryCreate, CategoryUpdate, ItemCreate, ItemUpdate, ListResponse, MessageResponse,
};

use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Category, Item};
use crate::utils::AppResult;
use crate::utils::ids::{self, parse_id};

/// GET /menu/items - 全部菜品
pub async fn list_items(State(state): State<ServerState>) -> AppResult<Json<ListResponse<Item>>> {
    Ok(Json(ListResponse::new(state.catalog().list_items().await?)))
}

/// GET /menu/categories - 全部分类
pub async fn list_categories(
    State(state): State<ServerState>,
) -> AppResult<Json<ListResponse<Category>>> {
    Ok(Json(ListResponse::new(state.catalog().list_categories().await?)))
}

/// GET /menu/item/:id - 单个菜品
pub async fn get_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(ids::ITEM, &id)?;
    let item = state.catalog().get_item(&id).await?;
    Ok(Json(json!({ "result": item })))
}

/// GET /menu/category/:id - 分类下的菜品 (可为空)
pub async fn category_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ListResponse<Item>>> {
    let id = parse_id(ids::CATEGORY, &id)?;
    Ok(Json(ListResponse::new(
        state.catalog().category_items(&id).await?,
    )))
}

/// POST /menu/create/item - 新建菜品
pub async fn create_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    AppJson(payload): AppJson<ItemCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    user.require_admin()?;
    let item = state.catalog().create_item(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item added successfully", "item": item })),
    ))
}

/// POST /menu/create/category - 新建分类
pub async fn create_category(
    State(state): State<ServerState>,
    user: CurrentUser,
    AppJson(payload): AppJson<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    user.require_admin()?;
    let category = state.catalog().create_category(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Category added successfully", "category": category })),
    ))
}

/// PATCH /menu/update/item/:id - 部分更新菜品
pub async fn update_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ItemUpdate>,
) -> AppResult<Json<Value>> {
    user.require_admin()?;
    let id = parse_id(ids::ITEM, &id)?;
    let item = state.catalog().update_item(&id, payload).await?;
    Ok(Json(
        json!({ "message": "Item updated successfully", "item": item }),
    ))
}

/// PATCH /menu/update/category/:id - 重命名分类
pub async fn update_category(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CategoryUpdate>,
) -> AppResult<Json<Value>> {
    user.require_admin()?;
    let id = parse_id(ids::CATEGORY, &id)?;
    let category = state.catalog().update_category(&id, payload).await?;
    Ok(Json(
        json!({ "message": "Category updated successfully", "category": category }),
    ))
}

/// DELETE /menu/delete/item/:id
pub async fn delete_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    user.require_admin()?;
    let id = parse_id(ids::ITEM, &id)?;
    state.catalog().delete_item(&id).await?;
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

/// DELETE /menu/delete/category/:id - 仍有菜品时拒绝
pub async fn delete_category(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    user.require_admin()?;
    let id = parse_id(ids::CATEGORY, &id)?;
    state.catalog().delete_category(&id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}

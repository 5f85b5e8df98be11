//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Serialize;
use shared::models::{
    ListResponse, MessageResponse, OrderCreateRequest, OrderStatus, StatusUpdateRequest,
};

use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::utils::AppResult;
use crate::utils::ids::{self, parse_id};

#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub message: &'static str,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: &'static str,
    pub status: OrderStatus,
}

/// POST /orders - 下单 (登录用户或访客)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreateRequest>,
) -> AppResult<(StatusCode, Json<OrderPlaced>)> {
    let order = state.orders().create_order(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderPlaced {
            message: "Order placed successfully.",
            order,
        }),
    ))
}

/// GET /orders - 全部订单，新到旧
pub async fn list_all(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ListResponse<Order>>> {
    user.require_admin()?;
    Ok(Json(ListResponse::new(state.orders().list_all().await?)))
}

/// GET /orders/user/:id - 某用户的订单，新到旧
pub async fn list_by_user(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ListResponse<Order>>> {
    let id = parse_id(ids::USER, &id)?;
    Ok(Json(ListResponse::new(
        state.orders().list_by_user(&id).await?,
    )))
}

/// GET /orders/status/:status - 按状态筛选，新到旧
pub async fn list_by_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(status): Path<String>,
) -> AppResult<Json<ListResponse<Order>>> {
    user.require_admin()?;
    Ok(Json(ListResponse::new(
        state.orders().list_by_status(&status).await?,
    )))
}

/// GET /orders/active - 未完成订单，旧到新
pub async fn list_active(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ListResponse<Order>>> {
    user.require_admin()?;
    Ok(Json(ListResponse::new(state.orders().list_active().await?)))
}

/// PATCH /orders/status/:id - 修改订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdated>> {
    user.require_admin()?;
    let id = parse_id(ids::ORDER, &id)?;
    let status = state.orders().update_status(&id, payload.status_text()).await?;
    Ok(Json(StatusUpdated {
        message: "Order status updated successfully.",
        status,
    }))
}

/// DELETE /orders/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    user.require_admin()?;
    let id = parse_id(ids::ORDER, &id)?;
    state.orders().delete(&id).await?;
    Ok(Json(MessageResponse::new("Order deleted succesfully.")))
}

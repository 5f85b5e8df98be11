//! Favourite API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Serialize;
use shared::models::{FavouriteCreate, FavouriteUpdate, ListResponse, MessageResponse};

use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Favourite;
use crate::utils::AppResult;
use crate::utils::ids::{self, parse_id};

#[derive(Debug, Serialize)]
pub struct FavouriteSaved {
    pub message: &'static str,
    pub favourite: Favourite,
}

/// POST /favourites - 收藏菜品；未给 userId 时使用当前用户
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    AppJson(payload): AppJson<FavouriteCreate>,
) -> AppResult<(StatusCode, Json<FavouriteSaved>)> {
    let owner = match payload.user_id.as_deref() {
        Some(raw) => parse_id(ids::USER, raw)?,
        None => user.record_id()?,
    };
    let item_id = parse_id(ids::ITEM, &payload.item_id)?;

    let favourite = state
        .favourites()
        .add(owner, &item_id, payload.customisations)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(FavouriteSaved {
            message: "Favourite added successfully.",
            favourite,
        }),
    ))
}

/// GET /favourites/:id - 某用户的收藏
pub async fn list_by_user(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ListResponse<Favourite>>> {
    let id = parse_id(ids::USER, &id)?;
    Ok(Json(ListResponse::new(
        state.favourites().list_by_user(&id).await?,
    )))
}

/// PATCH /favourites/:id - 替换收藏指向的菜品
pub async fn update(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<FavouriteUpdate>,
) -> AppResult<Json<FavouriteSaved>> {
    let id = parse_id(ids::FAVOURITE, &id)?;
    let item_id = parse_id(ids::ITEM, &payload.item_id)?;
    let favourite = state
        .favourites()
        .update(&id, &item_id, payload.customisations)
        .await?;
    Ok(Json(FavouriteSaved {
        message: "Favourite updated successfully.",
        favourite,
    }))
}

/// DELETE /favourites/:id
pub async fn delete(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(ids::FAVOURITE, &id)?;
    state.favourites().delete(&id).await?;
    Ok(Json(MessageResponse::new("Favourite deleted successfully.")))
}

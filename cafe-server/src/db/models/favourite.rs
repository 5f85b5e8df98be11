//! Favourite Model

use serde::{Deserialize, Serialize};
use shared::models::Customisations;
use surrealdb::RecordId;

use super::serde_helpers;

/// Favourite entity: one saved item per (user, item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favourite {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub user: RecordId,
    pub item: FavouriteItem,
}

/// Item snapshot embedded in a favourite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteItem {
    #[serde(with = "serde_helpers::record_id")]
    pub item_id: RecordId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customisations: Option<Customisations>,
}

/// Favourite ready to persist
#[derive(Debug, Clone)]
pub struct NewFavourite {
    pub user: RecordId,
    pub item: FavouriteItem,
}

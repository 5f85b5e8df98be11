//! Favourite Model

use serde::{Deserialize, Serialize};

use super::order::Customisations;

/// Add favourite payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteCreate {
    /// 省略时默认为当前登录用户
    pub user_id: Option<String>,
    pub item_id: String,
    pub customisations: Option<Customisations>,
}

/// Re-point a favourite at another item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteUpdate {
    pub item_id: String,
    pub customisations: Option<Customisations>,
}

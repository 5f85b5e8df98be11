//! Item Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub name: String,
    /// Category reference (record link)
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub price: f64,
    #[serde(
        default = "serde_helpers::default_true",
        deserialize_with = "serde_helpers::null_as_true"
    )]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Validated item ready to insert (category already resolved)
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: RecordId,
    pub price: f64,
    pub available: bool,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial item update (category already resolved)
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub category: Option<RecordId>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Catalog lookup result used for order / favourite snapshots
///
/// 菜品字段加上所属分类的名称
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub price: f64,
}

//! Order Model

use serde::{Deserialize, Serialize};
use shared::models::{Customisations, GuestUser, OrderStatus};
use surrealdb::RecordId;

use super::serde_helpers;

/// Order entity
///
/// `user` 与 `guest_user` 恰好有一个存在；`total_price` 由服务端计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_user: Option<GuestUser>,
    pub items: Vec<OrderLineItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: i64,
}

/// Immutable line snapshot taken at order time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(with = "serde_helpers::record_id")]
    pub item_id: RecordId,
    pub name: String,
    /// Category name at order time
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub line_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customisations: Option<Customisations>,
}

/// Priced order ready to persist
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user: Option<RecordId>,
    pub guest_user: Option<GuestUser>,
    pub items: Vec<OrderLineItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: i64,
}

//! Order Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Order lifecycle status
///
/// 状态之间不限制转换方向（管理员可以纠正误设的状态），
/// `completed` / `cancelled` 仅按约定视为终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Active orders still need work from the kitchen
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidStatus).with_detail("status", s))
    }
}

/// Drink customisations carried verbatim into snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customisations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<String>,
}

/// Contact details for an order placed without an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

/// One requested line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub customisations: Option<Customisations>,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub user_id: Option<String>,
    pub guest_user: Option<GuestUser>,
    #[serde(default)]
    pub items: Vec<OrderLineRequest>,
}

/// Status change payload
///
/// `status` 接受任意 JSON 值：缺失、非字符串或未知状态
/// 都交给 [`OrderStatus::from_str`] 报告 `InvalidStatus`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

impl StatusUpdateRequest {
    /// 字符串形式的状态；缺失或非字符串时为空串
    pub fn status_text(&self) -> &str {
        self.status
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}

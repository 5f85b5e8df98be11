//! Menu Model (categories and items)

use serde::{Deserialize, Serialize};

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}

/// Create item payload
///
/// `category` 是分类名称，由服务端解析为分类 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub available: Option<bool>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Update item payload (every field optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ItemUpdate {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.available.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}

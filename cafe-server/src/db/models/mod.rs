//! Database Models
//!
//! ID 字段使用 `surrealdb::RecordId`，序列化到 API 时统一渲染为 `"table:key"` 字符串。

pub mod serde_helpers;

pub mod category;
pub mod favourite;
pub mod item;
pub mod order;
pub mod user;

pub use category::Category;
pub use favourite::{Favourite, FavouriteItem, NewFavourite};
pub use item::{CatalogEntry, Item, ItemChanges, NewItem};
pub use order::{NewOrder, Order, OrderLineItem};
pub use user::{NewUser, User, UserChanges};

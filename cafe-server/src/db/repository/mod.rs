//! Repository Module
//!
//! 每个集合一个仓储 trait，业务服务只依赖 trait；
//! SurrealDB 实现位于各子模块，测试使用内存实现。

pub mod category;
pub mod favourite;
pub mod item;
pub mod order;
pub mod user;

pub use category::CategoryRepository;
pub use favourite::FavouriteRepository;
pub use item::ItemRepository;
pub use order::OrderRepository;
pub use user::UserRepository;

use async_trait::async_trait;
use shared::models::OrderStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::db::models::{
    CatalogEntry, Category, Favourite, FavouriteItem, Item, ItemChanges, NewFavourite, NewItem,
    NewOrder, NewUser, Order, User, UserChanges,
};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // UNIQUE 索引冲突: "Database index `x` already contains ..."
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 仓储方法只接受已解析的 surrealdb::RecordId，字符串解析在 utils::ids 完成。
// 记录之间的引用 (item.category, order.user, favourite.user) 存为原生 record link；
// 快照中的 itemId 存为 "table:key" 字符串。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

// =============================================================================
// Store traits
// =============================================================================

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Category>>;
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Category>>;
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>>;
    /// `Duplicate` on name collision
    async fn create(&self, name: String) -> RepoResult<Category>;
    /// `Ok(None)` when the category does not exist
    async fn rename(&self, id: &RecordId, name: String) -> RepoResult<Option<Category>>;
    /// Number of items referencing the category
    async fn count_items(&self, id: &RecordId) -> RepoResult<i64>;
    /// `Ok(false)` when nothing was deleted
    async fn delete(&self, id: &RecordId) -> RepoResult<bool>;
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Item>>;
    async fn find_by_category(&self, category: &RecordId) -> RepoResult<Vec<Item>>;
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Item>>;
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Item>>;
    async fn create(&self, item: NewItem) -> RepoResult<Item>;
    async fn update(&self, id: &RecordId, changes: ItemChanges) -> RepoResult<Option<Item>>;
    async fn delete(&self, id: &RecordId) -> RepoResult<bool>;
}

/// Read-only catalog lookups consumed by the order and favourite engines
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn resolve_item(&self, id: &RecordId) -> RepoResult<Option<CatalogEntry>>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: NewOrder) -> RepoResult<Order>;
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>>;
    /// Newest first
    async fn find_all(&self) -> RepoResult<Vec<Order>>;
    /// Newest first
    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Order>>;
    /// Newest first
    async fn find_by_status(&self, status: OrderStatus) -> RepoResult<Vec<Order>>;
    /// Status not in {completed, cancelled}, oldest first
    async fn find_active(&self) -> RepoResult<Vec<Order>>;
    async fn set_status(&self, id: &RecordId, status: OrderStatus) -> RepoResult<Option<Order>>;
    async fn delete(&self, id: &RecordId) -> RepoResult<bool>;
}

#[async_trait]
pub trait FavouriteStore: Send + Sync {
    /// `Duplicate` when (user, item) already exists
    async fn insert(&self, favourite: NewFavourite) -> RepoResult<Favourite>;
    async fn exists(&self, user: &RecordId, item: &RecordId) -> RepoResult<bool>;
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Favourite>>;
    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Favourite>>;
    async fn replace_item(
        &self,
        id: &RecordId,
        item: FavouriteItem,
    ) -> RepoResult<Option<Favourite>>;
    async fn delete(&self, id: &RecordId) -> RepoResult<bool>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    /// `Duplicate` on email collision
    async fn create(&self, user: NewUser) -> RepoResult<User>;
    async fn update(&self, id: &RecordId, changes: UserChanges) -> RepoResult<Option<User>>;
    async fn delete(&self, id: &RecordId) -> RepoResult<bool>;
}

//! 业务服务层
//!
//! - [`catalog`] - 分类 / 菜品维护
//! - [`orders`] - 下单定价与状态流转
//! - [`favourites`] - 收藏快照
//! - [`identity`] - 注册、登录与资料
//! - [`seed`] - 演示数据
//!
//! 服务只依赖 `db::repository` 中的 trait，由 [`ServerState`](crate::core::ServerState)
//! 注入 SurrealDB 实现；测试注入内存实现。

pub mod catalog;
pub mod favourites;
pub mod identity;
pub mod orders;
pub mod seed;

#[cfg(test)]
pub(crate) mod fakes;

pub use catalog::CatalogService;
pub use favourites::FavouriteService;
pub use identity::IdentityService;
pub use orders::OrderService;

use shared::error::{AppError, ErrorCode};

use crate::db::repository::RepoError;

/// 默认映射；需要区分业务码 (如重名) 的调用点自行匹配
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Map a unique-index violation to `code`, everything else through the default mapping
pub(crate) fn duplicate_as(code: ErrorCode) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::Duplicate(_) => AppError::new(code),
        other => other.into(),
    }
}

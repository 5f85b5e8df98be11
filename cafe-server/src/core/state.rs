use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{
    CategoryRepository, FavouriteRepository, ItemRepository, OrderRepository, UserRepository,
};
use crate::services::{CatalogService, FavouriteService, IdentityService, OrderService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 句柄克隆实现浅拷贝，每个请求拿到的是同一组资源。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
///
/// 业务服务按请求构造 (仓储只持有数据库句柄)：
///
/// ```ignore
/// let order = state.orders().create_order(req).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 工作目录结构 (database/, public/)
    /// 2. 数据库 (work_dir/database/cafe.db) 及索引
    /// 3. JWT 服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 菜单服务
    pub fn catalog(&self) -> CatalogService<CategoryRepository, ItemRepository> {
        CatalogService::new(
            CategoryRepository::new(self.get_db()),
            ItemRepository::new(self.get_db()),
        )
    }

    /// 订单服务
    pub fn orders(&self) -> OrderService<ItemRepository, OrderRepository> {
        OrderService::new(
            ItemRepository::new(self.get_db()),
            OrderRepository::new(self.get_db()),
        )
    }

    /// 收藏服务
    pub fn favourites(&self) -> FavouriteService<ItemRepository, FavouriteRepository> {
        FavouriteService::new(
            ItemRepository::new(self.get_db()),
            FavouriteRepository::new(self.get_db()),
        )
    }

    /// 账户服务
    pub fn identity(&self) -> IdentityService<UserRepository> {
        IdentityService::new(UserRepository::new(self.get_db()), self.get_jwt_service())
    }
}

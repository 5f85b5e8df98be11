//! Database Module
//!
//! 嵌入式 SurrealDB (RocksDB 引擎)，命名空间 / 数据库均为 `cafe`。

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use repository::{RepoError, RepoResult};

/// 启动时执行的幂等 schema (表与唯一索引)
const SCHEMA: &str = include_str!("schema.surql");

const NAMESPACE: &str = "cafe";
const DATABASE: &str = "cafe";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// 打开 (或创建) 数据库并应用 schema
    pub async fn new(db_path: impl AsRef<Path>) -> RepoResult<Self> {
        let db_path = db_path.as_ref();
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path).await?;
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;

        tracing::info!(
            path = %db_path.display(),
            "Database connection established (SurrealDB RocksDB)"
        );

        apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

/// 应用 schema；任何一条语句失败即返回错误
pub async fn apply_schema(db: &Surreal<Db>) -> RepoResult<()> {
    let response = db.query(SCHEMA).await?;
    response
        .check()
        .map_err(|e| RepoError::Database(format!("Failed to apply schema: {e}")))?;
    Ok(())
}

/// 清空全部业务表 (仅供演示数据与测试使用)
pub async fn clear_tables(db: &Surreal<Db>) -> RepoResult<()> {
    db.query("DELETE favourite; DELETE order; DELETE item; DELETE category; DELETE user;")
        .await?
        .check()
        .map_err(|e| RepoError::Database(format!("Failed to clear tables: {e}")))?;
    Ok(())
}

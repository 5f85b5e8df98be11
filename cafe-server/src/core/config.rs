use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库与上传文件) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (存在时按天滚动写入) |
/// | MAX_UPLOAD_BYTES | 5242880 | 上传文件大小上限 |
///
/// JWT 相关变量见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/cafe HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 上传文件大小上限 (字节)
    pub max_upload_bytes: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值；JWT 密钥不合法时返回错误
    pub fn from_env() -> Result<Self> {
        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5 * 1024 * 1024),
        })
    }

    /// 使用自定义工作目录和 JWT 配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port: 0,
            jwt,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 数据库目录: {work_dir}/database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 数据库路径: {work_dir}/database/cafe.db
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("cafe.db")
    }

    /// 上传文件目录: {work_dir}/public
    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("public")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.public_dir())?;
        Ok(())
    }
}

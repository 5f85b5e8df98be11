//! Three Beans Cafe Server - 咖啡店点单后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，仓储 trait + 实现
//! - **业务服务** (`services`): 菜单、订单、收藏、账户
//! - **认证** (`auth`): JWT + Argon2
//! - **HTTP API** (`api`): axum 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT、密码、提取器
//! ├── db/            # 模型、仓储、schema
//! ├── services/      # 业务规则
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、ID、金额、校验
//! └── bin/seed.rs    # 演示数据
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
  _____ _                       ____
 |_   _| |__  _ __ ___  ___    | __ )  ___  __ _ _ __  ___
   | | | '_ \| '__/ _ \/ _ \   |  _ \ / _ \/ _` | '_ \/ __|
   | | | | | | | |  __/  __/   | |_) |  __/ (_| | | | \__ \
   |_| |_| |_|_|  \___|\___|   |____/ \___|\__,_|_| |_|___/
                                              cafe-server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// 启动前的环境准备
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 读取 [`Config`]
/// 3. 初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logger(&config.log_level, config.log_dir.as_deref())?;
    Ok(config)
}

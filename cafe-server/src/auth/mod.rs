//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文 (axum 提取器)
//! - [`password`] - Argon2 密码哈希

pub mod extractor;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};

//! 工具模块
//!
//! - [`logger`] - 日志初始化
//! - [`validation`] - 文本与金额校验
//! - [`ids`] - 路径 / 请求体中的记录 ID 解析
//! - [`money`] - Decimal 金额计算

pub mod ids;
pub mod logger;
pub mod money;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

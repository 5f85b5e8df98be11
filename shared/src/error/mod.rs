//! Unified error system for the cafe backend
//!
//! - [`ErrorCode`]: 所有错误的标准化错误码
//! - [`ErrorCategory`]: 按业务域划分的错误类别
//! - [`AppError`]: 携带错误码、消息和详情的错误类型
//! - [`ApiResponse`]: 统一的错误响应格式
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Favourite errors
//! - 6xxx: Menu errors
//! - 8xxx: User errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ItemNotFound);
//!
//! let err = AppError::validation("price must be finite")
//!     .with_detail("field", "price");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};

//! Shared types for the cafe backend
//!
//! Error types, request payloads and response envelopes used by
//! cafe-server and by any client talking to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};

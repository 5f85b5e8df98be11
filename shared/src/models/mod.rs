//! Data models
//!
//! Request payloads and response envelopes shared between cafe-server and
//! its clients. Field names on the wire are camelCase.

pub mod favourite;
pub mod menu;
pub mod order;
pub mod response;
pub mod user;

// Re-exports
pub use favourite::*;
pub use menu::*;
pub use order::*;
pub use response::*;
pub use user::*;

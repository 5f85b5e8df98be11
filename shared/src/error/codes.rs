//! Unified error codes for the cafe backend
//!
//! This module defines all error codes used by the server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Favourite errors
//! - 6xxx: Menu errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Malformed identifier
    InvalidId = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Email is not registered
    EmailNotFound = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Password does not match
    PasswordIncorrect = 1005,
    /// Email already registered
    EmailAlreadyExists = 1006,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Status is not part of the order lifecycle
    InvalidStatus = 4002,
    /// Neither a user id nor guest details were given
    IdentityRequired = 4003,
    /// Order has no line items
    OrderEmpty = 4004,
    /// Quantity outside the accepted range
    InvalidQuantity = 4005,

    // ==================== 5xxx: Favourite ====================
    /// Favourite not found
    FavouriteNotFound = 5001,
    /// Item is already a favourite of this user
    FavouriteExists = 5002,

    // ==================== 6xxx: Menu ====================
    /// Item not found
    ItemNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6002,
    /// Item name already taken
    ItemNameExists = 6003,
    /// Category name already taken
    CategoryNameExists = 6004,
    /// Category still referenced by items
    CategoryHasItems = 6005,
    /// Price negative, non-finite or too large
    InvalidPrice = 6006,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// File storage error
    StorageError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidId => "Invalid id",
            Self::RequiredField => "Required field missing",

            // Auth
            Self::NotAuthenticated => "Authentication token is required",
            Self::EmailNotFound => "Sorry we can't find this email in our system.",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Invalid token",
            Self::PasswordIncorrect => {
                "Your password is incorrect, please double check and try again."
            }
            Self::EmailAlreadyExists => {
                "It looks like you've already made a profile with this email."
            }

            // Permission
            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Access denied! must be an admin.",

            // Order
            Self::OrderNotFound => "Order not found.",
            Self::InvalidStatus => "Invalid status.",
            Self::IdentityRequired => "User or guest information is required to place an order.",
            Self::OrderEmpty => "An order needs at least one item.",
            Self::InvalidQuantity => "Invalid quantity.",

            // Favourite
            Self::FavouriteNotFound => "Favourite not found.",
            Self::FavouriteExists => "Item is already in your favourites.",

            // Menu
            Self::ItemNotFound => "Item not found.",
            Self::CategoryNotFound => "Category not found.",
            Self::ItemNameExists => "An item with this name already exists.",
            Self::CategoryNameExists => "A category with this name already exists.",
            Self::CategoryHasItems => "Category still has items and cannot be deleted.",
            Self::InvalidPrice => "Invalid price.",

            // User
            Self::UserNotFound => "User not found.",

            // System
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::StorageError => "File storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidId),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::EmailNotFound),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::PasswordIncorrect),
            1006 => Ok(ErrorCode::EmailAlreadyExists),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidStatus),
            4003 => Ok(ErrorCode::IdentityRequired),
            4004 => Ok(ErrorCode::OrderEmpty),
            4005 => Ok(ErrorCode::InvalidQuantity),

            // Favourite
            5001 => Ok(ErrorCode::FavouriteNotFound),
            5002 => Ok(ErrorCode::FavouriteExists),

            // Menu
            6001 => Ok(ErrorCode::ItemNotFound),
            6002 => Ok(ErrorCode::CategoryNotFound),
            6003 => Ok(ErrorCode::ItemNameExists),
            6004 => Ok(ErrorCode::CategoryNameExists),
            6005 => Ok(ErrorCode::CategoryHasItems),
            6006 => Ok(ErrorCode::InvalidPrice),

            // User
            8001 => Ok(ErrorCode::UserNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Success response envelopes

use serde::{Deserialize, Serialize};

/// `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "result": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub result: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(result: Vec<T>) -> Self {
        Self { result }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

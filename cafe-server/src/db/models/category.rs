//! Category Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub name: String,
}

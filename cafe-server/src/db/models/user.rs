//! User Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::UserProfile;
use surrealdb::RecordId;

use super::serde_helpers;

/// User entity
///
/// `password` 保存 Argon2 哈希，永不序列化输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_false")]
    pub admin: bool,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            birthday: self.birthday,
            admin: self.admin,
        }
    }
}

/// New account, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub birthday: Option<NaiveDate>,
    pub admin: bool,
}

/// Partial profile update, password already hashed
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub birthday: Option<NaiveDate>,
}

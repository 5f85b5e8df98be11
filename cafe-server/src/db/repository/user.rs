//! User Repository

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, UserStore};
use crate::db::models::{NewUser, User, UserChanges};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(id.clone()).await?;
        Ok(user)
    }

    /// Email 唯一，按精确值匹配
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(users.into_iter().next())
    }

    async fn create(&self, user: NewUser) -> RepoResult<User> {
        let created: Vec<User> = self
            .base
            .db()
            .query(
                "CREATE user SET name = $name, email = $email, password = $password, \
                 birthday = $birthday, admin = $admin",
            )
            .bind(("name", user.name))
            .bind(("email", user.email))
            .bind(("password", user.password_hash))
            .bind(("birthday", user.birthday))
            .bind(("admin", user.admin))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    async fn update(&self, id: &RecordId, changes: UserChanges) -> RepoResult<Option<User>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Vec<User> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET \
                 name = $name OR name, \
                 email = $email OR email, \
                 password = $password OR password, \
                 birthday = $birthday OR birthday \
                 RETURN AFTER",
            )
            .bind(("thing", id.clone()))
            .bind(("name", changes.name))
            .bind(("email", changes.email))
            .bind(("password", changes.password_hash))
            .bind(("birthday", changes.birthday))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Vec<User> = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}

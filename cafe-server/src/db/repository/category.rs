//! Category Repository

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CategoryStore, RepoError, RepoResult};
use crate::db::models::Category;

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    /// Find all categories ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name")
            .await?
            .take(0)?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Category>> {
        let category: Option<Category> = self.base.db().select(id.clone()).await?;
        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(categories.into_iter().next())
    }

    async fn create(&self, name: String) -> RepoResult<Category> {
        let created: Vec<Category> = self
            .base
            .db()
            .query("CREATE category SET name = $name")
            .bind(("name", name))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    async fn rename(&self, id: &RecordId, name: String) -> RepoResult<Option<Category>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Vec<Category> = self
            .base
            .db()
            .query("UPDATE $thing SET name = $name RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("name", name))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn count_items(&self, id: &RecordId) -> RepoResult<i64> {
        let count: Option<i64> = self
            .base
            .db()
            .query("SELECT count() FROM item WHERE category = $cat GROUP ALL")
            .bind(("cat", id.clone()))
            .await?
            .take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Hard delete, returns whether a record was removed
    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Vec<Category> = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}

//! Favourite Repository

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, FavouriteStore, RepoError, RepoResult};
use crate::db::models::{Favourite, FavouriteItem, NewFavourite};

#[derive(Clone)]
pub struct FavouriteRepository {
    base: BaseRepository,
}

impl FavouriteRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl FavouriteStore for FavouriteRepository {
    /// (user, item.itemId) 唯一索引冲突时返回 `Duplicate`
    async fn insert(&self, favourite: NewFavourite) -> RepoResult<Favourite> {
        let created: Vec<Favourite> = self
            .base
            .db()
            .query("CREATE favourite SET user = $user, item = $item")
            .bind(("user", favourite.user))
            .bind(("item", favourite.item))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create favourite".to_string()))
    }

    async fn exists(&self, user: &RecordId, item: &RecordId) -> RepoResult<bool> {
        // 快照里的 itemId 以字符串保存
        let count: Option<i64> = self
            .base
            .db()
            .query(
                "SELECT count() FROM favourite WHERE user = $user AND item.itemId = $item GROUP ALL",
            )
            .bind(("user", user.clone()))
            .bind(("item", item.to_string()))
            .await?
            .take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Favourite>> {
        let favourite: Option<Favourite> = self.base.db().select(id.clone()).await?;
        Ok(favourite)
    }

    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Favourite>> {
        let favourites: Vec<Favourite> = self
            .base
            .db()
            .query("SELECT * FROM favourite WHERE user = $user ORDER BY item.name")
            .bind(("user", user.clone()))
            .await?
            .take(0)?;
        Ok(favourites)
    }

    async fn replace_item(
        &self,
        id: &RecordId,
        item: FavouriteItem,
    ) -> RepoResult<Option<Favourite>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Vec<Favourite> = self
            .base
            .db()
            .query("UPDATE $thing SET item = $item RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("item", item))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Vec<Favourite> = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}

//! Item Repository

use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, CatalogLookup, ItemStore, RepoError, RepoResult};
use crate::db::models::{CatalogEntry, Item, ItemChanges, NewItem};

#[derive(Clone)]
pub struct ItemRepository {
    base: BaseRepository,
}

impl ItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn find_all(&self) -> RepoResult<Vec<Item>> {
        let items: Vec<Item> = self
            .base
            .db()
            .query("SELECT * FROM item ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    async fn find_by_category(&self, category: &RecordId) -> RepoResult<Vec<Item>> {
        let items: Vec<Item> = self
            .base
            .db()
            .query("SELECT * FROM item WHERE category = $cat ORDER BY name")
            .bind(("cat", category.clone()))
            .await?
            .take(0)?;
        Ok(items)
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Item>> {
        let item: Option<Item> = self.base.db().select(id.clone()).await?;
        Ok(item)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Item>> {
        let items: Vec<Item> = self
            .base
            .db()
            .query("SELECT * FROM item WHERE name = $name")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(items.into_iter().next())
    }

    async fn create(&self, item: NewItem) -> RepoResult<Item> {
        // category 以原生 RecordId 绑定，存为 record link
        let created: Vec<Item> = self
            .base
            .db()
            .query(
                "CREATE item SET name = $name, category = $category, price = $price, \
                 available = $available, description = $description, image = $image",
            )
            .bind(("name", item.name))
            .bind(("category", item.category))
            .bind(("price", item.price))
            .bind(("available", item.available))
            .bind(("description", item.description))
            .bind(("image", item.image))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create item".to_string()))
    }

    /// Partial update; absent fields keep their stored value
    async fn update(&self, id: &RecordId, changes: ItemChanges) -> RepoResult<Option<Item>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Vec<Item> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET \
                 name = $name OR name, \
                 category = $category OR category, \
                 price = IF $price != NONE THEN $price ELSE price END, \
                 available = IF $available != NONE THEN $available ELSE available END, \
                 description = $description OR description, \
                 image = $image OR image \
                 RETURN AFTER",
            )
            .bind(("thing", id.clone()))
            .bind(("name", changes.name))
            .bind(("category", changes.category))
            .bind(("price", changes.price))
            .bind(("available", changes.available))
            .bind(("description", changes.description))
            .bind(("image", changes.image))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Vec<Item> = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}

#[async_trait]
impl CatalogLookup for ItemRepository {
    /// 菜品 + 分类名称，一次查询完成
    async fn resolve_item(&self, id: &RecordId) -> RepoResult<Option<CatalogEntry>> {
        let entries: Vec<CatalogEntry> = self
            .base
            .db()
            .query("SELECT id, name, price, category.name AS category_name FROM $thing")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(entries.into_iter().next())
    }
}

//! Favourite Service
//!
//! 收藏保存的是菜品快照 (名称 / 分类 / 单价)，与订单行一样不随菜单变化。
//! 同一用户对同一菜品只能收藏一次：先查重，唯一索引兜底。

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Customisations;
use surrealdb::RecordId;

use super::duplicate_as;
use crate::db::models::{Favourite, FavouriteItem, NewFavourite};
use crate::db::repository::{CatalogLookup, FavouriteStore};

pub struct FavouriteService<L, F> {
    catalog: L,
    favourites: F,
}

impl<L, F> FavouriteService<L, F>
where
    L: CatalogLookup,
    F: FavouriteStore,
{
    pub fn new(catalog: L, favourites: F) -> Self {
        Self {
            catalog,
            favourites,
        }
    }

    pub async fn add(
        &self,
        user: RecordId,
        item_id: &RecordId,
        customisations: Option<Customisations>,
    ) -> AppResult<Favourite> {
        let item = self.snapshot(item_id, customisations).await?;

        if self.favourites.exists(&user, item_id).await? {
            return Err(favourite_exists(item_id));
        }

        let favourite = self
            .favourites
            .insert(NewFavourite { user, item })
            .await
            .map_err(duplicate_as(ErrorCode::FavouriteExists))?;
        tracing::info!(
            id = %favourite.id,
            user = %favourite.user,
            item = %favourite.item.item_id,
            "Favourite added"
        );
        Ok(favourite)
    }

    /// 整体替换快照
    ///
    /// 不做预检；若该用户已收藏新菜品，唯一索引拒绝写入并报告 `FavouriteExists`
    pub async fn update(
        &self,
        id: &RecordId,
        item_id: &RecordId,
        customisations: Option<Customisations>,
    ) -> AppResult<Favourite> {
        let item = self.snapshot(item_id, customisations).await?;
        self.favourites
            .replace_item(id, item)
            .await
            .map_err(duplicate_as(ErrorCode::FavouriteExists))?
            .ok_or_else(|| favourite_not_found(id))
    }

    pub async fn list_by_user(&self, user: &RecordId) -> AppResult<Vec<Favourite>> {
        Ok(self.favourites.find_by_user(user).await?)
    }

    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.favourites.delete(id).await? {
            return Err(favourite_not_found(id));
        }
        tracing::info!(id = %id, "Favourite deleted");
        Ok(())
    }

    async fn snapshot(
        &self,
        item_id: &RecordId,
        customisations: Option<Customisations>,
    ) -> AppResult<FavouriteItem> {
        let entry = self.catalog.resolve_item(item_id).await?.ok_or_else(|| {
            AppError::new(ErrorCode::ItemNotFound).with_detail("itemId", item_id.to_string())
        })?;
        Ok(FavouriteItem {
            item_id: entry.id,
            name: entry.name,
            category: entry.category_name.unwrap_or_default(),
            price: entry.price,
            customisations,
        })
    }
}

fn favourite_exists(item_id: &RecordId) -> AppError {
    AppError::new(ErrorCode::FavouriteExists).with_detail("itemId", item_id.to_string())
}

fn favourite_not_found(id: &RecordId) -> AppError {
    AppError::new(ErrorCode::FavouriteNotFound).with_detail("id", id.to_string())
}

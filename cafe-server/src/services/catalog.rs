//! Catalog Service
//!
//! 分类与菜品的增删改查。客户端以分类**名称**指定菜品所属分类，
//! 这里解析为分类记录 ID 再落库。

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CategoryCreate, CategoryUpdate, ItemCreate, ItemUpdate};
use surrealdb::RecordId;

use super::duplicate_as;
use crate::db::models::{Category, Item, ItemChanges, NewItem};
use crate::db::repository::{CategoryStore, ItemStore};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_price,
    validate_required_text,
};

pub struct CatalogService<C, I> {
    categories: C,
    items: I,
}

impl<C, I> CatalogService<C, I>
where
    C: CategoryStore,
    I: ItemStore,
{
    pub fn new(categories: C, items: I) -> Self {
        Self { categories, items }
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.find_all().await?)
    }

    pub async fn create_category(&self, req: CategoryCreate) -> AppResult<Category> {
        let name = req.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;

        if self.categories.find_by_name(&name).await?.is_some() {
            return Err(AppError::new(ErrorCode::CategoryNameExists).with_detail("name", name));
        }

        let category = self
            .categories
            .create(name)
            .await
            .map_err(duplicate_as(ErrorCode::CategoryNameExists))?;
        tracing::info!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn update_category(&self, id: &RecordId, req: CategoryUpdate) -> AppResult<Category> {
        let existing = self.require_category(id).await?;
        let Some(name) = req.name.map(|n| n.trim().to_string()) else {
            return Ok(existing);
        };
        validate_required_text(&name, "name", MAX_NAME_LEN)?;

        if name != existing.name && self.categories.find_by_name(&name).await?.is_some() {
            return Err(AppError::new(ErrorCode::CategoryNameExists).with_detail("name", name));
        }

        self.categories
            .rename(id, name)
            .await
            .map_err(duplicate_as(ErrorCode::CategoryNameExists))?
            .ok_or_else(|| category_not_found(id))
    }

    /// 仍被菜品引用的分类不可删除
    pub async fn delete_category(&self, id: &RecordId) -> AppResult<()> {
        self.require_category(id).await?;

        let dependents = self.categories.count_items(id).await?;
        if dependents > 0 {
            return Err(AppError::new(ErrorCode::CategoryHasItems)
                .with_detail("category", id.to_string())
                .with_detail("items", dependents));
        }

        if !self.categories.delete(id).await? {
            return Err(category_not_found(id));
        }
        tracing::info!(id = %id, "Category deleted");
        Ok(())
    }

    /// Items of one category; 404 when the category itself is missing
    pub async fn category_items(&self, id: &RecordId) -> AppResult<Vec<Item>> {
        self.require_category(id).await?;
        Ok(self.items.find_by_category(id).await?)
    }

    // ========== Items ==========

    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.items.find_all().await?)
    }

    pub async fn get_item(&self, id: &RecordId) -> AppResult<Item> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    pub async fn create_item(&self, req: ItemCreate) -> AppResult<Item> {
        let name = req.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_price(req.price)?;
        validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&req.image, "image", MAX_URL_LEN)?;

        let category = self.resolve_category(&req.category).await?;

        if self.items.find_by_name(&name).await?.is_some() {
            return Err(AppError::new(ErrorCode::ItemNameExists).with_detail("name", name));
        }

        let item = self
            .items
            .create(NewItem {
                name,
                category,
                price: req.price,
                available: req.available.unwrap_or(true),
                description: req.description,
                image: req.image,
            })
            .await
            .map_err(duplicate_as(ErrorCode::ItemNameExists))?;
        tracing::info!(id = %item.id, name = %item.name, price = item.price, "Item created");
        Ok(item)
    }

    /// Partial update: every present field is validated, category re-resolved by name
    pub async fn update_item(&self, id: &RecordId, req: ItemUpdate) -> AppResult<Item> {
        let existing = self.get_item(id).await?;
        if req.is_empty() {
            return Ok(existing);
        }

        let name = req.name.map(|n| n.trim().to_string());
        if let Some(name) = &name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
            if *name != existing.name && self.items.find_by_name(name).await?.is_some() {
                return Err(
                    AppError::new(ErrorCode::ItemNameExists).with_detail("name", name.as_str())
                );
            }
        }
        if let Some(price) = req.price {
            validate_price(price)?;
        }
        validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&req.image, "image", MAX_URL_LEN)?;

        let category = match &req.category {
            Some(category_name) => Some(self.resolve_category(category_name).await?),
            None => None,
        };

        let changes = ItemChanges {
            name,
            category,
            price: req.price,
            available: req.available,
            description: req.description,
            image: req.image,
        };

        self.items
            .update(id, changes)
            .await
            .map_err(duplicate_as(ErrorCode::ItemNameExists))?
            .ok_or_else(|| item_not_found(id))
    }

    pub async fn delete_item(&self, id: &RecordId) -> AppResult<()> {
        if !self.items.delete(id).await? {
            return Err(item_not_found(id));
        }
        tracing::info!(id = %id, "Item deleted");
        Ok(())
    }

    // ========== Helpers ==========

    async fn require_category(&self, id: &RecordId) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))
    }

    async fn resolve_category(&self, name: &str) -> AppResult<RecordId> {
        self.categories
            .find_by_name(name.trim())
            .await?
            .map(|c| c.id)
            .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("category", name))
    }
}

fn category_not_found(id: &RecordId) -> AppError {
    AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id.to_string())
}

fn item_not_found(id: &RecordId) -> AppError {
    AppError::new(ErrorCode::ItemNotFound).with_detail("id", id.to_string())
}

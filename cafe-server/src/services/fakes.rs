//! 内存仓储实现，供服务层单元测试使用

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::OrderStatus;
use surrealdb::RecordId;

use crate::db::models::{
    CatalogEntry, Category, Favourite, FavouriteItem, Item, ItemChanges, NewFavourite, NewItem,
    NewOrder, NewUser, Order, User, UserChanges,
};
use crate::db::repository::{
    CatalogLookup, CategoryStore, FavouriteStore, ItemStore, OrderStore, RepoError, RepoResult,
    UserStore,
};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

pub fn rid(table: &str, key: &str) -> RecordId {
    RecordId::from_table_key(table, key)
}

fn next_id(table: &str) -> RecordId {
    let n = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    rid(table, &format!("k{n}"))
}

// ========== Catalog ==========

#[derive(Default)]
struct CatalogData {
    categories: Vec<Category>,
    items: Vec<Item>,
}

#[derive(Clone, Default)]
pub struct MemoryCatalog {
    data: Arc<Mutex<CatalogData>>,
}

impl MemoryCatalog {
    /// 直接写入一个分类和菜品 (绕过服务层校验)
    pub fn seed_item(&self, category: &str, name: &str, price: f64) -> RecordId {
        let mut data = self.data.lock();
        let category_id = match data.categories.iter().find(|c| c.name == category) {
            Some(c) => c.id.clone(),
            None => {
                let c = Category {
                    id: next_id("category"),
                    name: category.to_string(),
                };
                let id = c.id.clone();
                data.categories.push(c);
                id
            }
        };
        let item = Item {
            id: next_id("item"),
            name: name.to_string(),
            category: category_id,
            price,
            available: true,
            description: None,
            image: None,
        };
        let id = item.id.clone();
        data.items.push(item);
        id
    }

    pub fn set_price(&self, id: &RecordId, price: f64) {
        if let Some(item) = self.data.lock().items.iter_mut().find(|i| &i.id == id) {
            item.price = price;
        }
    }
}

#[async_trait]
impl CategoryStore for MemoryCatalog {
    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let mut all = self.data.lock().categories.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Category>> {
        Ok(self.data.lock().categories.iter().find(|c| &c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        Ok(self.data.lock().categories.iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, name: String) -> RepoResult<Category> {
        let mut data = self.data.lock();
        if data.categories.iter().any(|c| c.name == name) {
            return Err(RepoError::Duplicate(name));
        }
        let category = Category {
            id: next_id("category"),
            name,
        };
        data.categories.push(category.clone());
        Ok(category)
    }

    async fn rename(&self, id: &RecordId, name: String) -> RepoResult<Option<Category>> {
        let mut data = self.data.lock();
        Ok(data.categories.iter_mut().find(|c| &c.id == id).map(|c| {
            c.name = name;
            c.clone()
        }))
    }

    async fn count_items(&self, id: &RecordId) -> RepoResult<i64> {
        Ok(self.data.lock().items.iter().filter(|i| &i.category == id).count() as i64)
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let mut data = self.data.lock();
        let before = data.categories.len();
        data.categories.retain(|c| &c.id != id);
        Ok(data.categories.len() != before)
    }
}

#[async_trait]
impl ItemStore for MemoryCatalog {
    async fn find_all(&self) -> RepoResult<Vec<Item>> {
        Ok(self.data.lock().items.clone())
    }

    async fn find_by_category(&self, category: &RecordId) -> RepoResult<Vec<Item>> {
        Ok(self
            .data
            .lock()
            .items
            .iter()
            .filter(|i| &i.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Item>> {
        Ok(self.data.lock().items.iter().find(|i| &i.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Item>> {
        Ok(self.data.lock().items.iter().find(|i| i.name == name).cloned())
    }

    async fn create(&self, item: NewItem) -> RepoResult<Item> {
        let mut data = self.data.lock();
        if data.items.iter().any(|i| i.name == item.name) {
            return Err(RepoError::Duplicate(item.name));
        }
        let item = Item {
            id: next_id("item"),
            name: item.name,
            category: item.category,
            price: item.price,
            available: item.available,
            description: item.description,
            image: item.image,
        };
        data.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &RecordId, changes: ItemChanges) -> RepoResult<Option<Item>> {
        let mut data = self.data.lock();
        Ok(data.items.iter_mut().find(|i| &i.id == id).map(|item| {
            if let Some(name) = changes.name {
                item.name = name;
            }
            if let Some(category) = changes.category {
                item.category = category;
            }
            if let Some(price) = changes.price {
                item.price = price;
            }
            if let Some(available) = changes.available {
                item.available = available;
            }
            if changes.description.is_some() {
                item.description = changes.description;
            }
            if changes.image.is_some() {
                item.image = changes.image;
            }
            item.clone()
        }))
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let mut data = self.data.lock();
        let before = data.items.len();
        data.items.retain(|i| &i.id != id);
        Ok(data.items.len() != before)
    }
}

#[async_trait]
impl CatalogLookup for MemoryCatalog {
    async fn resolve_item(&self, id: &RecordId) -> RepoResult<Option<CatalogEntry>> {
        let data = self.data.lock();
        Ok(data.items.iter().find(|i| &i.id == id).map(|item| CatalogEntry {
            id: item.id.clone(),
            name: item.name.clone(),
            category_name: data
                .categories
                .iter()
                .find(|c| c.id == item.category)
                .map(|c| c.name.clone()),
            price: item.price,
        }))
    }
}

// ========== Orders ==========

#[derive(Clone, Default)]
pub struct MemoryOrders {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl MemoryOrders {
    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

#[async_trait]
impl OrderStore for MemoryOrders {
    async fn insert(&self, order: NewOrder) -> RepoResult<Order> {
        let order = Order {
            id: next_id("order"),
            user: order.user,
            guest_user: order.guest_user,
            items: order.items,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at,
        };
        self.orders.lock().push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        Ok(self.orders.lock().iter().find(|o| &o.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        Ok(newest_first(self.orders.lock().clone()))
    }

    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Order>> {
        let orders = self.orders.lock();
        Ok(newest_first(
            orders
                .iter()
                .filter(|o| o.user.as_ref() == Some(user))
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_status(&self, status: OrderStatus) -> RepoResult<Vec<Order>> {
        let orders = self.orders.lock();
        Ok(newest_first(
            orders.iter().filter(|o| o.status == status).cloned().collect(),
        ))
    }

    async fn find_active(&self) -> RepoResult<Vec<Order>> {
        let mut active: Vec<Order> = self
            .orders
            .lock()
            .iter()
            .filter(|o| o.status.is_active())
            .cloned()
            .collect();
        active.sort_by_key(|o| o.created_at);
        Ok(active)
    }

    async fn set_status(&self, id: &RecordId, status: OrderStatus) -> RepoResult<Option<Order>> {
        let mut orders = self.orders.lock();
        Ok(orders.iter_mut().find(|o| &o.id == id).map(|o| {
            o.status = status;
            o.clone()
        }))
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let mut orders = self.orders.lock();
        let before = orders.len();
        orders.retain(|o| &o.id != id);
        Ok(orders.len() != before)
    }
}

// ========== Favourites ==========

/// 与 SurrealDB 唯一索引一致：(user, item.itemId) 重复插入返回 `Duplicate`
#[derive(Clone, Default)]
pub struct MemoryFavourites {
    favourites: Arc<Mutex<Vec<Favourite>>>,
    /// 模拟竞态：`exists` 始终返回 false
    skip_exists_check: bool,
}

impl MemoryFavourites {
    /// `exists` 永远返回 false，只剩唯一约束兜底 (模拟两个并发请求都通过了预检)
    pub fn racy() -> Self {
        Self {
            skip_exists_check: true,
            ..Self::default()
        }
    }

    pub fn count_for(&self, user: &RecordId) -> usize {
        self.favourites.lock().iter().filter(|f| &f.user == user).count()
    }
}

#[async_trait]
impl FavouriteStore for MemoryFavourites {
    async fn insert(&self, favourite: NewFavourite) -> RepoResult<Favourite> {
        let mut all = self.favourites.lock();
        if all
            .iter()
            .any(|f| f.user == favourite.user && f.item.item_id == favourite.item.item_id)
        {
            return Err(RepoError::Duplicate("favourite_user_item_unique".into()));
        }
        let favourite = Favourite {
            id: next_id("favourite"),
            user: favourite.user,
            item: favourite.item,
        };
        all.push(favourite.clone());
        Ok(favourite)
    }

    async fn exists(&self, user: &RecordId, item: &RecordId) -> RepoResult<bool> {
        if self.skip_exists_check {
            return Ok(false);
        }
        Ok(self
            .favourites
            .lock()
            .iter()
            .any(|f| &f.user == user && &f.item.item_id == item))
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Favourite>> {
        Ok(self.favourites.lock().iter().find(|f| &f.id == id).cloned())
    }

    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Favourite>> {
        Ok(self
            .favourites
            .lock()
            .iter()
            .filter(|f| &f.user == user)
            .cloned()
            .collect())
    }

    async fn replace_item(
        &self,
        id: &RecordId,
        item: FavouriteItem,
    ) -> RepoResult<Option<Favourite>> {
        let mut all = self.favourites.lock();
        let Some(user) = all.iter().find(|f| &f.id == id).map(|f| f.user.clone()) else {
            return Ok(None);
        };
        if all
            .iter()
            .any(|f| &f.id != id && f.user == user && f.item.item_id == item.item_id)
        {
            return Err(RepoError::Duplicate("favourite_user_item_unique".into()));
        }
        Ok(all.iter_mut().find(|f| &f.id == id).map(|f| {
            f.item = item;
            f.clone()
        }))
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let mut all = self.favourites.lock();
        let before = all.len();
        all.retain(|f| &f.id != id);
        Ok(all.len() != before)
    }
}

// ========== Users ==========

#[derive(Clone, Default)]
pub struct MemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>> {
        Ok(self.users.lock().iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.lock().iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> RepoResult<User> {
        let mut users = self.users.lock();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Duplicate(user.email));
        }
        let user = User {
            id: next_id("user"),
            name: user.name,
            email: user.email,
            password: user.password_hash,
            birthday: user.birthday,
            admin: user.admin,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &RecordId, changes: UserChanges) -> RepoResult<Option<User>> {
        let mut users = self.users.lock();
        Ok(users.iter_mut().find(|u| &u.id == id).map(|u| {
            if let Some(name) = changes.name {
                u.name = name;
            }
            if let Some(email) = changes.email {
                u.email = email;
            }
            if let Some(hash) = changes.password_hash {
                u.password = hash;
            }
            if changes.birthday.is_some() {
                u.birthday = changes.birthday;
            }
            u.clone()
        }))
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let mut users = self.users.lock();
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok(users.len() != before)
    }
}

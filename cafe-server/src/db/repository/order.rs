//! Order Repository

use async_trait::async_trait;
use shared::models::OrderStatus;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, OrderStore, RepoError, RepoResult};
use crate::db::models::{NewOrder, Order};

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, order: NewOrder) -> RepoResult<Order> {
        let created: Vec<Order> = self
            .base
            .db()
            .query(
                "CREATE order SET user = $user, guestUser = $guest, items = $items, \
                 totalPrice = $total, status = $status, createdAt = $created",
            )
            .bind(("user", order.user))
            .bind(("guest", order.guest_user))
            .bind(("items", order.items))
            .bind(("total", order.total_price))
            .bind(("status", order.status))
            .bind(("created", order.created_at))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(id.clone()).await?;
        Ok(order)
    }

    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    async fn find_by_user(&self, user: &RecordId) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user = $user ORDER BY createdAt DESC")
            .bind(("user", user.clone()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    async fn find_by_status(&self, status: OrderStatus) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE status = $status ORDER BY createdAt DESC")
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// 厨房队列：未完成且未取消，先下单先处理
    async fn find_active(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE status NOT IN [$completed, $cancelled] \
                 ORDER BY createdAt ASC",
            )
            .bind(("completed", OrderStatus::Completed))
            .bind(("cancelled", OrderStatus::Cancelled))
            .await?
            .take(0)?;
        Ok(orders)
    }

    async fn set_status(&self, id: &RecordId, status: OrderStatus) -> RepoResult<Option<Order>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let updated: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn delete(&self, id: &RecordId) -> RepoResult<bool> {
        let deleted: Vec<Order> = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", id.clone()))
            .await?
            .take(0)?;
        Ok(!deleted.is_empty())
    }
}

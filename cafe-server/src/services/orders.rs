//! Order Service
//!
//! 下单流程:
//! 1. 身份: `userId` 优先，其次 `guestUser`，都没有则 `IdentityRequired`
//! 2. 按请求顺序逐行解析菜品，任一失败整单放弃 (不落库)
//! 3. 快照名称 / 分类 / 单价，Decimal 计算行小计与总价
//! 4. 状态 `pending` 落库
//!
//! 状态流转不限制方向，五个状态之间可任意切换 (店员纠错)。

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderCreateRequest, OrderLineRequest, OrderStatus};
use shared::util::now_millis;
use surrealdb::RecordId;

use crate::db::models::{NewOrder, Order, OrderLineItem};
use crate::db::repository::{CatalogLookup, OrderStore};
use crate::utils::ids::{self, parse_id};
use crate::utils::money;
use crate::utils::validation::{MAX_NAME_LEN, validate_quantity, validate_required_text};

pub struct OrderService<L, S> {
    catalog: L,
    orders: S,
}

impl<L, S> OrderService<L, S>
where
    L: CatalogLookup,
    S: OrderStore,
{
    pub fn new(catalog: L, orders: S) -> Self {
        Self { catalog, orders }
    }

    pub async fn create_order(&self, req: OrderCreateRequest) -> AppResult<Order> {
        let (user, guest_user) = match (req.user_id, req.guest_user) {
            (Some(user_id), _) => (Some(parse_id(ids::USER, &user_id)?), None),
            (None, Some(guest)) => {
                validate_required_text(&guest.name, "guestUser.name", MAX_NAME_LEN)?;
                (None, Some(guest))
            }
            (None, None) => return Err(AppError::new(ErrorCode::IdentityRequired)),
        };

        if req.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }

        // 先校验整单形状，再访问目录
        let mut requested = Vec::with_capacity(req.items.len());
        for line in req.items {
            validate_quantity(line.quantity)?;
            let item_id = parse_id(ids::ITEM, &line.item_id)?;
            requested.push((item_id, line));
        }

        let mut lines = Vec::with_capacity(requested.len());
        let mut totals = Vec::with_capacity(requested.len());
        for (item_id, line) in requested {
            let (snapshot, total) = self.price_line(item_id, line).await?;
            lines.push(snapshot);
            totals.push(total);
        }
        let total_price = money::to_f64(money::sum(totals));

        let order = self
            .orders
            .insert(NewOrder {
                user,
                guest_user,
                items: lines,
                total_price,
                status: OrderStatus::Pending,
                created_at: now_millis(),
            })
            .await?;

        tracing::info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = order.total_price,
            guest = order.guest_user.is_some(),
            "Order placed"
        );
        Ok(order)
    }

    /// 解析单行并生成快照
    async fn price_line(
        &self,
        item_id: RecordId,
        line: OrderLineRequest,
    ) -> AppResult<(OrderLineItem, Decimal)> {
        let entry = self.catalog.resolve_item(&item_id).await?.ok_or_else(|| {
            AppError::new(ErrorCode::ItemNotFound).with_detail("itemId", line.item_id.as_str())
        })?;

        let total = money::line_total(entry.price, line.quantity);
        let snapshot = OrderLineItem {
            item_id: entry.id,
            name: entry.name,
            category: entry.category_name.unwrap_or_default(),
            quantity: line.quantity,
            unit_price: entry.price,
            line_total: money::to_f64(total),
            customisations: line.customisations,
        };
        Ok((snapshot, total))
    }

    /// 任意状态之间均可切换；未知状态返回 `InvalidStatus`
    pub async fn update_status(&self, id: &RecordId, status: &str) -> AppResult<OrderStatus> {
        let status: OrderStatus = status.parse()?;
        let order = self
            .orders
            .set_status(id, status)
            .await?
            .ok_or_else(|| order_not_found(id))?;
        tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
        Ok(order.status)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_all().await?)
    }

    pub async fn list_by_user(&self, user: &RecordId) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_by_user(user).await?)
    }

    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<Order>> {
        let status: OrderStatus = status.parse()?;
        Ok(self.orders.find_by_status(status).await?)
    }

    /// 厨房队列，最早的订单在前
    pub async fn list_active(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.find_active().await?)
    }

    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.orders.delete(id).await? {
            return Err(order_not_found(id));
        }
        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}

fn order_not_found(id: &RecordId) -> AppError {
    AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{MemoryCatalog, MemoryOrders, rid};
    use shared::models::{Customisations, GuestUser};

    fn line(item: &RecordId, quantity: i64) -> OrderLineRequest {
        OrderLineRequest {
            item_id: item.to_string(),
            quantity,
            customisations: None,
        }
    }

    fn for_user(items: Vec<OrderLineRequest>) -> OrderCreateRequest {
        OrderCreateRequest {
            user_id: Some("user:esther".into()),
            guest_user: None,
            items,
        }
    }

    fn setup() -> (MemoryCatalog, MemoryOrders, OrderService<MemoryCatalog, MemoryOrders>) {
        let catalog = MemoryCatalog::default();
        let orders = MemoryOrders::default();
        let svc = OrderService::new(catalog.clone(), orders.clone());
        (catalog, orders, svc)
    }

    #[tokio::test]
    async fn total_is_computed_server_side() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        let order = svc.create_order(for_user(vec![line(&latte, 2)])).await.unwrap();
        assert_eq!(order.total_price, 11.98);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user, Some(rid("user", "esther")));
        assert_eq!(order.items[0].line_total, 11.98);
        assert_eq!(order.items[0].category, "coffee");
    }

    #[tokio::test]
    async fn mixed_order_sums_exactly() {
        let (catalog, _, svc) = setup();
        let a = catalog.seed_item("coffee", "Flat White", 4.75);
        let b = catalog.seed_item("tea", "Chai", 5.33);
        let c = catalog.seed_item("food", "Bagel", 0.1);

        let order = svc
            .create_order(for_user(vec![line(&a, 3), line(&b, 1), line(&c, 7)]))
            .await
            .unwrap();
        // 14.25 + 5.33 + 0.70
        assert_eq!(order.total_price, 20.28);
    }

    #[tokio::test]
    async fn unknown_item_persists_nothing() {
        let (catalog, orders, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        let err = svc
            .create_order(for_user(vec![
                line(&latte, 1),
                line(&rid("item", "ghost"), 1),
                line(&rid("item", "phantom"), 1),
            ]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        // 按请求顺序报告第一个失败
        assert_eq!(err.details.unwrap()["itemId"], "item:ghost");
        assert_eq!(orders.len(), 0);
    }

    #[tokio::test]
    async fn identity_is_required() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        let err = svc
            .create_order(OrderCreateRequest {
                user_id: None,
                guest_user: None,
                items: vec![line(&latte, 1)],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IdentityRequired);
    }

    #[tokio::test]
    async fn user_id_wins_over_guest() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        let order = svc
            .create_order(OrderCreateRequest {
                user_id: Some("user:esther".into()),
                guest_user: Some(GuestUser {
                    name: "Walk-in".into(),
                    email: None,
                    phone: None,
                }),
                items: vec![line(&latte, 1)],
            })
            .await
            .unwrap();
        assert!(order.user.is_some());
        assert!(order.guest_user.is_none());
    }

    #[tokio::test]
    async fn guest_order_keeps_customisations() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);
        let custom = Customisations {
            size: Some("large".into()),
            milk: Some("oat".into()),
            sugar: None,
        };

        let order = svc
            .create_order(OrderCreateRequest {
                user_id: None,
                guest_user: Some(GuestUser {
                    name: "Walk-in".into(),
                    email: Some("walkin@email.com".into()),
                    phone: None,
                }),
                items: vec![OrderLineRequest {
                    item_id: latte.to_string(),
                    quantity: 1,
                    customisations: Some(custom.clone()),
                }],
            })
            .await
            .unwrap();
        assert!(order.user.is_none());
        assert_eq!(order.items[0].customisations, Some(custom));
    }

    #[tokio::test]
    async fn rejects_empty_orders_and_bad_quantities() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        let err = svc.create_order(for_user(vec![])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);

        let err = svc
            .create_order(for_user(vec![line(&latte, 0)]))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }

    #[tokio::test]
    async fn snapshot_ignores_later_price_changes() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);
        let order = svc.create_order(for_user(vec![line(&latte, 1)])).await.unwrap();

        catalog.set_price(&latte, 7.5);
        let stored = svc.list_by_user(&rid("user", "esther")).await.unwrap();
        assert_eq!(stored[0].id, order.id);
        assert_eq!(stored[0].items[0].unit_price, 5.99);
    }

    #[tokio::test]
    async fn invalid_status_leaves_order_untouched() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);
        let order = svc.create_order(for_user(vec![line(&latte, 1)])).await.unwrap();

        let err = svc.update_status(&order.id, "shipped").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
        let all = svc.list_all().await.unwrap();
        assert_eq!(all[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn terminal_states_can_be_left() {
        let (catalog, _, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);
        let order = svc.create_order(for_user(vec![line(&latte, 1)])).await.unwrap();

        assert_eq!(
            svc.update_status(&order.id, "completed").await.unwrap(),
            OrderStatus::Completed
        );
        assert_eq!(
            svc.update_status(&order.id, "preparing").await.unwrap(),
            OrderStatus::Preparing
        );

        let err = svc
            .update_status(&rid("order", "ghost"), "ready")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn active_listing_is_oldest_first() {
        let (catalog, orders, svc) = setup();
        let latte = catalog.seed_item("coffee", "Latte", 5.99);

        for (created_at, status) in [
            (3, OrderStatus::Pending),
            (1, OrderStatus::Ready),
            (2, OrderStatus::Completed),
            (4, OrderStatus::Cancelled),
            (5, OrderStatus::Preparing),
        ] {
            orders
                .insert(NewOrder {
                    user: Some(rid("user", "esther")),
                    guest_user: None,
                    items: vec![OrderLineItem {
                        item_id: latte.clone(),
                        name: "Latte".into(),
                        category: "coffee".into(),
                        quantity: 1,
                        unit_price: 5.99,
                        line_total: 5.99,
                        customisations: None,
                    }],
                    total_price: 5.99,
                    status,
                    created_at,
                })
                .await
                .unwrap();
        }

        let active: Vec<i64> = svc
            .list_active()
            .await
            .unwrap()
            .iter()
            .map(|o| o.created_at)
            .collect();
        assert_eq!(active, vec![1, 3, 5]);

        let all: Vec<i64> = svc
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|o| o.created_at)
            .collect();
        assert_eq!(all, vec![5, 4, 3, 2, 1]);

        let err = svc.list_by_status("shipped").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
        assert_eq!(svc.list_by_status("completed").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let (_, _, svc) = setup();
        let err = svc.delete(&rid("order", "ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }
}

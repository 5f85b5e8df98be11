//! 演示数据
//!
//! 清空五张表后写入：4 个用户 (含管理员 `3bc@email.com`)、4 个分类、
//! 25 个菜品、2 个已完成订单和 2 个收藏。所有账户密码均为 `12345`。

use chrono::NaiveDate;
use shared::error::{AppError, AppResult};
use shared::models::{CategoryCreate, ItemCreate, OrderCreateRequest, OrderLineRequest};
use surrealdb::RecordId;

use crate::auth::password::hash_password;
use crate::core::ServerState;
use crate::db::clear_tables;
use crate::db::models::{Item, NewUser, User};
use crate::db::repository::{UserRepository, UserStore};

const DEFAULT_PASSWORD: &str = "12345";

/// (name, category, price, description)
#[rustfmt::skip]
const MENU: &[(&str, &str, f64, Option<&str>)] = &[
    ("Cappuccino", "coffee", 5.99, Some("A shot of espresso with equal parts steamed milk and froth.")),
    ("Latte", "coffee", 5.99, Some("A shot of espresso with steamed milk and light froth.")),
    ("Flat White", "coffee", 5.99, Some("A shot of espresso with less milk and very light froth.")),
    ("Long Black", "coffee", 5.99, Some("A double shot of espresso served with hot water.")),
    ("Espresso", "coffee", 3.99, Some("Strong and hot shot of espresso.")),
    ("English Breakfast", "tea", 4.99, Some("A full bodied black tea served with milk and sugar.")),
    ("Green Tea", "tea", 4.99, Some("Refreshing green tea served with hot water.")),
    ("Earl Grey Tea", "tea", 4.99, Some("Black tea flavoured with bergamot served with hot water or milk.")),
    ("Chai Latte", "tea", 5.99, Some("Black tea served with milk and spiced with cinnamon, cardamom, cloves, peppercorns and star anise.")),
    ("Chocolate Milkshake", "milkshake", 7.99, None),
    ("Strawberry Milkshake", "milkshake", 7.99, None),
    ("Vanilla Milkshake", "milkshake", 7.99, None),
    ("Caramel Milkshake", "milkshake", 7.99, None),
    ("Brekkie Roll", "food", 11.99, Some("Fresh baked brioche roll with fried egg, bacon and a hashbrown.")),
    ("Ham & Cheese Toastie", "food", 7.99, Some("Ham and cheese served in a thick toasted white bread sandwich.")),
    ("Reuben", "food", 8.99, Some("Toasted rye bread with corned beef, swiss cheese, sauerkraut and thousand island dressing.")),
    ("Ham & Cheese Croissant", "food", 7.99, Some("Toasted croissant with ham and melted cheese inside.")),
    ("Croissant", "food", 5.99, None),
    ("Almond Croissant", "food", 7.99, Some("Fresh baked croissant with a sweet almond filling topped with almonds.")),
    ("Blueberry Muffin", "food", 6.99, None),
    ("Choc-Chip Muffin", "food", 6.99, None),
    ("Banana Bread", "food", 6.99, None),
    ("Brownie", "food", 6.99, None),
    ("Lemon Slice", "food", 6.99, None),
    ("Carrot Cake", "food", 6.99, None),
];

const CATEGORIES: &[&str] = &["coffee", "tea", "milkshake", "food"];

/// Seed summary: one bearer token per seeded user
#[derive(Debug)]
pub struct SeedReport {
    pub tokens: Vec<(String, String)>,
    pub items: usize,
    pub orders: usize,
    pub favourites: usize,
}

pub async fn seed(state: &ServerState) -> AppResult<SeedReport> {
    clear_tables(&state.db).await?;
    tracing::info!("Database cleared");

    let users = seed_users(state).await?;
    tracing::info!(count = users.len(), "Users seeded");

    let catalog = state.catalog();
    for name in CATEGORIES {
        catalog
            .create_category(CategoryCreate {
                name: name.to_string(),
            })
            .await?;
    }

    let mut items: Vec<Item> = Vec::with_capacity(MENU.len());
    for (name, category, price, description) in MENU {
        let item = catalog
            .create_item(ItemCreate {
                name: name.to_string(),
                category: category.to_string(),
                price: *price,
                available: Some(true),
                description: description.map(str::to_string),
                image: None,
            })
            .await?;
        items.push(item);
    }
    tracing::info!(count = items.len(), "Menu seeded");

    let esther = &users[1].id;
    let nicholas = &users[2].id;

    // 两个已完成的订单
    let orders = state.orders();
    let samples = [
        (esther, vec![(&items[0].id, 2)]),
        (
            nicholas,
            vec![(&items[1].id, 1), (&items[0].id, 1), (&items[4].id, 2)],
        ),
    ];
    for (user, lines) in &samples {
        let order = orders
            .create_order(order_request(user, lines))
            .await?;
        orders.update_status(&order.id, "completed").await?;
    }

    let favourites = state.favourites();
    favourites.add(esther.clone(), &items[1].id, None).await?;
    favourites.add(nicholas.clone(), &items[9].id, None).await?;

    let jwt = state.get_jwt_service();
    let mut tokens = Vec::with_capacity(users.len());
    for user in &users {
        let token = jwt
            .generate_token(&user.id.to_string(), user.admin)
            .map_err(|e| AppError::internal(e.to_string()))?;
        tokens.push((user.name.clone(), token));
    }

    Ok(SeedReport {
        tokens,
        items: items.len(),
        orders: samples.len(),
        favourites: 2,
    })
}

async fn seed_users(state: &ServerState) -> AppResult<Vec<User>> {
    let repo = UserRepository::new(state.get_db());
    let accounts = [
        ("3BeansCafe", "3bc@email.com", None, true),
        ("Esther", "esther@email.com", None, false),
        ("Nicholas", "nicholas@email.com", None, false),
        ("Brett", "brett@email.com", NaiveDate::from_ymd_opt(1996, 7, 6), false),
    ];

    let mut users = Vec::with_capacity(accounts.len());
    for (name, email, birthday, admin) in accounts {
        let password_hash = hash_password(DEFAULT_PASSWORD)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        let user = repo
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                birthday,
                admin,
            })
            .await?;
        users.push(user);
    }
    Ok(users)
}

fn order_request(user: &RecordId, lines: &[(&RecordId, i64)]) -> OrderCreateRequest {
    OrderCreateRequest {
        user_id: Some(user.to_string()),
        guest_user: None,
        items: lines
            .iter()
            .map(|(item, quantity)| OrderLineRequest {
                item_id: item.to_string(),
                quantity: *quantity,
                customisations: None,
            })
            .collect(),
    }
}

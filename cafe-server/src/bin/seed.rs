//! 写入演示数据: `cargo run --bin seed`

use cafe_server::services::seed::seed;
use cafe_server::{ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = setup_environment()?;
    tracing::info!(work_dir = %config.work_dir, "Seeding database...");

    let state = ServerState::initialize(&config).await?;
    let report = seed(&state).await?;

    for (name, token) in &report.tokens {
        tracing::info!(user = %name, token = %token, "Issued token");
    }
    tracing::info!(
        users = report.tokens.len(),
        items = report.items,
        orders = report.orders,
        favourites = report.favourites,
        "Data seeded successfully!"
    );
    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod catalog;
mod models;
mod services;
mod utils;

use api::binance::BinanceClient;
use api::thermos::ThermosClient;

const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("giftboard=debug".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting giftboard...");
    info!("  symbol:   {}", services::market_service::SYMBOL);
    info!("  output:   {}", services::dashboard_service::OUTPUT_PATH);
    info!("  interval: {}s", REFRESH_INTERVAL.as_secs());

    let binance = BinanceClient::new();
    let thermos = Arc::new(ThermosClient::new());

    // First tick fires immediately, then every 60 seconds. A cycle that
    // fails (market fetch down, sink unwritable) is logged and dropped;
    // the next tick starts fresh.
    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    loop {
        interval.tick().await;
        if let Err(e) = services::dashboard_service::refresh(&binance, &thermos).await {
            error!("Refresh cycle failed: {}", e);
        }
    }
}

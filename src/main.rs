use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::binance::BinanceClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("btc_tracker=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting 🪙 Bitcoin Tracker with Binance API...");
    info!(
        "Connecting to {} for pair {}",
        config::SETTINGS.base_url,
        config::SETTINGS.symbol
    );

    let client = match BinanceClient::new() {
        Ok(client) => client,
        Err(e) => {
            error!("HTTP client unavailable: {}", e);
            eprintln!("Error: could not initialize the HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    commands::run(&client).await;
    ExitCode::SUCCESS
}

use std::time::Duration;

use chrono::Local;
use tracing::warn;

use crate::api::binance::BinanceClient;
use crate::services::price_service;
use crate::utils::format_usd;

/// Option 4: re-fetch the spot price and show it with a timestamp
pub async fn execute(client: &BinanceClient) -> Result<(), String> {
    println!("\nUpdating price from Binance 🪙...");

    match price_service::get_current_price(client).await {
        Ok(price) => {
            println!("✅ New price: {}", format_usd(price));
            println!("🕐 {}", Local::now().format("%H:%M:%S"));
        }
        Err(e) => {
            warn!("Price refresh failed: {}", e);
            println!("❌ Could not update price");
        }
    }

    // Leave the result on screen briefly before the menu redraws
    tokio::time::sleep(Duration::from_secs(2)).await;
    Ok(())
}

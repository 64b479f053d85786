use chrono::Local;
use tracing::warn;

use super::analysis_24h::render_series_stats;
use super::{BTC, RESET};
use crate::api::binance::BinanceClient;
use crate::services::{history_service, price_service};
use crate::utils::format_usd;

/// Option 2: statistics over the last five days plus a per-day summary
pub async fn execute(client: &BinanceClient) -> Result<(), String> {
    println!("\n{}", "=".repeat(60));
    println!("{}🪙 BITCOIN PRICE - LAST 5 DAYS 🪙{}", BTC, RESET);
    println!("{}", "=".repeat(60));

    let points = match history_service::get_historical_prices(client, 5).await {
        Ok(points) => points,
        Err(e) => {
            warn!("5-day history unavailable: {}", e);
            println!("Could not get data from Binance.");
            if let Ok(price) = price_service::get_current_price(client).await {
                println!("\n💰 Current price: {}", format_usd(price));
                println!("{}", "=".repeat(60));
                return Ok(());
            }
            println!("{}", "=".repeat(60));
            return Err("Bitcoin data is currently unavailable".to_string());
        }
    };

    render_series_stats(&points, "5-Day");

    println!("\n📅 DAILY SUMMARY:");
    println!("{}", "-".repeat(50));

    if points.len() >= 5 {
        for (day, average) in history_service::daily_averages(&points, 5) {
            println!("{}: {} (average)", day, format_usd(average));
        }
    } else {
        // Too few points to bucket by day: print a sampled selection instead
        let step = (points.len() / 5).max(1);
        for point in points.iter().step_by(step) {
            let label = point.timestamp.with_timezone(&Local).format("%d/%m %H:%M");
            println!("{}: {}", label, format_usd(point.price));
        }
    }

    println!("{}", "=".repeat(60));
    Ok(())
}

use chrono::Local;
use tracing::warn;

use super::{BTC, RESET};
use crate::api::binance::BinanceClient;
use crate::models::{PricePoint, TickerSnapshot};
use crate::services::{history_service, price_service};
use crate::utils::{format_signed_usd, format_usd, thousands};

/// Option 1: 24-hour statistics plus a one-day ASCII chart.
///
/// Falls back to a history-derived screen when the detailed ticker is not
/// available, and to the bare spot price when even history fails.
pub async fn execute(client: &BinanceClient) -> Result<(), String> {
    println!("\n{}", "=".repeat(60));
    println!("{} BITCOIN PRICE 🪙 - LAST 24 HOURS {}", BTC, RESET);
    println!("{}", "=".repeat(60));

    match price_service::get_ticker_snapshot(client).await {
        Ok(snapshot) => {
            render_snapshot(&snapshot);
            render_chart(client).await;
        }
        Err(e) => {
            warn!("24h ticker unavailable: {}", e);
            println!("Could not get detailed data from Binance.");
            show_basic(client).await?;
        }
    }

    println!("{}", "=".repeat(60));
    Ok(())
}

fn render_snapshot(snapshot: &TickerSnapshot) {
    println!("\n💰 Current price: {}", format_usd(snapshot.last_price));
    println!("📈 24h High: {}", format_usd(snapshot.high_price));
    println!("📉 24h Low: {}", format_usd(snapshot.low_price));
    println!(
        "📊 24h Change: {} ({:+.2}%)",
        format_signed_usd(snapshot.variation()),
        snapshot.variation_percentage()
    );
    println!("📈 24h Volume: {} BTC", thousands(snapshot.volume, 2));
    println!("Trend: {}", snapshot.trend().label());
}

/// Scale the last day of close prices into text bars
async fn render_chart(client: &BinanceClient) {
    let points = match history_service::get_historical_prices(client, 1).await {
        Ok(points) => points,
        Err(e) => {
            warn!("No chart data: {}", e);
            return;
        }
    };

    println!("\n📊 SIMPLE CHART (ASCII):");
    println!("{}", "-".repeat(50));

    let Some((min, max)) = history_service::high_low(&points) else {
        println!("Insufficient data to display chart");
        return;
    };
    if points.len() < 2 || history_service::bar_height(min, min, max).is_none() {
        println!("Insufficient data to display chart");
        return;
    }

    let step = history_service::chart_step(points.len());
    for point in points.iter().step_by(step) {
        // height is Some here: the range was checked above
        let height = history_service::bar_height(point.price, min, max).unwrap_or(0);
        let label = point.timestamp.with_timezone(&Local).format("%H:%M");
        let bar = "█".repeat(height + 1);
        println!("{} {}: {} {} {}", BTC, label, bar, format_usd(point.price), RESET);
    }
}

/// Backup screen when the ticker query fails: derive the 24h figures from the
/// one-day historical series, with the first point as the baseline.
async fn show_basic(client: &BinanceClient) -> Result<(), String> {
    let points = match history_service::get_historical_prices(client, 1).await {
        Ok(points) => points,
        Err(e) => {
            warn!("Basic 24h fallback has no history: {}", e);
            println!("Could not get historical data.");
            let price = price_service::get_current_price(client)
                .await
                .map_err(|_| "Bitcoin data is currently unavailable".to_string())?;
            println!("\n{} 💰 Current price: {}{}", BTC, format_usd(price), RESET);
            return Ok(());
        }
    };

    render_series_stats(&points, "24h");
    Ok(())
}

/// Current/high/low/change lines for a historical series
pub(super) fn render_series_stats(points: &[PricePoint], window: &str) {
    let current = points.last().map(|p| p.price).unwrap_or(0.0);
    let initial = points.first().map(|p| p.price).unwrap_or(0.0);
    let (min, max) = history_service::high_low(points).unwrap_or((0.0, 0.0));
    let (variation, percentage) = price_service::price_change(initial, current);

    println!("\n{}💰 Current price: {} {}", BTC, format_usd(current), RESET);
    println!("📈 {} High: {}", window, format_usd(max));
    println!("📉 {} Low: {}", window, format_usd(min));
    println!(
        "📊 {} Change: {} ({:+.2}%)",
        window,
        format_signed_usd(variation),
        percentage
    );
}

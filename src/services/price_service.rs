use tracing::{debug, warn};

use crate::api::binance::models::Ticker24hResponse;
use crate::api::binance::BinanceClient;
use crate::models::TickerSnapshot;

/// Get the current spot price in USD.
///
/// On a network failure the 24h ticker serves as a one-shot fallback source:
/// its last price, or the bid/ask midpoint when the last price is absent.
/// Parse failures do not trigger the fallback.
pub async fn get_current_price(client: &BinanceClient) -> Result<f64, String> {
    match client.spot_price().await {
        Ok(price) => {
            debug!("Spot price for {}: {}", client.symbol(), price);
            Ok(price)
        }
        Err(e) if e.is_network() => {
            warn!("Spot price query failed ({}), trying 24h ticker fallback", e);
            get_fallback_price(client).await
        }
        Err(e) => Err(format!("Error processing price data: {}", e)),
    }
}

/// Derive a price from the 24h ticker when the spot endpoint is unreachable
async fn get_fallback_price(client: &BinanceClient) -> Result<f64, String> {
    let ticker = client
        .ticker_24h()
        .await
        .map_err(|e| format!("Connection error to Binance: {}", e))?;

    if let Ok(last) = Ticker24hResponse::decimal_field(&ticker.last_price, "lastPrice") {
        return Ok(last);
    }

    // Average between bid and ask
    let bid = Ticker24hResponse::decimal_field(&ticker.bid_price, "bidPrice");
    let ask = Ticker24hResponse::decimal_field(&ticker.ask_price, "askPrice");
    match (bid, ask) {
        (Ok(bid), Ok(ask)) => Ok((bid + ask) / 2.0),
        _ => Err("Ticker response carried no usable price".to_string()),
    }
}

/// Get the full 24-hour statistics snapshot.
///
/// Any missing or malformed field collapses the whole snapshot to an error;
/// there are no partial snapshots.
pub async fn get_ticker_snapshot(client: &BinanceClient) -> Result<TickerSnapshot, String> {
    let ticker = client
        .ticker_24h()
        .await
        .map_err(|e| format!("Could not get detailed data from Binance: {}", e))?;

    let snapshot = TickerSnapshot {
        last_price: Ticker24hResponse::decimal_field(&ticker.last_price, "lastPrice")
            .map_err(|e| e.to_string())?,
        open_price: Ticker24hResponse::decimal_field(&ticker.open_price, "openPrice")
            .map_err(|e| e.to_string())?,
        high_price: Ticker24hResponse::decimal_field(&ticker.high_price, "highPrice")
            .map_err(|e| e.to_string())?,
        low_price: Ticker24hResponse::decimal_field(&ticker.low_price, "lowPrice")
            .map_err(|e| e.to_string())?,
        volume: Ticker24hResponse::decimal_field(&ticker.volume, "volume")
            .map_err(|e| e.to_string())?,
    };
    Ok(snapshot)
}

/// Absolute and percentage change from a baseline price.
/// Percentage is 0 when the baseline is 0.
pub fn price_change(baseline: f64, current: f64) -> (f64, f64) {
    let variation = current - baseline;
    let percentage = if baseline == 0.0 {
        0.0
    } else {
        variation / baseline * 100.0
    };
    (variation, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_change() {
        let (variation, percentage) = price_change(64_000.0, 65_600.0);
        assert_eq!(variation, 1600.0);
        assert!((percentage - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_price_change_negative() {
        let (variation, percentage) = price_change(50_000.0, 45_000.0);
        assert_eq!(variation, -5000.0);
        assert!((percentage - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_change_zero_baseline() {
        let (variation, percentage) = price_change(0.0, 45_000.0);
        assert_eq!(variation, 45_000.0);
        assert_eq!(percentage, 0.0);
    }
}

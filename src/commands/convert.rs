use tracing::{info, warn};

use super::{pause, read_line, BTC, RESET};
use crate::api::binance::BinanceClient;
use crate::services::price_service;
use crate::utils::{format_usd, thousands};

/// Reference price offered when no live price can be obtained
const REFERENCE_PRICE: f64 = 50_000.0;

/// Option 3: convert a user-entered BTC amount to USD.
///
/// Works through a live price when one is available, otherwise offers the
/// fixed reference price or a manually entered one.
pub async fn execute(client: &BinanceClient) -> Result<(), String> {
    println!("\n{}", "=".repeat(50));
    println!("{}🪙 BITCOIN TO USD CONVERTER (Binance) 🪙{}", BTC, RESET);
    println!("{}", "=".repeat(50));

    let price_btc = match price_service::get_current_price(client).await {
        Ok(price) => {
            println!(
                "\n{} ✅ Current price: 1 BTC = {} {}",
                BTC,
                format_usd(price),
                RESET
            );
            println!("   Source: Binance API");
            price
        }
        Err(e) => {
            warn!("Converter has no live price: {}", e);
            println!("⚠ Could not get current price from Binance.");
            println!("   Service may be temporarily unavailable.");
            prompt_fallback_price()
        }
    };

    let amount_btc = loop {
        let input = read_line(&format!("\n{} Enter amount of Bitcoin: {}", BTC, RESET));
        match parse_amount(&input) {
            Ok(amount) => break amount,
            Err(e) => println!("{}", e),
        }
    };

    let result = amount_btc * price_btc;
    info!(
        "Converted {} BTC at {} into {}",
        amount_btc,
        format_usd(price_btc),
        format_usd(result)
    );

    println!("\n{}", "=".repeat(50));
    println!("RESULT:");
    println!("{}", "=".repeat(50));
    println!("{}📊 Bitcoin amount: {:.8} BTC {}", BTC, amount_btc, RESET);
    println!(
        "{}💰 Current price: {} USD/BTC {}",
        BTC,
        format_usd(price_btc),
        RESET
    );
    println!("{}💵 Total value: {} USD {}", BTC, format_usd(result), RESET);
    println!("{}", "=".repeat(50));

    pause();
    Ok(())
}

/// Offer the reference price, then a manual entry path
fn prompt_fallback_price() -> f64 {
    let use_default = read_line(&format!(
        "\nUse reference price of ${}? (y/n): ",
        thousands(REFERENCE_PRICE, 0)
    ));
    if use_default.eq_ignore_ascii_case("y") {
        println!("\nUsing reference price: {}", format_usd(REFERENCE_PRICE));
        return REFERENCE_PRICE;
    }

    let manual = read_line("\nEnter price manually: $");
    match parse_manual_price(&manual) {
        Some(price) => price,
        None => {
            println!(
                "Invalid price. Using {} as default.",
                format_usd(REFERENCE_PRICE)
            );
            REFERENCE_PRICE
        }
    }
}

/// Validate a typed BTC amount: finite, numeric and strictly positive
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let amount = input
        .trim()
        .parse::<f64>()
        .map_err(|_| "Error: Enter a valid number".to_string())?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Error: Amount must be greater than 0".to_string());
    }
    Ok(amount)
}

/// Validate a manually entered price; any positive finite decimal is accepted
pub fn parse_manual_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount("0.5").unwrap(), 0.5);
        assert_eq!(parse_amount("  2 ").unwrap(), 2.0);
        assert_eq!(parse_amount("0.00000001").unwrap(), 0.00000001);
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-1.5").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_manual_price() {
        assert_eq!(parse_manual_price("64000.50"), Some(64000.50));
        assert_eq!(parse_manual_price("garbage"), None);
        assert_eq!(parse_manual_price("-1"), None);
        assert_eq!(parse_manual_price("0"), None);
    }

    #[test]
    fn test_conversion_keeps_full_precision() {
        let price = 65_000.12345678;
        let amount = parse_amount("0.5").unwrap();
        let result = amount * price;
        assert!((result - 32_500.06172839).abs() < 1e-8);
    }
}

pub mod analysis_24h;
pub mod analysis_5d;
pub mod convert;
pub mod refresh;

use std::io::Write;
use std::time::Duration;

use chrono::Local;
use tracing::{info, warn};

use crate::api::binance::BinanceClient;
use crate::services::price_service;
use crate::utils::format_usd;

/// Bitcoin orange for terminal output
pub const BTC: &str = "\x1b[38;5;208m";
pub const RESET: &str = "\x1b[0m";

/// Print a prompt and read one trimmed line from stdin
pub fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Block until the user presses Enter
pub fn pause() {
    read_line("\nPress Enter to continue...");
}

/// Main menu loop. Each iteration clears the screen, shows the live price and
/// dispatches one of the five actions; no state carries across iterations.
pub async fn run(client: &BinanceClient) {
    loop {
        // Clear screen
        print!("\x1bc");

        println!("{}", "=".repeat(60));
        println!("{}      🪙 BITCOIN TRACKER & CONVERTER 🪙{}", BTC, RESET);
        println!("{}", "=".repeat(60));
        println!("Data source: Binance.com");
        println!("Pair: {}", client.symbol());
        println!("{}", "=".repeat(60));

        match price_service::get_current_price(client).await {
            Ok(price) => {
                println!(
                    "\n{}💰 Current Bitcoin price: {} USD{}",
                    BTC,
                    format_usd(price),
                    RESET
                );
                println!("   📅 Last update: {}", Local::now().format("%H:%M:%S"));
            }
            Err(e) => {
                warn!("Header price unavailable: {}", e);
                println!("\n⚠ Could not get current price from Binance");
                println!("   Check your internet connection or try again later");
            }
        }

        println!("\nMAIN MENU:");
        println!("1. 📊 Price and 24-hour analysis");
        println!("2. 📈 5-day analysis");
        println!("3. 💱 Bitcoin to USD converter");
        println!("4. 🔄 Update price");
        println!("5. 🚪 Exit");
        println!("\n{}", "=".repeat(60));

        let option = read_line("\nSelect an option (1-5): ");

        let result = match option.as_str() {
            "1" => analysis_24h::execute(client).await,
            "2" => analysis_5d::execute(client).await,
            "3" => convert::execute(client).await,
            "4" => refresh::execute(client).await,
            "5" => {
                println!("\nThank you for using Bitcoin Tracker!");
                println!("Powered by Binance API");
                println!("See you soon! 👋\n");
                info!("Session ended by user");
                return;
            }
            _ => {
                println!("\n❌ Invalid option");
                tokio::time::sleep(Duration::from_secs(1)).await;
                continue;
            }
        };

        if let Err(e) = result {
            warn!("Menu option {} failed: {}", option, e);
            println!("\n❌ {}", e);
            pause();
        } else if matches!(option.as_str(), "1" | "2") {
            // The converter and refresh screens pace themselves
            pause();
        }
    }
}

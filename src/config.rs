//! Process-wide configuration, resolved once from the environment.

use lazy_static::lazy_static;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com/api/v3";
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Fixed session configuration: API base URL and trading pair symbol.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub symbol: String,
}

impl Settings {
    fn from_env() -> Self {
        Settings {
            base_url: std::env::var("BINANCE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            symbol: std::env::var("BINANCE_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string()),
        }
    }
}

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::from_env();
}

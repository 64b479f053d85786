use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::warn;

use super::models::{ApiError, ErrorResponse, SpotPriceResponse, Ticker24hResponse};
use crate::config::SETTINGS;

const SPOT_TIMEOUT: Duration = Duration::from_secs(10);
const KLINES_TIMEOUT: Duration = Duration::from_secs(15);

/// Binance public REST client for the configured trading pair
pub struct BinanceClient {
    http_client: HttpClient,
    base_url: String,
    symbol: String,
}

impl BinanceClient {
    /// Create a client for the pair and base URL from process configuration
    pub fn new() -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            base_url: SETTINGS.base_url.clone(),
            symbol: SETTINGS.symbol.clone(),
        })
    }

    /// Create a client with a custom base URL and symbol (for testing)
    pub fn with_base_url(base_url: String, symbol: String) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            base_url,
            symbol,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        // Binance error bodies look like {"code":-1121,"msg":"Invalid symbol."}
        if let Ok(err_body) = serde_json::from_str::<ErrorResponse>(&body_text) {
            if let Some(msg) = err_body.msg {
                warn!("Binance returned {}: {}", status_code, msg);
                return ApiError::Http(status_code, msg);
            }
        }
        warn!("Binance returned {} with unparseable body", status_code);
        ApiError::Http(status_code, body_text)
    }

    /// GET /ticker/price?symbol={symbol}
    ///
    /// Retrieves the current spot price for the configured pair. No fallback
    /// at this level; the price service layers that on top.
    pub async fn spot_price(&self) -> Result<f64, ApiError> {
        let url = format!("{}/ticker/price", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("symbol", self.symbol.as_str())])
            .timeout(SPOT_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let body = response
            .json::<SpotPriceResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to parse spot price response: {}", e)))?;

        body.price
            .parse::<f64>()
            .map_err(|_| ApiError::Parse(format!("malformed price '{}'", body.price)))
    }

    /// GET /ticker/24hr?symbol={symbol}
    ///
    /// Retrieves 24-hour rolling statistics for the configured pair.
    pub async fn ticker_24h(&self) -> Result<Ticker24hResponse, ApiError> {
        let url = format!("{}/ticker/24hr", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("symbol", self.symbol.as_str())])
            .timeout(SPOT_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Ticker24hResponse>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to parse 24h ticker response: {}", e)))
    }

    /// GET /klines?symbol={symbol}&interval={interval}&startTime=..&endTime=..&limit=..
    ///
    /// Returns the raw candle rows. Each row is a heterogeneous JSON array
    /// `[openTime, open, high, low, close, volume, ...]`, so rows come back
    /// as `serde_json::Value` and the history service maps them to points.
    pub async fn klines(
        &self,
        interval: &str,
        start_time_ms: i64,
        end_time_ms: i64,
        limit: u32,
    ) -> Result<Vec<Value>, ApiError> {
        let url = format!("{}/klines", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("symbol", self.symbol.clone()),
                ("interval", interval.to_string()),
                ("startTime", start_time_ms.to_string()),
                ("endTime", end_time_ms.to_string()),
                ("limit", limit.to_string()),
            ])
            .timeout(KLINES_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to parse klines response: {}", e)))
    }
}

use serde::Deserialize;
use thiserror::Error;

/// Response from GET /ticker/price
#[derive(Debug, Clone, Deserialize)]
pub struct SpotPriceResponse {
    pub symbol: String,
    pub price: String,
}

/// Response from GET /ticker/24hr
///
/// Binance serializes every numeric field as a decimal string. Fields are
/// optional here so the client can distinguish a missing field (Parse error
/// or bid/ask fallback) from a transport failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hResponse {
    pub symbol: String,
    pub last_price: Option<String>,
    pub open_price: Option<String>,
    pub high_price: Option<String>,
    pub low_price: Option<String>,
    pub volume: Option<String>,
    pub bid_price: Option<String>,
    pub ask_price: Option<String>,
}

impl Ticker24hResponse {
    /// Parse a named decimal-string field, collapsing absence and malformed
    /// numbers into the same Parse error.
    pub fn decimal_field(field: &Option<String>, name: &str) -> Result<f64, ApiError> {
        field
            .as_deref()
            .ok_or_else(|| ApiError::Parse(format!("missing field '{}'", name)))?
            .parse::<f64>()
            .map_err(|_| ApiError::Parse(format!("malformed decimal in field '{}'", name)))
    }
}

/// Error body Binance returns on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub code: Option<i64>,
    pub msg: Option<String>,
}

/// Errors surfaced by the Binance REST client
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Connection failure or timeout before a response arrived
    #[error("request failed: {0}")]
    Request(String),
    /// Non-2xx HTTP status
    #[error("HTTP error ({0}): {1}")]
    Http(u16, String),
    /// Missing or malformed field in an otherwise successful response
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Network-class failures (unreachable, timeout, non-2xx). These are the
    /// only failures that trigger the spot-price fallback query.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Request(_) | ApiError::Http(_, _))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_field_parses() {
        let value = Some("65000.12345678".to_string());
        assert_eq!(
            Ticker24hResponse::decimal_field(&value, "lastPrice").unwrap(),
            65000.12345678
        );
    }

    #[test]
    fn test_decimal_field_missing_is_parse_error() {
        let err = Ticker24hResponse::decimal_field(&None, "openPrice").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(!err.is_network());
    }

    #[test]
    fn test_decimal_field_malformed_is_parse_error() {
        let value = Some("not-a-number".to_string());
        let err = Ticker24hResponse::decimal_field(&value, "volume").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_ticker_response_deserializes_camel_case() {
        let body = r#"{
            "symbol": "BTCUSDT",
            "lastPrice": "65000.10",
            "openPrice": "64000.00",
            "highPrice": "65500.00",
            "lowPrice": "63800.00",
            "volume": "12345.67",
            "bidPrice": "64999.99",
            "askPrice": "65000.01"
        }"#;
        let ticker: Ticker24hResponse = serde_json::from_str(body).unwrap();
        assert_eq!(ticker.symbol, "BTCUSDT");
        assert_eq!(ticker.last_price.as_deref(), Some("65000.10"));
        assert_eq!(ticker.ask_price.as_deref(), Some("65000.01"));
    }
}

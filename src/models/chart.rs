//! Historical price models

use chrono::{DateTime, Utc};

/// A single data point from the historical (kline) query: the candle's open
/// time paired with its close price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    /// Build a point from a Binance kline open time (milliseconds since epoch).
    pub fn from_millis(millis: i64, price: f64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|timestamp| PricePoint { timestamp, price })
    }
}

use chrono::{Local, Utc};
use serde_json::Value;
use tracing::debug;

use crate::api::binance::BinanceClient;
use crate::models::PricePoint;

/// Number of character rows the tallest chart bar occupies
pub const CHART_HEIGHT: usize = 20;

/// Target number of rows printed for an ASCII chart
pub const CHART_ROWS: usize = 12;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Kline interval and result cap for a requested day range.
///
/// Finer granularity for short ranges, coarser for long ones, always staying
/// under Binance's 1000-row limit.
pub fn sampling_plan(days: u32) -> (&'static str, u32) {
    if days <= 1 {
        ("15m", 96)
    } else if days <= 7 {
        ("1h", 168)
    } else if days <= 30 {
        ("4h", 180)
    } else {
        ("1d", days.min(1000))
    }
}

/// Map raw kline rows to price points: (open time, close price).
///
/// Rows shorter than 6 elements or with unreadable fields are skipped.
/// Binance serializes prices as decimal strings.
pub fn parse_klines(rows: &[Value]) -> Vec<PricePoint> {
    let mut points = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(candle) = row.as_array() else {
            continue;
        };
        if candle.len() < 6 {
            continue;
        }
        let Some(open_time) = candle[0].as_i64() else {
            continue;
        };
        let Some(close_price) = candle[4].as_str().and_then(|s| s.parse::<f64>().ok()) else {
            continue;
        };
        if let Some(point) = PricePoint::from_millis(open_time, close_price) {
            points.push(point);
        }
    }
    points
}

/// Fetch historical close prices over the last `days` days.
/// An empty or fully malformed response is an error.
pub async fn get_historical_prices(
    client: &BinanceClient,
    days: u32,
) -> Result<Vec<PricePoint>, String> {
    let end_time = Utc::now().timestamp_millis();
    let start_time = end_time - i64::from(days) * MS_PER_DAY;
    let (interval, limit) = sampling_plan(days);

    let rows = client
        .klines(interval, start_time, end_time, limit)
        .await
        .map_err(|e| format!("Historical data connection error to Binance: {}", e))?;

    let points = parse_klines(&rows);
    debug!(
        "Fetched {} candles ({} usable) at interval {} for {} day(s)",
        rows.len(),
        points.len(),
        interval,
        days
    );

    if points.is_empty() {
        return Err("Binance returned no historical data".to_string());
    }
    Ok(points)
}

/// True minimum and maximum over a series. None when the series is empty.
pub fn high_low(points: &[PricePoint]) -> Option<(f64, f64)> {
    let first = points.first()?.price;
    let (min, max) = points.iter().fold((first, first), |(min, max), p| {
        (min.min(p.price), max.max(p.price))
    });
    Some((min, max))
}

/// Scale a price into 0..=CHART_HEIGHT bar rows within [min, max].
/// Returns None when the range is degenerate (nothing to chart).
pub fn bar_height(price: f64, min: f64, max: f64) -> Option<usize> {
    let range = max - min;
    if range <= 0.0 {
        return None;
    }
    Some(((price - min) / range * CHART_HEIGHT as f64) as usize)
}

/// Sampling step so roughly CHART_ROWS points print
pub fn chart_step(len: usize) -> usize {
    (len / CHART_ROWS).max(1)
}

/// Group points into calendar-day buckets (local time, first-seen order) and
/// average each bucket. Returns at most the last `keep` days.
pub fn daily_averages(points: &[PricePoint], keep: usize) -> Vec<(String, f64)> {
    let mut buckets: Vec<(String, Vec<f64>)> = Vec::new();
    for point in points {
        let day_key = point
            .timestamp
            .with_timezone(&Local)
            .format("%d/%m")
            .to_string();
        match buckets.iter_mut().find(|(key, _)| *key == day_key) {
            Some((_, prices)) => prices.push(point.price),
            None => buckets.push((day_key, vec![point.price])),
        }
    }

    let skip = buckets.len().saturating_sub(keep);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(day, prices)| {
            let average = prices.iter().sum::<f64>() / prices.len() as f64;
            (day, average)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point(millis: i64, price: f64) -> PricePoint {
        PricePoint::from_millis(millis, price).unwrap()
    }

    #[test]
    fn test_sampling_plan_ranges() {
        assert_eq!(sampling_plan(1), ("15m", 96));
        assert_eq!(sampling_plan(5), ("1h", 168));
        assert_eq!(sampling_plan(7), ("1h", 168));
        assert_eq!(sampling_plan(30), ("4h", 180));
        assert_eq!(sampling_plan(90), ("1d", 90));
        assert_eq!(sampling_plan(2000), ("1d", 1000));
    }

    #[test]
    fn test_parse_klines_maps_open_time_and_close() {
        let rows = vec![
            json!([1700000000000i64, "64000.0", "64100.0", "63900.0", "64050.5", "120.4"]),
            json!([1700000900000i64, "64050.5", "64200.0", "64000.0", "64180.0", "98.1"]),
        ];
        let points = parse_klines(&rows);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].price, 64050.5);
        assert_eq!(points[0].timestamp.timestamp_millis(), 1700000000000);
        assert_eq!(points[1].price, 64180.0);
    }

    #[test]
    fn test_parse_klines_skips_short_and_malformed_rows() {
        let rows = vec![
            json!([1700000000000i64, "64000.0", "64100.0"]),
            json!("not a candle"),
            json!([1700000900000i64, "1", "2", "3", "garbage", "5"]),
            json!([1700001800000i64, "64050.5", "64200.0", "64000.0", "64180.0", "98.1"]),
        ];
        let points = parse_klines(&rows);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].price, 64180.0);
    }

    #[test]
    fn test_high_low_is_true_min_max() {
        let points = vec![
            point(0, 64050.0),
            point(1, 63800.0),
            point(2, 65500.0),
            point(3, 64900.0),
        ];
        assert_eq!(high_low(&points), Some((63800.0, 65500.0)));
        assert_eq!(high_low(&[]), None);
    }

    #[test]
    fn test_bar_height_bounds() {
        assert_eq!(bar_height(100.0, 100.0, 200.0), Some(0));
        assert_eq!(bar_height(200.0, 100.0, 200.0), Some(CHART_HEIGHT));
        assert_eq!(bar_height(150.0, 100.0, 200.0), Some(CHART_HEIGHT / 2));
        // Degenerate range: all prices equal
        assert_eq!(bar_height(100.0, 100.0, 100.0), None);
    }

    #[test]
    fn test_chart_step() {
        assert_eq!(chart_step(5), 1);
        assert_eq!(chart_step(12), 1);
        assert_eq!(chart_step(96), 8);
        assert_eq!(chart_step(168), 14);
    }

    #[test]
    fn test_daily_averages_buckets_and_truncates() {
        // Two points on one day, one on the next (a day is 86_400_000 ms)
        let day = 86_400_000i64;
        let points = vec![
            point(day * 19700, 100.0),
            point(day * 19700 + 3_600_000, 200.0),
            point(day * 19701, 300.0),
        ];
        let averages = daily_averages(&points, 5);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].1, 150.0);
        assert_eq!(averages[1].1, 300.0);

        let last_only = daily_averages(&points, 1);
        assert_eq!(last_only.len(), 1);
        assert_eq!(last_only[0].1, 300.0);
    }
}

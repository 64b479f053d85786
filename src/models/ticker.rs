//! 24-hour ticker models

/// Direction of the 24-hour move, derived from the signed variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Bullish,
    Bearish,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Bullish => "▲ BULLISH",
            Trend::Bearish => "▼ BEARISH",
            Trend::Stable => "➡ STABLE",
        }
    }
}

/// 24-hour rolling statistics for the configured pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSnapshot {
    pub last_price: f64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub volume: f64,
}

impl TickerSnapshot {
    /// Absolute change over the window: last minus open.
    pub fn variation(&self) -> f64 {
        self.last_price - self.open_price
    }

    /// Percentage change over the window. Zero when the open price is zero,
    /// so a degenerate ticker never divides by zero.
    pub fn variation_percentage(&self) -> f64 {
        if self.open_price == 0.0 {
            0.0
        } else {
            self.variation() / self.open_price * 100.0
        }
    }

    pub fn trend(&self) -> Trend {
        let variation = self.variation();
        if variation > 0.0 {
            Trend::Bullish
        } else if variation < 0.0 {
            Trend::Bearish
        } else {
            Trend::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(last: f64, open: f64) -> TickerSnapshot {
        TickerSnapshot {
            last_price: last,
            open_price: open,
            high_price: last.max(open),
            low_price: last.min(open),
            volume: 1000.0,
        }
    }

    #[test]
    fn test_variation_is_last_minus_open() {
        let snap = snapshot(65_500.0, 64_000.0);
        assert_eq!(snap.variation(), 1500.0);
        assert!((snap.variation_percentage() - 2.34375).abs() < 1e-9);
    }

    #[test]
    fn test_variation_percentage_zero_open() {
        let snap = snapshot(65_500.0, 0.0);
        assert_eq!(snap.variation_percentage(), 0.0);
    }

    #[test]
    fn test_trend() {
        assert_eq!(snapshot(2.0, 1.0).trend(), Trend::Bullish);
        assert_eq!(snapshot(1.0, 2.0).trend(), Trend::Bearish);
        assert_eq!(snapshot(1.0, 1.0).trend(), Trend::Stable);
    }
}

//! Market snapshot models

/// Direction of the price move over the charted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A non-negative change counts as up, matching the indicator's `+`
    /// prefix rule.
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Hex color applied to the change indicator, chart stroke and
    /// gradient.
    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "#00B84B",
            Trend::Down => "#FF3D00",
        }
    }
}

/// Result of one market data acquisition pass.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    /// Current ticker price in USDT.
    pub current_price: f64,
    /// Change versus the oldest sample of the fetched window, in percent.
    pub change_percent: f64,
    pub trend: Trend,
    /// Closing prices, oldest first, evenly spaced in time.
    pub history: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_sign() {
        assert_eq!(Trend::from_change(3.2), Trend::Up);
        assert_eq!(Trend::from_change(0.0), Trend::Up);
        assert_eq!(Trend::from_change(-0.01), Trend::Down);
    }

    #[test]
    fn test_trend_colors() {
        assert_eq!(Trend::Up.color(), "#00B84B");
        assert_eq!(Trend::Down.color(), "#FF3D00");
    }
}

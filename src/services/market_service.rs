use thiserror::Error;
use tracing::debug;

use crate::api::binance::BinanceClient;
use crate::api::ApiError;
use crate::models::{MarketSnapshot, Trend};

/// Trading pair backing the dashboard's market card and chart.
pub const SYMBOL: &str = "TONUSDT";

/// 96 candles of 15 minutes: a 24 hour window.
const KLINE_INTERVAL: &str = "15m";
const KLINE_LIMIT: u32 = 96;

#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Exchange returned an empty kline history")]
    EmptyHistory,
}

/// Fetch the current price and the 24h closing series concurrently, then
/// derive the percentage change against the oldest sample of the window.
///
/// Both requests must succeed; a failure here aborts the whole cycle.
pub async fn fetch_snapshot(client: &BinanceClient) -> Result<MarketSnapshot, MarketError> {
    let (ticker, closes) = tokio::join!(
        client.ticker_price(SYMBOL),
        client.closing_prices(SYMBOL, KLINE_INTERVAL, KLINE_LIMIT),
    );

    let current_price = ticker?;
    let history = closes?;
    let start_price = *history.first().ok_or(MarketError::EmptyHistory)?;

    let change_percent = percent_change(current_price, start_price);
    let trend = Trend::from_change(change_percent);

    debug!(
        "{}: {} ({} samples, {:+.2}% over the window)",
        SYMBOL,
        current_price,
        history.len(),
        change_percent
    );

    Ok(MarketSnapshot {
        current_price,
        change_percent,
        trend,
        history,
    })
}

/// Change of `current` against the `baseline`, in percent. A zero
/// baseline carries no information and reads as no change.
fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_change_signs() {
        assert_eq!(percent_change(110.0, 100.0), 10.0);
        assert_eq!(percent_change(90.0, 100.0), -10.0);
        assert_eq!(percent_change(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(5.0, 0.0), 0.0);
    }
}

use reqwest::Client as HttpClient;

use super::models::{Kline, TickerPrice};
use crate::api::ApiError;

/// Spot market data client for the exchange's public REST API.
pub struct BinanceClient {
    http_client: HttpClient,
    base_url: String,
}

impl BinanceClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.binance.com/api/v3";

    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// GET /ticker/price
    ///
    /// Current price for a trading pair, parsed out of the exchange's
    /// decimal-string representation.
    pub async fn ticker_price(&self, symbol: &str) -> Result<f64, ApiError> {
        let url = format!("{}/ticker/price", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let ticker = response.json::<TickerPrice>().await?;
        ticker
            .price
            .parse::<f64>()
            .map_err(|e| ApiError::Malformed(format!("ticker price '{}': {}", ticker.price, e)))
    }

    /// GET /klines
    ///
    /// Closing prices for the last `limit` candles of `interval`, oldest
    /// first. Any row without a readable close aborts the whole fetch.
    pub async fn closing_prices(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<f64>, ApiError> {
        let url = format!("{}/klines", self.base_url);
        let limit = limit.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let rows = response.json::<Vec<Kline>>().await?;
        rows.iter()
            .enumerate()
            .map(|(i, kline)| {
                kline
                    .close()
                    .ok_or_else(|| ApiError::Malformed(format!("kline row {} has no close price", i)))
            })
            .collect()
    }
}

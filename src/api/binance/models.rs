use serde::Deserialize;

/// Response from GET /ticker/price
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    /// Decimal price as the exchange sends it, e.g. "6.0316000".
    pub price: String,
}

/// One kline row as the exchange returns it: a mixed-type JSON array of
/// open time, OHLCV strings and trade counters. Only the close price
/// (index 4) is consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct Kline(pub Vec<serde_json::Value>);

impl Kline {
    /// Closing price of this candle, if the row carries one.
    pub fn close(&self) -> Option<f64> {
        let field = self.0.get(4)?;
        match field.as_str() {
            Some(s) => s.parse().ok(),
            None => field.as_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_price_deserializes() {
        let json = r#"{"symbol":"TONUSDT","price":"6.03160000"}"#;
        let ticker: TickerPrice = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.symbol, "TONUSDT");
        assert_eq!(ticker.price.parse::<f64>().unwrap(), 6.0316);
    }

    #[test]
    fn test_kline_close_is_index_four() {
        let json = r#"[1699000000000,"6.01","6.10","5.99","6.05","12345.6",1699000899999,"74321.1",987,"6000.0","36000.0","0"]"#;
        let kline: Kline = serde_json::from_str(json).unwrap();
        assert_eq!(kline.close(), Some(6.05));
    }

    #[test]
    fn test_kline_close_missing() {
        let kline: Kline = serde_json::from_str(r#"[1699000000000,"6.01"]"#).unwrap();
        assert_eq!(kline.close(), None);
    }
}

use serde::{Deserialize, Serialize};

use crate::catalog::NANO_TO_TON;

/// Request body for POST /gifts
#[derive(Debug, Clone, Serialize)]
pub struct GiftSearchRequest {
    pub ordering: String,
    pub page: u32,
    pub per_page: u32,
    pub collections: Vec<String>,
}

impl GiftSearchRequest {
    /// Search returning only the cheapest listing of one collection.
    pub fn floor(collection: &str) -> Self {
        Self {
            ordering: "PRICE_ASC".to_string(),
            page: 1,
            per_page: 1,
            collections: vec![collection.to_string()],
        }
    }
}

/// Response from POST /gifts
#[derive(Debug, Clone, Deserialize)]
pub struct GiftSearchResponse {
    #[serde(default)]
    pub items: Vec<GiftListing>,
}

/// One marketplace listing. Prices arrive as fixed-point nano-TON strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GiftListing {
    pub price: String,
    pub marketplace: String,
}

impl GiftListing {
    /// Listing price converted from nano-TON to whole TON.
    pub fn price_ton(&self) -> Option<f64> {
        self.price.parse::<f64>().ok().map(|nano| nano / NANO_TO_TON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_request_shape() {
        let request = GiftSearchRequest::floor("Plush Pepe");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ordering"], "PRICE_ASC");
        assert_eq!(json["page"], 1);
        assert_eq!(json["per_page"], 1);
        assert_eq!(json["collections"], serde_json::json!(["Plush Pepe"]));
    }

    #[test]
    fn test_listing_price_nano_conversion() {
        let json = r#"{"items":[{"price":"1500000000","marketplace":"Tonnel"}]}"#;
        let response: GiftSearchResponse = serde_json::from_str(json).unwrap();
        let listing = &response.items[0];
        assert_eq!(listing.price_ton(), Some(1.5));
        assert_eq!(listing.marketplace, "Tonnel");
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let response: GiftSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_unparsable_price_is_none() {
        let listing = GiftListing {
            price: "not-a-number".to_string(),
            marketplace: "Tonnel".to_string(),
        };
        assert_eq!(listing.price_ton(), None);
    }
}

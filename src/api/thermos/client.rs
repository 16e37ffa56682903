use reqwest::Client as HttpClient;

use super::models::{GiftListing, GiftSearchRequest, GiftSearchResponse};
use crate::api::ApiError;

/// Client for the gift marketplace aggregator's public API.
pub struct ThermosClient {
    http_client: HttpClient,
    base_url: String,
}

impl ThermosClient {
    const DEFAULT_BASE_URL: &'static str = "https://proxy.thermos.gifts/api/v1";

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

    /// POST /gifts
    ///
    /// Cheapest current listing for a collection, or `None` when nothing
    /// is listed.
    pub async fn floor_listing(&self, collection: &str) -> Result<Option<GiftListing>, ApiError> {
        let url = format!("{}/gifts", self.base_url);
        let body = GiftSearchRequest::floor(collection);

        let response = self.http_client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let data = response.json::<GiftSearchResponse>().await?;
        Ok(data.items.into_iter().next())
    }
}

use std::sync::Arc;

use tracing::error;

use crate::api::thermos::models::GiftListing;
use crate::api::thermos::ThermosClient;
use crate::api::ApiError;
use crate::catalog::{GIFT_IDS, GIFT_NAMES};
use crate::models::GiftQuote;

/// Fetch the floor quote for one collectible. Failures never escape this
/// function: they are downgraded to the sentinel quote so the aggregate
/// join always completes.
pub async fn fetch_floor_quote(client: &ThermosClient, name: &str) -> GiftQuote {
    quote_or_sentinel(name, client.floor_listing(name).await)
}

/// Fetch quotes for the whole catalog concurrently, returned in catalog
/// order with exactly one quote per entry.
pub async fn fetch_all_quotes(client: &Arc<ThermosClient>) -> Vec<GiftQuote> {
    let names: Vec<&'static str> = GIFT_IDS
        .iter()
        .filter_map(|id| GIFT_NAMES.get(id).copied())
        .collect();

    let handles: Vec<_> = names
        .iter()
        .map(|&name| {
            let client = Arc::clone(client);
            tokio::spawn(async move { fetch_floor_quote(&client, name).await })
        })
        .collect();

    let mut quotes = Vec::with_capacity(handles.len());
    for (handle, name) in handles.into_iter().zip(names) {
        match handle.await {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                error!("Quote task for {} died: {}", name, e);
                quotes.push(GiftQuote::sentinel(name));
            }
        }
    }
    quotes
}

/// Per-item failure isolation: an error becomes the sentinel quote, an
/// empty listing the unlisted quote.
fn quote_or_sentinel(name: &str, result: Result<Option<GiftListing>, ApiError>) -> GiftQuote {
    match result {
        Ok(Some(listing)) => match listing.price_ton() {
            Some(price) => GiftQuote {
                name: name.to_string(),
                price,
                market: listing.marketplace,
            },
            None => {
                error!("Unreadable listing price for {}: '{}'", name, listing.price);
                GiftQuote::sentinel(name)
            }
        },
        Ok(None) => GiftQuote::unlisted(name),
        Err(e) => {
            error!("Error fetching {}: {}", name, e);
            GiftQuote::sentinel(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: &str, marketplace: &str) -> GiftListing {
        GiftListing {
            price: price.to_string(),
            marketplace: marketplace.to_string(),
        }
    }

    #[test]
    fn test_successful_listing_converts_nano() {
        let quote = quote_or_sentinel("Plush Pepe", Ok(Some(listing("2500000000", "Tonnel"))));
        assert_eq!(quote.name, "Plush Pepe");
        assert_eq!(quote.price, 2.5);
        assert_eq!(quote.market, "Tonnel");
    }

    #[test]
    fn test_empty_listing_is_unlisted() {
        let quote = quote_or_sentinel("Heart Locket", Ok(None));
        assert_eq!(quote, GiftQuote::unlisted("Heart Locket"));
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.market, "N/A");
    }

    #[test]
    fn test_fetch_error_becomes_sentinel() {
        let failure = Err(ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        });
        let quote = quote_or_sentinel("Durov's Cap", failure);
        assert_eq!(quote, GiftQuote::sentinel("Durov's Cap"));
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.market, "Error");
    }

    #[test]
    fn test_unreadable_price_becomes_sentinel() {
        let quote = quote_or_sentinel("Mighty Arm", Ok(Some(listing("garbage", "Tonnel"))));
        assert_eq!(quote, GiftQuote::sentinel("Mighty Arm"));
    }
}

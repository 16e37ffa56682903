pub mod client;
pub mod models;

pub use client::ThermosClient;
pub use models::{GiftListing, GiftSearchRequest, GiftSearchResponse};

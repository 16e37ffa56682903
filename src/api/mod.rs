pub mod binance;
pub mod error;
pub mod thermos;

pub use error::ApiError;

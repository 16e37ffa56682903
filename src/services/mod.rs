pub mod chart_service;
pub mod dashboard_service;
pub mod gift_service;
pub mod market_service;

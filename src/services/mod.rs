pub mod dashboard;
pub mod marketplace;

pub use dashboard::DashboardService;
pub use marketplace::{MarketplaceApi, MarketplaceClient};

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use clients::HttpClient;
pub use config::Settings;
pub use router::create_router;
pub use services::{DashboardService, MarketplaceApi, MarketplaceClient};
pub use state::AppState;

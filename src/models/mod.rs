mod catalog;
mod dashboard;
mod order;
mod response;

pub use catalog::{normalize_catalog_payload, CatalogItem};
pub use dashboard::DashboardData;
pub use order::{normalize_orders_payload, OrderRecord};
pub use response::ApiResponse;

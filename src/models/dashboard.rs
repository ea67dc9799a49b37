use serde::{Deserialize, Serialize};

use super::catalog::CatalogItem;
use super::order::OrderRecord;

/// Dashboard summary, recomputed on every request and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub total_products: usize,
    pub total_orders: usize,
    pub products: Vec<CatalogItem>,
    pub recent_orders: Vec<OrderRecord>,
}

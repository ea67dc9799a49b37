use std::sync::Arc;

use tracing::error;

use crate::models::{ApiResponse, CatalogItem, DashboardData, OrderRecord};
use crate::services::marketplace::MarketplaceApi;

const PREVIEW_LEN: usize = 5;

/// Reduces the two marketplace feeds into a render-ready summary. Stateless
/// between requests; holds only the injected client.
#[derive(Clone)]
pub struct DashboardService {
    client: Arc<dyn MarketplaceApi>,
}

impl DashboardService {
    pub fn new(client: Arc<dyn MarketplaceApi>) -> Self {
        Self { client }
    }

    /// Fans out to both fetches concurrently and folds the results. The
    /// fetches themselves are fail-soft; a panicked task (a local defect,
    /// not upstream misbehavior) is caught here and reported as a
    /// structured error envelope with zeroed data.
    pub async fn get_dashboard(&self) -> ApiResponse<DashboardData> {
        let catalog_client = Arc::clone(&self.client);
        let orders_client = Arc::clone(&self.client);

        let catalog_task =
            tokio::spawn(async move { catalog_client.fetch_catalog_items().await });
        let orders_task = tokio::spawn(async move { orders_client.fetch_orders().await });

        match tokio::join!(catalog_task, orders_task) {
            (Ok(items), Ok(orders)) => {
                let data = DashboardData {
                    total_products: items.len(),
                    total_orders: orders.len(),
                    products: preview(items),
                    recent_orders: preview(orders),
                };
                ApiResponse::success(data)
            }
            (catalog, orders) => {
                let message = join_failure_message(catalog.err(), orders.err());
                error!(message = %message, "Dashboard aggregation failed");
                ApiResponse::error(message, DashboardData::default())
            }
        }
    }

    pub async fn get_catalog_items(&self) -> ApiResponse<Vec<CatalogItem>> {
        let client = Arc::clone(&self.client);
        match tokio::spawn(async move { client.fetch_catalog_items().await }).await {
            Ok(items) => ApiResponse::success(items),
            Err(e) => {
                error!(error = %e, "Catalog aggregation failed");
                ApiResponse::error(e.to_string(), Vec::new())
            }
        }
    }

    pub async fn get_orders(&self) -> ApiResponse<Vec<OrderRecord>> {
        let client = Arc::clone(&self.client);
        match tokio::spawn(async move { client.fetch_orders().await }).await {
            Ok(orders) => ApiResponse::success(orders),
            Err(e) => {
                error!(error = %e, "Orders aggregation failed");
                ApiResponse::error(e.to_string(), Vec::new())
            }
        }
    }
}

fn preview<T>(mut items: Vec<T>) -> Vec<T> {
    items.truncate(PREVIEW_LEN);
    items
}

fn join_failure_message(
    catalog: Option<tokio::task::JoinError>,
    orders: Option<tokio::task::JoinError>,
) -> String {
    [catalog, orders]
        .into_iter()
        .flatten()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

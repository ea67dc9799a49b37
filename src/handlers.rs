use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::models::{ApiResponse, CatalogItem, DashboardData, OrderRecord};
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to OzonProfit API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe; never touches the marketplace client.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<ApiResponse<DashboardData>> {
    Json(state.dashboard.get_dashboard().await)
}

pub async fn get_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<CatalogItem>>> {
    Json(state.dashboard.get_catalog_items().await)
}

pub async fn get_orders(State(state): State<AppState>) -> Json<ApiResponse<Vec<OrderRecord>>> {
    Json(state.dashboard.get_orders().await)
}

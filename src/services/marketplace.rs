use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::clients::HttpClient;
use crate::error::Result;
use crate::models::{normalize_catalog_payload, normalize_orders_payload, CatalogItem, OrderRecord};

// Only the first page is ever retrieved; this is an intentional scope limit.
const PAGE_SIZE: u32 = 100;
const ORDER_WINDOW_DAYS: i64 = 30;

const CATALOG_PATH: &str = "/v2/product/list";
const POSTINGS_PATH: &str = "/v3/posting/fbs/list";

/// Seam between the aggregator and the upstream marketplace. Fetches are
/// fail-soft: any upstream misbehavior degrades to an empty list instead of
/// an error crossing this boundary.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    async fn fetch_catalog_items(&self) -> Vec<CatalogItem>;
    async fn fetch_orders(&self) -> Vec<OrderRecord>;
}

pub struct MarketplaceClient {
    http: HttpClient,
    base_url: String,
}

impl MarketplaceClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.post(&url).body(serde_json::to_vec(body)?);
        let response = self.http.send(request).await?;
        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes)?;

        debug!(path = path, payload = %payload, "Upstream payload received");

        Ok(payload)
    }

    async fn catalog_page(&self) -> Result<Vec<CatalogItem>> {
        let payload = self.post_json(CATALOG_PATH, &catalog_request_body()).await?;
        Ok(normalize_catalog_payload(&payload))
    }

    async fn postings_window(&self) -> Result<Vec<OrderRecord>> {
        let payload = self
            .post_json(POSTINGS_PATH, &orders_request_body(Utc::now()))
            .await?;
        Ok(normalize_orders_payload(&payload))
    }
}

fn catalog_request_body() -> Value {
    json!({
        "page": 1,
        "page_size": PAGE_SIZE,
    })
}

/// Trailing 30-day window ending at `now`, both bounds UTC ISO-8601 with a
/// `Z` designator.
pub fn order_window(now: DateTime<Utc>) -> (String, String) {
    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
    let from = now - Duration::days(ORDER_WINDOW_DAYS);
    (from.format(FORMAT).to_string(), now.format(FORMAT).to_string())
}

fn orders_request_body(now: DateTime<Utc>) -> Value {
    let (processed_at_from, processed_at_to) = order_window(now);
    json!({
        "limit": PAGE_SIZE,
        "offset": 0,
        "filter": {
            "processed_at_from": processed_at_from,
            "processed_at_to": processed_at_to,
            "status": "",
        },
    })
}

#[async_trait]
impl MarketplaceApi for MarketplaceClient {
    async fn fetch_catalog_items(&self) -> Vec<CatalogItem> {
        match self.catalog_page().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "Catalog fetch failed, serving empty list");
                Vec::new()
            }
        }
    }

    async fn fetch_orders(&self) -> Vec<OrderRecord> {
        match self.postings_window().await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "Orders fetch failed, serving empty list");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn order_window_is_trailing_thirty_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let (from, to) = order_window(now);

        assert_eq!(from, "2024-05-16T00:00:00Z");
        assert_eq!(to, "2024-06-15T00:00:00Z");
    }

    #[test]
    fn orders_body_carries_window_and_blank_status_filter() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let body = orders_request_body(now);

        assert_eq!(body["limit"], 100);
        assert_eq!(body["offset"], 0);
        assert_eq!(body["filter"]["processed_at_from"], "2024-05-16T12:30:45Z");
        assert_eq!(body["filter"]["processed_at_to"], "2024-06-15T12:30:45Z");
        assert_eq!(body["filter"]["status"], "");
    }

    #[test]
    fn catalog_body_requests_first_page_only() {
        let body = catalog_request_body();

        assert_eq!(body["page"], 1);
        assert_eq!(body["page_size"], 100);
    }
}

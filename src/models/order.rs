use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::{list_under, number_field};

/// Canonical fulfillment record. `status` is upstream free text and is not
/// validated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub status: String,
    pub total_price: f64,
}

/// Extracts orders from whichever payload shape the upstream sent: newer
/// versions return `result.postings`, older ones `result.orders`. Neither
/// key present, or the payload malformed, yields an empty list.
pub fn normalize_orders_payload(payload: &Value) -> Vec<OrderRecord> {
    if let Some(postings) = list_under(payload, "postings") {
        return postings.iter().map(from_posting_entry).collect();
    }
    if let Some(orders) = list_under(payload, "orders") {
        return orders.iter().map(from_order_entry).collect();
    }
    Vec::new()
}

fn from_posting_entry(entry: &Value) -> OrderRecord {
    OrderRecord {
        id: entry
            .get("posting_number")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        status: entry
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        total_price: number_field(entry, "total_price"),
    }
}

fn from_order_entry(entry: &Value) -> OrderRecord {
    let id = match entry.get("order_id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    OrderRecord {
        id,
        status: entry
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        total_price: number_field(entry, "total_price"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn postings_key_is_probed_first() {
        let payload = json!({
            "result": {
                "postings": [
                    {"posting_number": "123-0001-1", "status": "delivered", "total_price": "450.0"}
                ]
            }
        });

        let orders = normalize_orders_payload(&payload);
        assert_eq!(
            orders,
            vec![OrderRecord {
                id: "123-0001-1".to_string(),
                status: "delivered".to_string(),
                total_price: 450.0,
            }]
        );
    }

    #[test]
    fn orders_key_is_the_fallback_shape() {
        let payload = json!({
            "result": {
                "orders": [
                    {"order_id": 88, "status": "awaiting_packaging", "total_price": 120}
                ]
            }
        });

        let orders = normalize_orders_payload(&payload);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, "88");
        assert_eq!(orders[0].status, "awaiting_packaging");
    }

    #[test]
    fn neither_key_means_empty() {
        assert!(normalize_orders_payload(&json!({"result": {"total": 0}})).is_empty());
        assert!(normalize_orders_payload(&json!("not an object")).is_empty());
    }
}

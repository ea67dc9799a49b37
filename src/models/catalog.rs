use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical catalog record; only the fields the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

/// Extracts catalog items from whichever payload shape the upstream sent.
///
/// The v2 product listing nests entries under `result.items`; the older
/// listing nests them under `result.products` with a different field set.
/// Anything else (missing key, non-array, malformed body) normalizes to an
/// empty list.
pub fn normalize_catalog_payload(payload: &Value) -> Vec<CatalogItem> {
    if let Some(items) = list_under(payload, "items") {
        return items.iter().map(from_items_entry).collect();
    }
    if let Some(products) = list_under(payload, "products") {
        return products.iter().map(from_products_entry).collect();
    }
    Vec::new()
}

pub(crate) fn list_under<'a>(payload: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    payload
        .get("result")
        .and_then(|r| r.get(key))
        .or_else(|| payload.get(key))
        .and_then(Value::as_array)
}

fn from_items_entry(entry: &Value) -> CatalogItem {
    CatalogItem {
        id: entry.get("product_id").and_then(Value::as_i64).unwrap_or(0),
        title: text_field(entry, "title"),
        price: number_field(entry, "price"),
        quantity: quantity_field(entry, "quantity"),
    }
}

fn from_products_entry(entry: &Value) -> CatalogItem {
    CatalogItem {
        id: entry.get("id").and_then(Value::as_i64).unwrap_or(0),
        title: text_field(entry, "name"),
        price: number_field(entry, "price"),
        quantity: quantity_field(entry, "stock"),
    }
}

// Anything that does not fit the canonical field (negative, non-numeric,
// beyond u32) takes the default, like every other absent field.
fn quantity_field(entry: &Value, key: &str) -> u32 {
    entry
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|q| u32::try_from(q).ok())
        .unwrap_or(0)
}

fn text_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

// Prices arrive either as JSON numbers or as decimal strings ("199.50").
pub(crate) fn number_field(entry: &Value, key: &str) -> f64 {
    match entry.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_listing_shapes_normalize_to_equal_sequences() {
        let v2 = json!({
            "result": {
                "items": [
                    {"product_id": 1, "title": "Mug", "price": "199.5", "quantity": 4},
                    {"product_id": 2, "title": "Plate", "price": 90, "quantity": 0}
                ]
            }
        });
        let v1 = json!({
            "result": {
                "products": [
                    {"id": 1, "name": "Mug", "price": 199.5, "stock": 4},
                    {"id": 2, "name": "Plate", "price": "90", "stock": 0}
                ]
            }
        });

        assert_eq!(
            normalize_catalog_payload(&v2),
            normalize_catalog_payload(&v1)
        );
        assert_eq!(normalize_catalog_payload(&v2).len(), 2);
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let payload = json!({"result": {"items": [{"product_id": 7}]}});
        let items = normalize_catalog_payload(&payload);

        assert_eq!(
            items,
            vec![CatalogItem {
                id: 7,
                title: String::new(),
                price: 0.0,
                quantity: 0,
            }]
        );
    }

    #[test]
    fn unknown_or_malformed_payloads_normalize_to_empty() {
        assert!(normalize_catalog_payload(&json!({"result": {}})).is_empty());
        assert!(normalize_catalog_payload(&json!({"result": {"items": "oops"}})).is_empty());
        assert!(normalize_catalog_payload(&json!(null)).is_empty());
        assert!(normalize_catalog_payload(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn out_of_range_quantities_default_to_zero() {
        let payload = json!({
            "result": {
                "items": [
                    {"product_id": 1, "quantity": 4_294_967_296u64},
                    {"product_id": 2, "quantity": -3},
                    {"product_id": 3, "quantity": "many"}
                ]
            }
        });

        let items = normalize_catalog_payload(&payload);
        assert!(items.iter().all(|i| i.quantity == 0));
    }

    #[test]
    fn top_level_keys_are_probed_too() {
        let payload = json!({"items": [{"product_id": 3, "title": "Bowl"}]});
        assert_eq!(normalize_catalog_payload(&payload).len(), 1);
    }
}

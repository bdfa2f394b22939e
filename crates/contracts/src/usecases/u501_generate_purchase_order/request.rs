use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Одна строка заказа поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLine {
    pub item_id: String,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

/// Запрос на формирование заказа поставщику
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePurchaseOrderRequest {
    /// Client-generated key; the backend rejects a second order with the same key
    pub request_id: String,
    /// Screen the order was generated from, e.g. "low_stock"
    pub source: String,
    pub lines: Vec<PurchaseOrderLine>,
}

impl GeneratePurchaseOrderRequest {
    /// Lines with a non-positive quantity are dropped.
    pub fn new(source: impl Into<String>, lines: Vec<PurchaseOrderLine>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            source: source.into(),
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: i64) -> PurchaseOrderLine {
        PurchaseOrderLine {
            item_id: id.into(),
            sku: format!("SKU-{id}"),
            name: id.into(),
            quantity,
            supplier: None,
        }
    }

    #[test]
    fn test_new_drops_empty_lines() {
        let req = GeneratePurchaseOrderRequest::new("low_stock", vec![line("a", 3), line("b", 0), line("c", 2)]);
        assert_eq!(req.lines.len(), 2);
        assert_eq!(req.total_quantity(), 5);
        assert!(!req.request_id.is_empty());
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = GeneratePurchaseOrderRequest::new("low_stock", vec![]);
        let b = GeneratePurchaseOrderRequest::new("low_stock", vec![]);
        assert_ne!(a.request_id, b.request_id);
        assert!(a.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let req = GeneratePurchaseOrderRequest::new("low_stock", vec![line("a", 3)]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["lines"][0]["itemId"], "a");
        assert!(json["lines"][0].get("supplier").is_none());
        assert_eq!(json["source"], "low_stock");
    }
}

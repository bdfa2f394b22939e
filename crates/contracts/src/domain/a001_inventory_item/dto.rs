use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const STATUS_IN_STOCK: &str = "In Stock";
pub const STATUS_LOW_STOCK: &str = "Low Stock";
pub const STATUS_OUT_OF_STOCK: &str = "Out of Stock";

pub const STOCK_STATUSES: &[&str] = &[STATUS_IN_STOCK, STATUS_LOW_STOCK, STATUS_OUT_OF_STOCK];

/// Строка отчёта по остаткам
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub updated_at: String,
}

impl InventoryItemDto {
    /// Status derived from quantity when the backend omits it
    pub fn effective_status(&self) -> &str {
        if !self.status.is_empty() {
            return &self.status;
        }
        derive_stock_status(self.quantity, self.reorder_level)
    }

    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

pub fn derive_stock_status(quantity: i64, reorder_level: i64) -> &'static str {
    if quantity <= 0 {
        STATUS_OUT_OF_STOCK
    } else if quantity <= reorder_level {
        STATUS_LOW_STOCK
    } else {
        STATUS_IN_STOCK
    }
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("sku", "SKU"),
    FieldDef::text("name", "Item Name"),
    FieldDef::text("category", "Category"),
    FieldDef::text("warehouse_name", "Warehouse"),
    FieldDef::number("quantity", "Quantity"),
    FieldDef::number("reorder_level", "Reorder Level").without_filter(),
    FieldDef::money("unit_price", "Unit Price"),
    FieldDef::status("status", "Status", STOCK_STATUSES),
    FieldDef::date("updated_at", "Last Updated"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a001_inventory_item",
    title: "Inventory Report",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let raw = r#"{"id":"7","sku":"BX-1","name":"Box","quantity":3,"reorderLevel":5,"unitPrice":2.5}"#;
        let item: InventoryItemDto = serde_json::from_str(raw).unwrap();
        assert_eq!(item.reorder_level, 5);
        assert_eq!(item.warehouse_name, None);
        assert_eq!(item.effective_status(), STATUS_LOW_STOCK);
        assert_eq!(item.stock_value(), 7.5);
    }

    #[test]
    fn test_numeric_id_in_list_envelope() {
        let raw = r#"{"success":true,"data":[{"id":7,"sku":"BX-1","name":"Box"},{"id":"8","sku":"BX-2","name":"Bag"}]}"#;
        let resp: crate::shared::api_response::ApiResponse<InventoryItemDto> =
            serde_json::from_str(raw).unwrap();
        let ids: Vec<String> = resp.into_result().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["7", "8"]);
    }

    #[test]
    fn test_derive_stock_status() {
        assert_eq!(derive_stock_status(0, 5), STATUS_OUT_OF_STOCK);
        assert_eq!(derive_stock_status(5, 5), STATUS_LOW_STOCK);
        assert_eq!(derive_stock_status(6, 5), STATUS_IN_STOCK);
    }
}

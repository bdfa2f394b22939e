use crate::domain::a001_inventory_item::{STATUS_LOW_STOCK, STATUS_OUT_OF_STOCK};
use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const LOW_STOCK_STATUSES: &[&str] = &[STATUS_LOW_STOCK, STATUS_OUT_OF_STOCK];

/// Field that users edit in the low-stock report and that is kept as an override
pub const TO_ORDER_FIELD: &str = "to_order";

/// Позиция отчёта «заканчивающиеся товары»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItemDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub reorder_level: i64,
    /// Quantity to put on the next purchase order; server suggestion or user override
    #[serde(default)]
    pub to_order: Option<i64>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl LowStockItemDto {
    /// Restock up to twice the reorder level when nothing was suggested
    pub fn suggested_to_order(&self) -> i64 {
        (self.reorder_level * 2 - self.quantity).max(0)
    }

    pub fn effective_to_order(&self) -> i64 {
        self.to_order.unwrap_or_else(|| self.suggested_to_order())
    }
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("sku", "SKU"),
    FieldDef::text("name", "Item Name"),
    FieldDef::text("category", "Category"),
    FieldDef::text("supplier", "Supplier"),
    FieldDef::number("quantity", "In Stock"),
    FieldDef::number("reorder_level", "Reorder Level"),
    FieldDef::number(TO_ORDER_FIELD, "To Order"),
    FieldDef::status("status", "Status", LOW_STOCK_STATUSES),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "p901_low_stock",
    title: "Low Stock Report",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_to_order() {
        let raw = r#"{"id":"1","sku":"S","name":"N","quantity":3,"reorderLevel":10}"#;
        let mut item: LowStockItemDto = serde_json::from_str(raw).unwrap();
        assert_eq!(item.effective_to_order(), 17);
        item.quantity = 40;
        assert_eq!(item.effective_to_order(), 0);
        item.to_order = Some(5);
        assert_eq!(item.effective_to_order(), 5);
    }
}

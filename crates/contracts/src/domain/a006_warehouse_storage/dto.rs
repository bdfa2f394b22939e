use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

/// Размещение товара по ячейкам склада
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStorageDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub warehouse_name: String,
    #[serde(default)]
    pub bin_location: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub last_counted_at: Option<String>,
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("warehouse_name", "Warehouse"),
    FieldDef::text("bin_location", "Bin"),
    FieldDef::text("sku", "SKU"),
    FieldDef::text("item_name", "Item"),
    FieldDef::number("quantity", "Quantity"),
    FieldDef::date("last_counted_at", "Last Counted"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a006_warehouse_storage",
    title: "Warehouse Storage",
    fields: FIELDS,
};

use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const TRANSFER_STATUSES: &[&str] = &["Pending", "In Transit", "Completed", "Cancelled"];

/// Перемещение товара между складами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub reference: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub from_warehouse: String,
    #[serde(default)]
    pub to_warehouse: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub requested_at: String,
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("reference", "Reference"),
    FieldDef::text("item_name", "Item"),
    FieldDef::number("quantity", "Quantity"),
    FieldDef::text("from_warehouse", "From"),
    FieldDef::text("to_warehouse", "To"),
    FieldDef::status("status", "Status", TRANSFER_STATUSES),
    FieldDef::date("requested_at", "Requested"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a004_transfer",
    title: "Transfer Tracking",
    fields: FIELDS,
};

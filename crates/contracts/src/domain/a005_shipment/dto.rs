use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const SHIPMENT_STATUSES: &[&str] = &["Preparing", "Shipped", "Delivered", "Returned"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub tracking_number: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub items_count: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub shipped_at: Option<String>,
    #[serde(default)]
    pub expected_at: Option<String>,
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("tracking_number", "Tracking #"),
    FieldDef::text("carrier", "Carrier"),
    FieldDef::text("destination", "Destination"),
    FieldDef::number("items_count", "Items"),
    FieldDef::status("status", "Status", SHIPMENT_STATUSES),
    FieldDef::date("shipped_at", "Shipped"),
    FieldDef::date("expected_at", "Expected"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a005_shipment",
    title: "Shipment Tracking",
    fields: FIELDS,
};

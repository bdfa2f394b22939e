use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const DIRECTION_IN: &str = "IN";
pub const DIRECTION_OUT: &str = "OUT";
pub const DIRECTIONS: &[&str] = &[DIRECTION_IN, DIRECTION_OUT];

/// Движение товара: приход (IN) или расход (OUT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransactionDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub reference: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    pub direction: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub warehouse_name: String,
    #[serde(default)]
    pub performed_by: String,
    #[serde(default)]
    pub occurred_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StockTransactionDto {
    pub fn is_inbound(&self) -> bool {
        self.direction.eq_ignore_ascii_case(DIRECTION_IN)
    }

    /// Quantity with sign: positive for stock-in, negative for stock-out
    pub fn signed_quantity(&self) -> i64 {
        if self.is_inbound() {
            self.quantity
        } else {
            -self.quantity
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::date("occurred_at", "Date"),
    FieldDef::text("reference", "Reference"),
    FieldDef::text("item_name", "Item"),
    FieldDef::status("direction", "Type", DIRECTIONS),
    FieldDef::number("quantity", "Quantity"),
    FieldDef::money("unit_cost", "Unit Cost"),
    FieldDef::money("total_cost", "Total").without_filter(),
    FieldDef::text("warehouse_name", "Warehouse"),
    FieldDef::text("performed_by", "By"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a007_stock_transaction",
    title: "Stock In / Out Log",
    fields: FIELDS,
};

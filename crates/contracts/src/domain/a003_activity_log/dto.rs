use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const LOG_ACTIONS: &[&str] = &["CREATE", "UPDATE", "DELETE", "STOCK_IN", "STOCK_OUT", "TRANSFER"];

/// Запись журнала действий пользователей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub timestamp: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub details: String,
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::date("timestamp", "Date / Time"),
    FieldDef::text("user", "User"),
    FieldDef::status("action", "Action", LOG_ACTIONS),
    FieldDef::text("entity", "Entity"),
    FieldDef::text("details", "Details"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a003_activity_log",
    title: "Activity Log",
    fields: FIELDS,
};

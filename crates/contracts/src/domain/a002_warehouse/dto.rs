use crate::shared::row_id::string_or_number;
use crate::shared::table::{FieldDef, TableSchema};
use serde::{Deserialize, Serialize};

pub const WAREHOUSE_STATUSES: &[&str] = &["Active", "Inactive", "Maintenance"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub used_capacity: i64,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl WarehouseDto {
    /// Occupancy in percent, 0 when capacity is unknown
    pub fn utilization(&self) -> f64 {
        if self.capacity <= 0 {
            return 0.0;
        }
        (self.used_capacity as f64 / self.capacity as f64 * 100.0).min(100.0)
    }
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("name", "Warehouse"),
    FieldDef::text("location", "Location"),
    FieldDef::text("manager", "Manager"),
    FieldDef::number("capacity", "Capacity"),
    FieldDef::number("used_capacity", "Used"),
    FieldDef::number("utilization", "Utilization %").without_filter(),
    FieldDef::status("status", "Status", WAREHOUSE_STATUSES),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "a002_warehouse",
    title: "Warehouse Report",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization() {
        let mut w = WarehouseDto {
            id: "1".into(),
            name: "Main".into(),
            location: String::new(),
            capacity: 200,
            used_capacity: 50,
            manager: None,
            status: "Active".into(),
        };
        assert_eq!(w.utilization(), 25.0);
        w.capacity = 0;
        assert_eq!(w.utilization(), 0.0);
    }
}

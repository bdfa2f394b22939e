use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a002_warehouse::{WarehouseDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for WarehouseDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::text(&self.name),
            "location" => FieldValue::text(&self.location),
            "manager" => FieldValue::opt_text(self.manager.as_deref()),
            "capacity" => FieldValue::Number(self.capacity as f64),
            "used_capacity" => FieldValue::Number(self.used_capacity as f64),
            "utilization" => FieldValue::Number(self.utilization()),
            "status" => FieldValue::text(&self.status),
            _ => FieldValue::Empty,
        }
    }
}

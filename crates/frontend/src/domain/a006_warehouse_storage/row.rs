use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a006_warehouse_storage::{WarehouseStorageDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for WarehouseStorageDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "warehouse_name" => FieldValue::text(&self.warehouse_name),
            "bin_location" => FieldValue::text(&self.bin_location),
            "sku" => FieldValue::text(&self.sku),
            "item_name" => FieldValue::text(&self.item_name),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "last_counted_at" => FieldValue::opt_text(self.last_counted_at.as_deref()),
            _ => FieldValue::Empty,
        }
    }
}

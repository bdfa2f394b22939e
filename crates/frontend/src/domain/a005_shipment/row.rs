use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a005_shipment::{ShipmentDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for ShipmentDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "tracking_number" => FieldValue::text(&self.tracking_number),
            "carrier" => FieldValue::text(&self.carrier),
            "destination" => FieldValue::text(&self.destination),
            "items_count" => FieldValue::Number(self.items_count as f64),
            "status" => FieldValue::text(&self.status),
            "shipped_at" => FieldValue::opt_text(self.shipped_at.as_deref()),
            "expected_at" => FieldValue::opt_text(self.expected_at.as_deref()),
            _ => FieldValue::Empty,
        }
    }
}

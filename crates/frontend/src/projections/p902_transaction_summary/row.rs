use crate::shared::table_state::{FieldValue, TableRow};
use contracts::projections::p902_transaction_summary::{TransactionSummaryDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for TransactionSummaryDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "item_name" => FieldValue::text(&self.item_name),
            "total_in" => FieldValue::Number(self.total_in as f64),
            "total_out" => FieldValue::Number(self.total_out as f64),
            "net" => FieldValue::Number(self.net as f64),
            "transactions" => FieldValue::Number(self.transactions as f64),
            "inbound_value" => FieldValue::Number(self.inbound_value),
            "outbound_value" => FieldValue::Number(self.outbound_value),
            "last_activity" => FieldValue::text(&self.last_activity),
            _ => FieldValue::Empty,
        }
    }
}

use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a001_inventory_item::{STATUS_LOW_STOCK, STATUS_OUT_OF_STOCK};
use contracts::projections::p901_low_stock::{LowStockItemDto, SCHEMA, TO_ORDER_FIELD};
use contracts::shared::table::TableSchema;
use contracts::usecases::u501_generate_purchase_order::PurchaseOrderLine;
use serde_json::Value;

/// Parses a "to order" input; negative and fractional values are rejected.
pub fn parse_to_order(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|v| *v >= 0)
}

fn override_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_to_order(s),
        _ => None,
    }
}

fn row_status(item: &LowStockItemDto) -> &str {
    if !item.status.is_empty() {
        &item.status
    } else if item.quantity <= 0 {
        STATUS_OUT_OF_STOCK
    } else {
        STATUS_LOW_STOCK
    }
}

/// Lines of a purchase order for the given rows; rows with nothing to order are left out.
pub fn purchase_order_lines<'a>(rows: impl IntoIterator<Item = &'a LowStockItemDto>) -> Vec<PurchaseOrderLine> {
    rows.into_iter()
        .filter(|item| item.effective_to_order() > 0)
        .map(|item| PurchaseOrderLine {
            item_id: item.id.clone(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            quantity: item.effective_to_order(),
            supplier: item.supplier.clone(),
        })
        .collect()
}

impl TableRow for LowStockItemDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "sku" => FieldValue::text(&self.sku),
            "name" => FieldValue::text(&self.name),
            "category" => FieldValue::text(&self.category),
            "supplier" => FieldValue::opt_text(self.supplier.as_deref()),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "reorder_level" => FieldValue::Number(self.reorder_level as f64),
            TO_ORDER_FIELD => FieldValue::Number(self.effective_to_order() as f64),
            "status" => FieldValue::text(row_status(self)),
            _ => FieldValue::Empty,
        }
    }

    fn apply_override(&mut self, field: &str, value: &Value) {
        if field != TO_ORDER_FIELD {
            return;
        }
        match override_quantity(value) {
            Some(quantity) => self.to_order = Some(quantity.max(0)),
            None => log::warn!("{}: ignoring override {} for {}", SCHEMA.id, value, self.id),
        }
    }
}

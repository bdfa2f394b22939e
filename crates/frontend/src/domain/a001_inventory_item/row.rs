use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a001_inventory_item::{InventoryItemDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for InventoryItemDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "sku" => FieldValue::text(&self.sku),
            "name" => FieldValue::text(&self.name),
            "category" => FieldValue::text(&self.category),
            "warehouse_name" => FieldValue::opt_text(self.warehouse_name.as_deref()),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "reorder_level" => FieldValue::Number(self.reorder_level as f64),
            "unit_price" => FieldValue::Number(self.unit_price),
            "status" => FieldValue::text(self.effective_status()),
            "updated_at" => FieldValue::text(&self.updated_at),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_state::TableState;
    use contracts::shared::table::{FilterSpec, FilterValue};

    fn item(id: &str, name: &str, quantity: i64) -> InventoryItemDto {
        InventoryItemDto {
            id: id.into(),
            sku: format!("SKU-{id}"),
            name: name.into(),
            category: "Hardware".into(),
            quantity,
            unit_price: 1.5,
            reorder_level: 10,
            warehouse_name: None,
            status: String::new(),
            updated_at: "2024-03-01T10:00:00Z".into(),
        }
    }

    #[test]
    fn test_status_filter_uses_derived_status() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(token, Ok(vec![item("1", "Bolt", 0), item("2", "Nut", 5), item("3", "Gear", 50)]));

        state.apply_filters(FilterSpec::new().with("status", FilterValue::exact("Low Stock")));
        let names: Vec<_> = state.current_view().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Nut"]);
    }

    #[test]
    fn test_missing_warehouse_is_empty() {
        assert_eq!(item("1", "Bolt", 1).field_value("warehouse_name"), FieldValue::Empty);
        assert_eq!(item("1", "Bolt", 1).field_value("quantity"), FieldValue::Number(1.0));
    }
}

use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a007_stock_transaction::{StockTransactionDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for StockTransactionDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "occurred_at" => FieldValue::text(&self.occurred_at),
            "reference" => FieldValue::text(&self.reference),
            "item_name" => FieldValue::text(&self.item_name),
            "direction" => FieldValue::text(self.direction.to_uppercase()),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "unit_cost" => FieldValue::Number(self.unit_cost),
            "total_cost" => FieldValue::Number(self.total_cost()),
            "warehouse_name" => FieldValue::text(&self.warehouse_name),
            "performed_by" => FieldValue::text(&self.performed_by),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_state::TableState;
    use contracts::shared::table::{FilterSpec, FilterValue};

    fn tx(id: &str, direction: &str, quantity: i64, unit_cost: f64) -> StockTransactionDto {
        StockTransactionDto {
            id: id.into(),
            reference: format!("R-{id}"),
            item_id: "bolt".into(),
            item_name: "Bolt".into(),
            direction: direction.into(),
            quantity,
            unit_cost,
            warehouse_name: "Main".into(),
            performed_by: "ops".into(),
            occurred_at: "2024-03-01T10:00:00Z".into(),
            notes: None,
        }
    }

    #[test]
    fn test_direction_filter_ignores_case_of_payload() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(token, Ok(vec![tx("1", "in", 1, 1.0), tx("2", "OUT", 1, 1.0), tx("3", "IN", 1, 1.0)]));

        state.apply_filters(FilterSpec::new().with("direction", FilterValue::exact("IN")));
        assert_eq!(state.filtered_len(), 2);
    }

    #[test]
    fn test_sort_by_total_cost() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(token, Ok(vec![tx("1", "IN", 10, 2.0), tx("2", "IN", 1, 5.0), tx("3", "OUT", 3, 1.0)]));

        state.sort_by("total_cost");
        let ids: Vec<_> = state.current_view().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }
}

use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a004_transfer::{TransferDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for TransferDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "reference" => FieldValue::text(&self.reference),
            "item_name" => FieldValue::text(&self.item_name),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "from_warehouse" => FieldValue::text(&self.from_warehouse),
            "to_warehouse" => FieldValue::text(&self.to_warehouse),
            "status" => FieldValue::text(&self.status),
            "requested_at" => FieldValue::text(&self.requested_at),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_state::TableState;
    use contracts::shared::table::{FilterSpec, FilterValue};

    fn transfer(id: &str, quantity: i64, status: &str) -> TransferDto {
        TransferDto {
            id: id.into(),
            reference: format!("TR-{id}"),
            item_name: "Bolt".into(),
            quantity,
            from_warehouse: "North".into(),
            to_warehouse: "South".into(),
            status: status.into(),
            requested_at: "2024-03-01".into(),
        }
    }

    #[test]
    fn test_quantity_range_and_status() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(
            token,
            Ok(vec![
                transfer("1", 5, "Pending"),
                transfer("2", 50, "In Transit"),
                transfer("3", 500, "In Transit"),
            ]),
        );

        state.apply_filters(
            FilterSpec::new()
                .with("quantity", FilterValue::range(Some(10.0), Some(100.0)))
                .with("status", FilterValue::exact("In Transit")),
        );
        let ids: Vec<_> = state.current_view().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}

use crate::shared::table_state::{FieldValue, TableRow};
use contracts::domain::a003_activity_log::{ActivityLogDto, SCHEMA};
use contracts::shared::table::TableSchema;

impl TableRow for ActivityLogDto {
    const SCHEMA: TableSchema = SCHEMA;

    fn row_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "timestamp" => FieldValue::text(&self.timestamp),
            "user" => FieldValue::text(&self.user),
            "action" => FieldValue::text(&self.action),
            "entity" => FieldValue::text(&self.entity),
            "details" => FieldValue::text(&self.details),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_state::TableState;
    use contracts::shared::table::{FilterSpec, FilterValue};

    fn entry(id: &str, user: &str, action: &str, timestamp: &str) -> ActivityLogDto {
        ActivityLogDto {
            id: id.into(),
            timestamp: timestamp.into(),
            user: user.into(),
            action: action.into(),
            entity: "Inventory".into(),
            details: format!("{action} by {user}"),
        }
    }

    #[test]
    fn test_user_and_action_filters_combine() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(
            token,
            Ok(vec![
                entry("1", "anna", "CREATE", "2024-03-01T10:00:00Z"),
                entry("2", "Anna", "DELETE", "2024-03-02T10:00:00Z"),
                entry("3", "oleg", "DELETE", "2024-03-03T10:00:00Z"),
            ]),
        );

        state.apply_filters(
            FilterSpec::new()
                .with("user", FilterValue::contains("ANN"))
                .with("action", FilterValue::exact("DELETE")),
        );
        let ids: Vec<_> = state.current_view().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_newest_first_on_second_click() {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(
            token,
            Ok(vec![
                entry("1", "a", "CREATE", "2024-03-02T10:00:00Z"),
                entry("2", "a", "CREATE", "2024-03-03T10:00:00Z"),
                entry("3", "a", "CREATE", "2024-03-01T10:00:00Z"),
            ]),
        );
        state.sort_by("timestamp");
        state.sort_by("timestamp");
        let ids: Vec<_> = state.current_view().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }
}

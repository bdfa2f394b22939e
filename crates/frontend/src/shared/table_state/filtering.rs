use super::row::TableRow;
use contracts::shared::table::{FilterSpec, FilterValue};

/// True when the row satisfies every active constraint.
pub fn matches<T: TableRow>(row: &T, filters: &FilterSpec) -> bool {
    filters
        .active()
        .all(|(field, constraint)| satisfies(row, field, constraint))
}

fn satisfies<T: TableRow>(row: &T, field: &str, constraint: &FilterValue) -> bool {
    let value = row.field_value(field);
    match constraint {
        FilterValue::Contains { pattern } => value
            .display_text()
            .to_lowercase()
            .contains(&pattern.trim().to_lowercase()),
        FilterValue::Range { min, max } => {
            let n = value.as_number();
            min.map_or(true, |lo| lo <= n) && max.map_or(true, |hi| n <= hi)
        }
        FilterValue::Exact { value: expected } => value.display_text() == *expected,
    }
}

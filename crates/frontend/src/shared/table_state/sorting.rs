use super::row::TableRow;
use contracts::shared::table::{FieldDef, SortDirection, SortSpec};
use std::cmp::Ordering;

/// Compares two rows by one field using the field's natural type.
pub fn compare_rows<T: TableRow>(a: &T, b: &T, field: &FieldDef) -> Ordering {
    let left = a.field_value(field.id);
    let right = b.field_value(field.id);
    if field.kind.is_numeric() {
        left.as_number().total_cmp(&right.as_number())
    } else {
        left.display_text()
            .to_lowercase()
            .cmp(&right.display_text().to_lowercase())
    }
}

/// Indices of `rows` in display order.
///
/// Unsorted keeps insertion order. Descending is the exact reverse of the
/// stable ascending order, so flipping the direction reverses the table.
pub fn sorted_indices<T: TableRow>(rows: &[T], sort: &SortSpec) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let (Some(column), Some(direction)) = (sort.column(), sort.direction()) else {
        return indices;
    };
    let Some(field) = T::SCHEMA.field(column) else {
        return indices;
    };

    indices.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], field));
    if direction == SortDirection::Desc {
        indices.reverse();
    }
    indices
}

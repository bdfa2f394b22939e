use contracts::shared::table::TableSchema;
use serde_json::Value;

/// Value of one field of a row, as seen by sorting, filtering and export
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Empty,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Empty,
        }
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Empty)
    }

    /// Numeric view; missing or non-numeric values count as 0.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) if n.is_finite() => *n,
            FieldValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Plain text, no locale formatting (used by search and exact match)
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_plain_number(*n),
            FieldValue::Empty => String::new(),
        }
    }
}

fn format_plain_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A record shown by a table screen.
///
/// Every screen pairs its DTO with a static [`TableSchema`]; the engine never
/// looks at the DTO's fields directly.
pub trait TableRow: Clone + Send + Sync + 'static {
    const SCHEMA: TableSchema;

    /// Stable unique identifier
    fn row_id(&self) -> String;

    fn field_value(&self, field: &str) -> FieldValue;

    /// Replaces a fetched value with a persisted override. Rows without
    /// editable fields ignore overrides.
    fn apply_override(&mut self, _field: &str, _value: &Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(FieldValue::Number(2.5).as_number(), 2.5);
        assert_eq!(FieldValue::text(" 7 ").as_number(), 7.0);
        assert_eq!(FieldValue::text("n/a").as_number(), 0.0);
        assert_eq!(FieldValue::Empty.as_number(), 0.0);
        assert_eq!(FieldValue::Number(f64::NAN).as_number(), 0.0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(FieldValue::Number(12.0).display_text(), "12");
        assert_eq!(FieldValue::Number(12.25).display_text(), "12.25");
        assert_eq!(FieldValue::opt_text(None).display_text(), "");
    }
}

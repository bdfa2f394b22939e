use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Constraint on a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterValue {
    /// Case-insensitive substring containment
    Contains { pattern: String },
    /// Inclusive range: min <= value <= max
    Range { min: Option<f64>, max: Option<f64> },
    /// Case-sensitive equality
    Exact { value: String },
}

impl FilterValue {
    pub fn contains(pattern: impl Into<String>) -> Self {
        FilterValue::Contains {
            pattern: pattern.into(),
        }
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        FilterValue::Range { min, max }
    }

    pub fn exact(value: impl Into<String>) -> Self {
        FilterValue::Exact {
            value: value.into(),
        }
    }

    /// Builds a range from raw input strings; unparsable or empty bounds are dropped.
    pub fn range_from_inputs(min: &str, max: &str) -> Self {
        let parse = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        FilterValue::Range {
            min: parse(min),
            max: parse(max),
        }
    }

    /// A blank value puts no constraint on its field.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Contains { pattern } => pattern.trim().is_empty(),
            FilterValue::Range { min, max } => min.is_none() && max.is_none(),
            FilterValue::Exact { value } => value.is_empty(),
        }
    }

    /// Short text for filter chips
    pub fn display_text(&self, field_label: &str) -> String {
        match self {
            FilterValue::Contains { pattern } => {
                format!("{} contains \"{}\"", field_label, pattern.trim())
            }
            FilterValue::Range { min, max } => match (min, max) {
                (Some(lo), Some(hi)) => format!("{}: {} – {}", field_label, lo, hi),
                (Some(lo), None) => format!("{} ≥ {}", field_label, lo),
                (None, Some(hi)) => format!("{} ≤ {}", field_label, hi),
                (None, None) => format!("{}: any", field_label),
            },
            FilterValue::Exact { value } => format!("{} = {}", field_label, value),
        }
    }
}

/// Field id → constraint. All constraints are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec {
    constraints: BTreeMap<String, FilterValue>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: FilterValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: FilterValue) {
        self.constraints.insert(field.into(), value);
    }

    pub fn remove(&mut self, field: &str) {
        self.constraints.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.constraints.get(field)
    }

    /// Constraints that actually restrict rows (blank ones are skipped)
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.constraints
            .iter()
            .filter(|(_, v)| !v.is_blank())
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

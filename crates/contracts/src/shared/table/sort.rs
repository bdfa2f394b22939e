use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column. `column` and `direction` are either both set or both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    column: Option<String>,
    direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(column.into()),
            direction: Some(direction),
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    pub fn is_sorted(&self) -> bool {
        self.column.is_some()
    }

    /// Direction for `column` if it is the active one
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        if self.column.as_deref() == Some(column) {
            self.direction
        } else {
            None
        }
    }

    /// Next state after a click on `column`:
    /// unsorted → asc → desc → unsorted. Another column always starts at asc.
    pub fn cycle(&self, column: &str) -> Self {
        match self.direction_of(column) {
            None => Self::new(column, SortDirection::Asc),
            Some(SortDirection::Asc) => Self::new(column, SortDirection::Desc),
            Some(SortDirection::Desc) => Self::unsorted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_state_cycle() {
        let s0 = SortSpec::unsorted();
        let s1 = s0.cycle("name");
        assert_eq!(s1.direction_of("name"), Some(SortDirection::Asc));
        let s2 = s1.cycle("name");
        assert_eq!(s2.direction_of("name"), Some(SortDirection::Desc));
        let s3 = s2.cycle("name");
        assert!(!s3.is_sorted());
        assert_eq!(s3.direction(), None);
    }

    #[test]
    fn test_new_column_resets_other() {
        let s = SortSpec::new("name", SortDirection::Desc).cycle("qty");
        assert_eq!(s.column(), Some("qty"));
        assert_eq!(s.direction(), Some(SortDirection::Asc));
        assert_eq!(s.direction_of("name"), None);
    }
}

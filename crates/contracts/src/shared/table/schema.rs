/// How the values of a column are typed, compared and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, compared case-insensitively
    Text,
    /// Integer or decimal quantity
    Number,
    /// Monetary amount, two decimals
    Money,
    /// ISO 8601 date or timestamp (lexicographic order is chronological)
    Date,
    /// One of a fixed set of values (status columns)
    Enum(&'static [&'static str]),
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Money)
    }
}

/// Which filter control a column offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    None,
    /// Case-insensitive substring search
    Contains,
    /// Inclusive numeric range, both bounds optional
    Range,
    /// Case-sensitive equality against the enumerated values
    Exact,
}

/// Definition of a single column of a table screen
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Field identifier, e.g. "quantity"
    pub id: &'static str,
    /// Display label, used for headers and exports
    pub label: &'static str,
    pub kind: FieldKind,
    pub sortable: bool,
    pub filter: FilterKind,
}

impl FieldDef {
    pub const fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Text,
            sortable: true,
            filter: FilterKind::Contains,
        }
    }

    pub const fn number(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Number,
            sortable: true,
            filter: FilterKind::Range,
        }
    }

    pub const fn money(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Money,
            sortable: true,
            filter: FilterKind::Range,
        }
    }

    pub const fn date(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Date,
            sortable: true,
            filter: FilterKind::None,
        }
    }

    pub const fn status(
        id: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::Enum(values),
            sortable: true,
            filter: FilterKind::Exact,
        }
    }

    /// Column that is shown but neither sorted nor filtered
    pub const fn plain(mut self) -> Self {
        self.sortable = false;
        self.filter = FilterKind::None;
        self
    }

    pub const fn without_filter(mut self) -> Self {
        self.filter = FilterKind::None;
        self
    }
}

/// Declared schema of one table screen
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Logical table id, also the prefix of persistence keys (e.g. "p901_low_stock")
    pub id: &'static str,
    /// Human-readable title (report header)
    pub title: &'static str,
    pub fields: &'static [FieldDef],
}

impl TableSchema {
    pub fn field(&self, id: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn is_sortable(&self, id: &str) -> bool {
        self.field(id).map(|f| f.sortable).unwrap_or(false)
    }

    pub fn filterable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.filter != FilterKind::None)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    /// Storage key of the persisted selection set
    pub fn selection_key(&self) -> String {
        format!("{}_selection_v1", self.id)
    }

    /// Storage key of the persisted per-row overrides
    pub fn overrides_key(&self) -> String {
        format!("{}_overrides_v1", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: &[&str] = &["Open", "Closed"];
    const FIELDS: &[FieldDef] = &[
        FieldDef::text("name", "Name"),
        FieldDef::number("qty", "Qty"),
        FieldDef::status("status", "Status", STATUSES),
        FieldDef::text("notes", "Notes").plain(),
    ];
    const SCHEMA: TableSchema = TableSchema {
        id: "demo",
        title: "Demo",
        fields: FIELDS,
    };

    #[test]
    fn test_lookup_and_flags() {
        assert!(SCHEMA.is_sortable("qty"));
        assert!(!SCHEMA.is_sortable("notes"));
        assert!(!SCHEMA.is_sortable("missing"));
        let filterable: Vec<_> = SCHEMA.filterable_fields().map(|f| f.id).collect();
        assert_eq!(filterable, vec!["name", "qty", "status"]);
        assert_eq!(SCHEMA.field("status").unwrap().kind, FieldKind::Enum(STATUSES));
    }

    #[test]
    fn test_storage_keys_are_per_table() {
        assert_eq!(SCHEMA.selection_key(), "demo_selection_v1");
        assert_eq!(SCHEMA.overrides_key(), "demo_overrides_v1");
    }
}

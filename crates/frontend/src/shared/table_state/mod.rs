//! Состояние табличного экрана
//!
//! `TableState` turns the fetched dataset into the rows of the current page:
//! three-state sort, AND-combined filters, pagination, a persisted selection
//! that is independent of the current view, and persisted per-row overrides.
//! It does no I/O besides the injected key-value store; the page performs the
//! fetch and hands the result back through [`TableState::finish_load`].

pub mod filtering;
pub mod pagination;
pub mod request;
pub mod row;
pub mod selection;
pub mod sorting;

pub use pagination::{page_window, PageItem, PageSpec};
pub use request::{MutationGuard, RequestToken, RequestTracker};
pub use row::{FieldValue, TableRow};
pub use selection::{GlobalSelect, SelectAllState};

use crate::shared::error::TableError;
use crate::shared::storage::{KeyValueStore, OverrideMap, OverrideStore, SelectionStore};
use contracts::shared::table::{FilterSpec, SortSpec, TableSchema};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct TableState<T: TableRow> {
    /// Rows as fetched, before overrides
    fetched: Vec<T>,
    /// Canonical collection: fetched rows with overrides applied, insertion order
    rows: Vec<T>,
    /// Indices into `rows` after sort and filter
    view: Vec<usize>,
    sort: SortSpec,
    filters: FilterSpec,
    page: PageSpec,
    selected: BTreeSet<String>,
    overrides: OverrideMap,
    selection_store: Option<SelectionStore>,
    override_store: Option<OverrideStore>,
    fallback: Option<Vec<T>>,
    requests: RequestTracker,
    /// Select-all id listings; bumped by every manual selection change
    select_all_requests: RequestTracker,
    loading: bool,
    loaded: bool,
    is_fallback: bool,
    error: Option<TableError>,
}

impl<T: TableRow> TableState<T> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            fetched: Vec::new(),
            rows: Vec::new(),
            view: Vec::new(),
            sort: SortSpec::unsorted(),
            filters: FilterSpec::new(),
            page: PageSpec::new(items_per_page),
            selected: BTreeSet::new(),
            overrides: OverrideMap::new(),
            selection_store: None,
            override_store: None,
            fallback: None,
            requests: RequestTracker::default(),
            select_all_requests: RequestTracker::default(),
            loading: false,
            loaded: false,
            is_fallback: false,
            error: None,
        }
    }

    /// Persists selection and overrides under the schema's keys.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        let selection = SelectionStore::new(store.clone(), T::SCHEMA.selection_key());
        let overrides = OverrideStore::new(store, T::SCHEMA.overrides_key());
        self.selected = selection.load();
        self.overrides = overrides.load();
        self.selection_store = Some(selection);
        self.override_store = Some(overrides);
        self
    }

    /// Rows shown when the first load fails. They are flagged via `is_fallback`
    /// and the error stays visible.
    pub fn with_fallback(mut self, rows: Vec<T>) -> Self {
        self.fallback = Some(rows);
        self
    }

    pub fn schema(&self) -> TableSchema {
        T::SCHEMA
    }

    // ---------------------------------------------------------------------
    // Load
    // ---------------------------------------------------------------------

    /// Marks a fetch as started; any earlier in-flight fetch becomes stale.
    pub fn begin_load(&mut self) -> RequestToken {
        self.loading = true;
        self.requests.issue()
    }

    /// Applies the result of the fetch identified by `token`.
    ///
    /// Returns `false` when a newer fetch was started in the meantime, in which
    /// case the result is dropped.
    pub fn finish_load(&mut self, token: RequestToken, result: Result<Vec<T>, TableError>) -> bool {
        if !self.requests.is_current(token) {
            log::debug!("{}: dropping stale response {:?}", T::SCHEMA.id, token);
            return false;
        }
        self.loading = false;

        match result {
            Ok(rows) => {
                log::debug!("{}: loaded {} rows", T::SCHEMA.id, rows.len());
                self.fetched = rows;
                self.loaded = true;
                self.is_fallback = false;
                self.error = None;
                if let Some(store) = &self.selection_store {
                    self.selected = store.load();
                }
                if let Some(store) = &self.override_store {
                    self.overrides = store.load();
                }
                self.rebuild_rows();
            }
            Err(e) => {
                log::warn!("{}: {}", T::SCHEMA.id, e);
                if !self.loaded {
                    self.fetched = self.fallback.clone().unwrap_or_default();
                    self.is_fallback = self.fallback.is_some();
                    self.rebuild_rows();
                }
                self.error = Some(e);
            }
        }
        true
    }

    fn rebuild_rows(&mut self) {
        self.rows = self.fetched.clone();
        for row in self.rows.iter_mut() {
            if let Some(fields) = self.overrides.get(&row.row_id()) {
                for (field, value) in fields {
                    row.apply_override(field, value);
                }
            }
        }
        self.derive_view();
    }

    fn derive_view(&mut self) {
        let mut view = sorting::sorted_indices(&self.rows, &self.sort);
        if !self.filters.is_empty() {
            view.retain(|&i| filtering::matches(&self.rows[i], &self.filters));
        }
        self.view = view;
        self.page.set_total_items(self.view.len());
    }

    // ---------------------------------------------------------------------
    // Sort / filter
    // ---------------------------------------------------------------------

    /// unsorted → asc → desc → unsorted; unknown or non-sortable columns are ignored.
    pub fn sort_by(&mut self, column: &str) {
        if !T::SCHEMA.is_sortable(column) {
            log::debug!("{}: '{}' is not sortable", T::SCHEMA.id, column);
            return;
        }
        self.sort = self.sort.cycle(column);
        self.page.reset();
        self.derive_view();
    }

    pub fn apply_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.page.reset();
        self.derive_view();
    }

    pub fn clear_filters(&mut self) {
        self.apply_filters(FilterSpec::new());
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.page.go_to(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.page.go_to(self.page.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.page.go_to(self.page.current_page.saturating_sub(1))
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if self.page.set_items_per_page(items_per_page) {
            self.page.set_total_items(self.view.len());
        }
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        self.page.window()
    }

    // ---------------------------------------------------------------------
    // View
    // ---------------------------------------------------------------------

    /// Rows of the current page after sort, filter and pagination
    pub fn current_view(&self) -> Vec<&T> {
        self.view[self.page.range()]
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    /// Exactly the rows of the current page; export never sees other pages.
    pub fn export_rows(&self) -> Vec<T> {
        self.current_view().into_iter().cloned().collect()
    }

    /// Rows passing the filters in display order, all pages
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.view.iter().map(|&i| &self.rows[i]).collect()
    }

    fn visible_ids(&self) -> Vec<String> {
        self.current_view().iter().map(|r| r.row_id()).collect()
    }

    /// Number of rows passing the filters
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    fn write_selection(&mut self, ids: &[String], selected: bool) -> Result<(), TableError> {
        for id in ids {
            if selected {
                self.selected.insert(id.clone());
            } else {
                self.selected.remove(id);
            }
        }
        if let Some(store) = &self.selection_store {
            self.selected = store.set_many(ids.iter().map(String::as_str), selected)?;
        }
        Ok(())
    }

    pub fn toggle_select(&mut self, id: &str) -> Result<(), TableError> {
        self.select_all_requests.issue();
        let selected = !self.selected.contains(id);
        self.write_selection(&[id.to_string()], selected)
    }

    /// Selects the whole current page, or deselects it when it is fully
    /// selected. Ids outside the page keep their state.
    pub fn toggle_select_all_visible(&mut self) -> Result<(), TableError> {
        let ids = self.visible_ids();
        if ids.is_empty() {
            return Ok(());
        }
        self.select_all_requests.issue();
        let all_selected = ids.iter().all(|id| self.selected.contains(id));
        self.write_selection(&ids, !all_selected)
    }

    /// Dataset-wide toggle: clears a non-empty selection, otherwise asks the
    /// caller for the full id listing.
    pub fn begin_select_all_global(&mut self) -> Result<GlobalSelect, TableError> {
        if self.selected.is_empty() {
            Ok(GlobalSelect::NeedsIds(self.select_all_requests.issue()))
        } else {
            self.clear_selection()?;
            Ok(GlobalSelect::Cleared)
        }
    }

    /// Selects `ids` unless the selection changed since `token` was issued.
    ///
    /// Returns `false` when the listing arrived too late and was dropped.
    pub fn finish_select_all_global(
        &mut self,
        token: RequestToken,
        ids: Vec<String>,
    ) -> Result<bool, TableError> {
        if !self.select_all_requests.is_current(token) {
            log::debug!("{}: dropping stale id listing {:?}", T::SCHEMA.id, token);
            return Ok(false);
        }
        log::debug!("{}: selecting {} ids", T::SCHEMA.id, ids.len());
        self.write_selection(&ids, true)?;
        Ok(true)
    }

    pub fn clear_selection(&mut self) -> Result<(), TableError> {
        self.select_all_requests.issue();
        self.selected.clear();
        match &self.selection_store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    /// "Select all" checkbox state for the current page
    pub fn select_all_state(&self) -> SelectAllState {
        let ids = self.visible_ids();
        SelectAllState::of(ids.iter().map(String::as_str), &self.selected)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Includes ids of rows that are not loaded
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Loaded rows that are selected, in insertion order
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|r| self.selected.contains(&r.row_id()))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Overrides
    // ---------------------------------------------------------------------

    /// Stores `value` for `field` of row `id`; it wins over the fetched value
    /// on this and every later load.
    pub fn persist_override(&mut self, id: &str, field: &str, value: Value) -> Result<(), TableError> {
        match &self.override_store {
            Some(store) => self.overrides = store.set(id, field, value)?,
            None => {
                self.overrides
                    .entry(id.to_string())
                    .or_default()
                    .insert(field.to_string(), value);
            }
        }
        self.rebuild_rows();
        Ok(())
    }

    /// Drops all overrides of this table and restores the fetched values.
    pub fn reset_overrides(&mut self) -> Result<(), TableError> {
        self.overrides.clear();
        self.rebuild_rows();
        match &self.override_store {
            Some(store) => store.reset(),
            None => Ok(()),
        }
    }

    pub fn override_of(&self, id: &str, field: &str) -> Option<&Value> {
        self.overrides.get(id)?.get(field)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn page(&self) -> PageSpec {
        self.page
    }

    pub fn error(&self) -> Option<&TableError> {
        self.error.as_ref()
    }

    pub fn set_error(&mut self, error: Option<TableError>) {
        self.error = error;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use contracts::shared::table::{FieldDef, FilterValue, SortDirection};
    use serde_json::json;

    const STATUSES: &[&str] = &["In Stock", "Low Stock", "Out of Stock"];
    const FIELDS: &[FieldDef] = &[
        FieldDef::text("name", "Name"),
        FieldDef::number("qty", "Qty"),
        FieldDef::status("status", "Status", STATUSES),
        FieldDef::text("note", "Note").plain(),
    ];

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: String,
        qty: Option<f64>,
        status: String,
    }

    impl TableRow for Item {
        const SCHEMA: TableSchema = TableSchema {
            id: "test_items",
            title: "Items",
            fields: FIELDS,
        };

        fn row_id(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, field: &str) -> FieldValue {
            match field {
                "name" => FieldValue::text(&self.name),
                "qty" => FieldValue::opt_number(self.qty),
                "status" => FieldValue::text(&self.status),
                _ => FieldValue::Empty,
            }
        }

        fn apply_override(&mut self, field: &str, value: &Value) {
            if field == "qty" {
                self.qty = value.as_f64();
            }
        }
    }

    fn item(id: u32, name: &str, qty: f64, status: &str) -> Item {
        Item {
            id,
            name: name.into(),
            qty: Some(qty),
            status: status.into(),
        }
    }

    fn numbered(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|i| item(i, &format!("Item {i:02}"), i as f64, "In Stock"))
            .collect()
    }

    fn loaded(rows: Vec<Item>, per_page: usize) -> TableState<Item> {
        let mut state = TableState::new(per_page);
        let token = state.begin_load();
        assert!(state.finish_load(token, Ok(rows)));
        state
    }

    fn names(state: &TableState<Item>) -> Vec<String> {
        state.current_view().iter().map(|r| r.name.clone()).collect()
    }

    fn ids(state: &TableState<Item>) -> Vec<u32> {
        state.current_view().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut state = loaded(
            vec![
                item(1, "Banana", 1.0, "In Stock"),
                item(2, "apple", 2.0, "In Stock"),
                item(3, "Cherry", 3.0, "In Stock"),
            ],
            10,
        );
        state.sort_by("name");
        assert_eq!(names(&state), vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_cycle_reverses_and_restores() {
        let rows = vec![
            item(1, "b", 5.0, "In Stock"),
            item(2, "a", 1.0, "In Stock"),
            item(3, "c", 5.0, "In Stock"),
            item(4, "d", 3.0, "In Stock"),
            item(5, "e", 1.0, "In Stock"),
        ];
        for column in ["name", "qty", "status"] {
            let mut state = loaded(rows.clone(), 10);
            let original = ids(&state);
            state.sort_by(column);
            let asc = ids(&state);
            state.sort_by(column);
            let mut desc = ids(&state);
            desc.reverse();
            assert_eq!(asc, desc, "column {column}");
            state.sort_by(column);
            assert_eq!(ids(&state), original, "column {column}");
            assert!(!state.sort().is_sorted());
        }
    }

    #[test]
    fn test_numeric_sort_treats_missing_as_zero() {
        let mut rows = vec![item(1, "a", 10.0, "In Stock"), item(2, "b", -1.0, "In Stock")];
        rows.push(Item {
            qty: None,
            ..item(3, "c", 0.0, "In Stock")
        });
        let mut state = loaded(rows, 10);
        state.sort_by("qty");
        assert_eq!(ids(&state), vec![2, 3, 1]);
        assert_eq!(state.sort().direction(), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_ignores_unknown_and_plain_columns() {
        let mut state = loaded(numbered(3), 10);
        state.sort_by("note");
        state.sort_by("nope");
        assert!(!state.sort().is_sorted());
    }

    #[test]
    fn test_sort_and_filter_reset_page() {
        let mut state = loaded(numbered(25), 10);
        state.go_to_page(3);
        state.sort_by("qty");
        assert_eq!(state.page().current_page, 1);
        state.go_to_page(2);
        state.apply_filters(FilterSpec::new());
        assert_eq!(state.page().current_page, 1);
    }

    #[test]
    fn test_blank_filters_are_identity() {
        let mut state = loaded(numbered(12), 100);
        state.sort_by("qty");
        state.sort_by("qty");
        let before = ids(&state);
        state.apply_filters(
            FilterSpec::new()
                .with("name", FilterValue::contains("  "))
                .with("qty", FilterValue::range(None, None))
                .with("status", FilterValue::exact("")),
        );
        assert_eq!(ids(&state), before);
        assert_eq!(state.filtered_len(), 12);
    }

    #[test]
    fn test_range_filter_is_sound() {
        let rows = numbered(20);
        let mut state = loaded(rows.clone(), 100);
        state.apply_filters(FilterSpec::new().with("qty", FilterValue::range(Some(4.0), Some(9.5))));
        let kept: Vec<u32> = ids(&state);
        for row in &rows {
            let q = row.qty.unwrap_or(0.0);
            let inside = (4.0..=9.5).contains(&q);
            assert_eq!(kept.contains(&row.id), inside, "row {}", row.id);
        }
        assert_eq!(kept, vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut state = loaded(
            vec![
                item(1, "Steel bolt", 3.0, "Low Stock"),
                item(2, "Steel nut", 30.0, "In Stock"),
                item(3, "Brass BOLT", 2.0, "Low Stock"),
                item(4, "Washer", 1.0, "low stock"),
            ],
            10,
        );
        state.apply_filters(
            FilterSpec::new()
                .with("name", FilterValue::contains("bolt"))
                .with("status", FilterValue::exact("Low Stock")),
        );
        assert_eq!(ids(&state), vec![1, 3]);
    }

    #[test]
    fn test_status_filter_scenario() {
        let mut state = loaded(
            vec![
                item(1, "a", 1.0, "In Stock"),
                item(2, "b", 1.0, "Low Stock"),
                item(3, "c", 1.0, "Out of Stock"),
                item(4, "d", 1.0, "Low Stock"),
                item(5, "e", 1.0, "In Stock"),
            ],
            10,
        );
        state.apply_filters(FilterSpec::new().with("status", FilterValue::exact("Low Stock")));
        assert_eq!(ids(&state), vec![2, 4]);
        assert_eq!(state.page().total_items, 2);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_filter_preserves_sort_order() {
        let mut state = loaded(numbered(10), 100);
        state.sort_by("qty");
        state.sort_by("qty");
        state.apply_filters(FilterSpec::new().with("qty", FilterValue::range(Some(3.0), Some(5.0))));
        assert_eq!(ids(&state), vec![5, 4, 3]);
    }

    #[test]
    fn test_clear_filters_is_idempotent() {
        let mut state = loaded(numbered(15), 10);
        state.apply_filters(FilterSpec::new().with("qty", FilterValue::range(Some(12.0), None)));
        state.clear_filters();
        let once = (ids(&state), state.page(), state.filters().clone());
        state.clear_filters();
        assert_eq!((ids(&state), state.page(), state.filters().clone()), once);
        assert_eq!(state.filtered_len(), 15);
    }

    #[test]
    fn test_pagination_scenario() {
        let mut state = loaded(numbered(25), 10);
        assert_eq!(state.total_pages(), 3);
        assert!(!state.go_to_page(4));
        assert_eq!(state.page().current_page, 1);
        assert!(state.go_to_page(2));
        assert_eq!(ids(&state), (11..=20).collect::<Vec<_>>());
        state.set_items_per_page(25);
        assert_eq!(state.page().current_page, 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_items_per_page_uses_filtered_length() {
        let mut state = loaded(numbered(40), 10);
        state.apply_filters(FilterSpec::new().with("qty", FilterValue::range(None, Some(15.0))));
        state.set_items_per_page(5);
        assert_eq!(state.total_pages(), 3);
        state.set_items_per_page(0);
        assert_eq!(state.page().items_per_page, 5);
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        let mut state = loaded(numbered(15), 10);
        assert!(!state.previous_page());
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(ids(&state), (11..=15).collect::<Vec<_>>());
        assert!(state.previous_page());
    }

    #[test]
    fn test_toggle_select_all_visible_twice_restores() {
        let mut state = loaded(numbered(25), 10);
        state.toggle_select("15").unwrap();
        let before = state.selected_ids();

        state.toggle_select_all_visible().unwrap();
        assert_eq!(state.select_all_state(), SelectAllState::All);
        assert!(state.is_selected("15"));
        state.toggle_select_all_visible().unwrap();
        assert_eq!(state.selected_ids(), before);

        // from a fully selected page
        state.toggle_select_all_visible().unwrap();
        let full = state.selected_ids();
        state.toggle_select_all_visible().unwrap();
        state.toggle_select_all_visible().unwrap();
        assert_eq!(state.selected_ids(), full);
    }

    #[test]
    fn test_select_all_visible_only_touches_current_page() {
        let mut state = loaded(numbered(25), 10);
        state.toggle_select("21").unwrap();
        for id in 1..=10 {
            state.toggle_select(&id.to_string()).unwrap();
        }
        assert_eq!(state.select_all_state(), SelectAllState::All);
        state.toggle_select_all_visible().unwrap();
        assert_eq!(state.select_all_state(), SelectAllState::None);
        assert_eq!(state.selected_ids(), vec!["21"]);
        state.toggle_select("2").unwrap();
        assert_eq!(state.select_all_state(), SelectAllState::Some);
    }

    #[test]
    fn test_select_all_global_two_phases() {
        let mut state = loaded(numbered(5), 2);
        let GlobalSelect::NeedsIds(token) = state.begin_select_all_global().unwrap() else {
            panic!("expected an id request");
        };
        assert!(state
            .finish_select_all_global(token, vec!["1".into(), "2".into(), "99".into()])
            .unwrap());
        assert_eq!(state.selected_count(), 3);
        assert_eq!(state.selected_rows().len(), 2);

        assert_eq!(state.begin_select_all_global().unwrap(), GlobalSelect::Cleared);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_late_id_listing_does_not_override_newer_selection() {
        let mut state = loaded(numbered(5), 2);
        let GlobalSelect::NeedsIds(token) = state.begin_select_all_global().unwrap() else {
            panic!("expected an id request");
        };
        state.toggle_select("3").unwrap();
        assert_eq!(state.begin_select_all_global().unwrap(), GlobalSelect::Cleared);

        let all: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
        assert!(!state.finish_select_all_global(token, all.clone()).unwrap());
        assert_eq!(state.selected_count(), 0);

        // a fresh request is honoured
        let GlobalSelect::NeedsIds(token) = state.begin_select_all_global().unwrap() else {
            panic!("expected an id request");
        };
        assert!(state.finish_select_all_global(token, all).unwrap());
        assert_eq!(state.selected_count(), 5);
    }

    #[test]
    fn test_selection_survives_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut first = TableState::<Item>::new(10).with_store(store.clone());
        let token = first.begin_load();
        first.finish_load(token, Ok(numbered(3)));
        first.toggle_select("2").unwrap();
        first.toggle_select("404").unwrap();

        let mut second = TableState::<Item>::new(10).with_store(store.clone());
        assert_eq!(second.selected_ids(), vec!["2", "404"]);
        let token = second.begin_load();
        second.finish_load(token, Ok(numbered(3)));
        assert!(second.is_selected("2"));

        // a concurrent writer is merged, not overwritten
        second.toggle_select("3").unwrap();
        first.toggle_select("1").unwrap();
        assert_eq!(first.selected_ids(), vec!["1", "2", "3", "404"]);

        first.clear_selection().unwrap();
        assert!(TableState::<Item>::new(10).with_store(store).selected_ids().is_empty());
    }

    #[test]
    fn test_overlapping_fetches_keep_latest() {
        let mut state = TableState::<Item>::new(10);
        let a = state.begin_load();
        let b = state.begin_load();
        assert!(state.finish_load(b, Ok(vec![item(2, "from B", 1.0, "In Stock")])));
        assert!(!state.finish_load(a, Ok(vec![item(1, "from A", 1.0, "In Stock")])));
        assert_eq!(names(&state), vec!["from B"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut state = TableState::<Item>::new(10);
        let a = state.begin_load();
        let b = state.begin_load();
        state.finish_load(b, Ok(numbered(2)));
        assert!(!state.finish_load(a, Err(TableError::Timeout(15000))));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_first_load_uses_fallback() {
        let mut state = TableState::<Item>::new(10).with_fallback(numbered(2));
        let token = state.begin_load();
        state.finish_load(token, Err(TableError::Fetch("HTTP 500".into())));
        assert!(state.is_fallback());
        assert!(!state.is_loaded());
        assert_eq!(state.current_view().len(), 2);
        assert_eq!(state.error(), Some(&TableError::Fetch("HTTP 500".into())));

        let token = state.begin_load();
        state.finish_load(token, Ok(numbered(4)));
        assert!(!state.is_fallback());
        assert!(state.error().is_none());
        assert_eq!(state.current_view().len(), 4);
    }

    #[test]
    fn test_failed_first_load_without_fallback_is_empty() {
        let mut state = TableState::<Item>::new(10);
        let token = state.begin_load();
        state.finish_load(token, Err(TableError::Fetch("offline".into())));
        assert!(state.current_view().is_empty());
        assert!(!state.is_fallback());
        assert!(state.error().is_some());
    }

    #[test]
    fn test_failed_refresh_keeps_rows() {
        let mut state = loaded(numbered(3), 10);
        let token = state.begin_load();
        state.finish_load(token, Err(TableError::Fetch("offline".into())));
        assert_eq!(state.current_view().len(), 3);
        assert!(state.error().is_some());
    }

    #[test]
    fn test_export_rows_are_current_page() {
        let mut state = loaded(numbered(25), 10);
        state.sort_by("qty");
        state.sort_by("qty");
        state.go_to_page(3);
        let exported: Vec<u32> = state.export_rows().iter().map(|r| r.id).collect();
        assert_eq!(exported, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_filtered_rows_span_all_pages() {
        let mut state = loaded(numbered(25), 10);
        state.apply_filters(FilterSpec::new().with("qty", FilterValue::range(Some(8.0), None)));
        assert_eq!(state.current_view().len(), 10);
        let all: Vec<u32> = state.filtered_rows().iter().map(|r| r.id).collect();
        assert_eq!(all, (8..=25).collect::<Vec<u32>>());
    }

    #[test]
    fn test_override_wins_and_resets() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut state = TableState::<Item>::new(10).with_store(store.clone());
        let token = state.begin_load();
        state.finish_load(token, Ok(numbered(3)));

        state.persist_override("2", "qty", json!(40)).unwrap();
        assert_eq!(state.rows()[1].qty, Some(40.0));
        state.sort_by("qty");
        state.sort_by("qty");
        assert_eq!(ids(&state), vec![2, 3, 1]);

        // a fresh instance applies the stored override on load
        let mut other = TableState::<Item>::new(10).with_store(store.clone());
        let token = other.begin_load();
        other.finish_load(token, Ok(numbered(3)));
        assert_eq!(other.rows()[1].qty, Some(40.0));
        assert_eq!(other.override_of("2", "qty"), Some(&json!(40)));

        other.reset_overrides().unwrap();
        assert_eq!(other.rows()[1].qty, Some(2.0));
        let token = state.begin_load();
        state.finish_load(token, Ok(numbered(3)));
        assert_eq!(state.rows()[1].qty, Some(2.0));
    }

    /// Reads succeed, every write is refused
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, TableError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), TableError> {
            Err(TableError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), TableError> {
            Err(TableError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_failed_override_write_keeps_rows() {
        let mut state = TableState::<Item>::new(10).with_store(Arc::new(ReadOnlyStore));
        let token = state.begin_load();
        state.finish_load(token, Ok(numbered(3)));

        assert!(state.persist_override("2", "qty", json!(40)).is_err());
        assert_eq!(state.rows()[1].qty, Some(2.0));
        assert_eq!(state.override_of("2", "qty"), None);
    }
}

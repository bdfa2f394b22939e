//! Утилиты для страниц-списков: создание состояния таблицы, загрузка, подсветка поиска
use crate::shared::api_utils::fetch_rows;
use crate::shared::config::config;
use crate::shared::error::TableError;
use crate::shared::event_bus::{TableBus, TableEvent};
use crate::shared::storage::default_store;
use crate::shared::table_state::{MutationGuard, TableRow, TableState};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Table state with the configured page size and browser persistence
pub fn new_table_state<T: TableRow>() -> TableState<T> {
    TableState::new(config().tables.default_page_size).with_store(default_store())
}

/// Starts a fetch; only the latest one started may update the table.
pub fn spawn_load_with<T, F, Fut>(state: RwSignal<TableState<T>>, fetch: F)
where
    T: TableRow,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, TableError>> + 'static,
{
    let Some(token) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    let table = T::SCHEMA.id;
    let fut = fetch();
    spawn_local(async move {
        let result = fut.await;
        if let Err(e) = &result {
            log!("{}: load failed: {}", table, e);
        }
        match state.try_update(|s| s.finish_load(token, result)) {
            Some(true) => {}
            Some(false) => log!("{}: stale response discarded", table),
            None => log!("{}: table closed before the response arrived", table),
        }
    });
}

/// `GET <endpoint>?limit=…` into the table
pub fn spawn_load<T>(state: RwSignal<TableState<T>>, endpoint: &'static str)
where
    T: TableRow + DeserializeOwned,
{
    spawn_load_with(state, move || fetch_rows::<T>(endpoint));
}

/// Runs a mutating request unless the same `action` is already in flight.
///
/// `on_done` receives either the response or the rejection of the duplicate.
pub fn spawn_mutation<R, Fut>(
    guard: RwSignal<MutationGuard>,
    action: String,
    request: Fut,
    on_done: impl FnOnce(Result<R, TableError>) + 'static,
) where
    R: 'static,
    Fut: Future<Output = Result<R, TableError>> + 'static,
{
    match guard.try_update(|g| g.try_begin(&action)) {
        Some(Ok(())) => {}
        Some(Err(e)) => return on_done(Err(e)),
        None => return,
    }
    log!("{}: started", action);
    spawn_local(async move {
        let result = request.await;
        if let Err(e) = &result {
            log!("{}: {}", action, e);
        }
        guard.try_update(|g| g.finish(&action));
        on_done(result);
    });
}

/// Calls `load` on every toolbar refresh while the page is mounted
pub fn reload_on_refresh(bus: &TableBus, load: impl Fn() + Send + Sync + 'static) {
    let subscription = bus.subscribe(move |event| {
        if matches!(event, TableEvent::Refresh) {
            load();
        }
    });
    let bus = bus.clone();
    on_cleanup(move || bus.unsubscribe(subscription));
}

/// Byte ranges of case-insensitive occurrences of `filter` in `text`
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    // lowercasing changed byte offsets, nothing to map back safely
    if needle.is_empty() || haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <span>{parts}</span> }.into_any()
}

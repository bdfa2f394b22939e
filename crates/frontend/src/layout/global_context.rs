use crate::layout::tabs::tab_label_for_key;
use leptos::logging::log;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

/// Query string of the shell: `?active=<tab key>`
#[derive(Debug, Default, Serialize, Deserialize)]
struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Tab key named by a `location.search` string, if any
pub fn active_from_query(search: &str) -> Option<String> {
    serde_qs::from_str::<TabQuery>(search.trim_start_matches('?'))
        .ok()?
        .active
        .filter(|key| !key.is_empty())
}

/// `?active=<key>`, with the key percent-encoded
pub fn query_for_active(key: &str) -> String {
    let query = TabQuery {
        active: Some(key.to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

/// Открытые табы и состояние боковой панели
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=<key>` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = current_search();
        if let Some(key) = active_from_query(&search) {
            log!("restoring tab '{}' from the URL", key);
            self.open_tab(&key, tab_label_for_key(&key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let url = query_for_active(&key);
            if current_search() == url {
                return;
            }
            let replaced = window()
                .and_then(|w| w.history().ok())
                .map(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
            if !matches!(replaced, Some(Ok(()))) {
                log!("could not update the URL to {}", url);
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
            log!("tab opened: {}", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        let remaining = self.opened.try_update(|tabs| {
            tabs.retain(|tab| tab.key != key);
            tabs.clone()
        });
        let active = self.active.get_untracked();
        let next_active = next_active_after_close(&remaining.unwrap_or_default(), key, active.as_deref());
        if next_active != active {
            log!("tab closed: {}, now active: {:?}", key, next_active);
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Active tab after `closed` is removed: unchanged unless it was the closed
/// one, then the last remaining tab.
pub fn next_active_after_close(remaining: &[Tab], closed: &str, active: Option<&str>) -> Option<String> {
    match active {
        Some(a) if a != closed => Some(a.to_string()),
        _ => remaining.last().map(|t| t.key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.into(),
            title: key.into(),
        }
    }

    #[test]
    fn test_next_active_after_close() {
        let remaining = vec![tab("a001_inventory_item"), tab("a004_transfer")];
        assert_eq!(
            next_active_after_close(&remaining, "p901_low_stock", Some("p901_low_stock")),
            Some("a004_transfer".to_string())
        );
        assert_eq!(
            next_active_after_close(&remaining, "p901_low_stock", Some("a001_inventory_item")),
            Some("a001_inventory_item".to_string())
        );
        assert_eq!(next_active_after_close(&[], "x", Some("x")), None);
    }

    #[test]
    fn test_active_query() {
        assert_eq!(active_from_query("?active=p901_low_stock"), Some("p901_low_stock".to_string()));
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query(""), None);
        assert_eq!(query_for_active("a002_warehouse"), "?active=a002_warehouse");
    }
}

//! TabPage component - обёртка контента таба
//!
//! Content is created once when the tab opens and stays mounted while other
//! tabs are active, so table state, selection and scroll survive tab switches.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    let key_for_active = key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()));

    log!("🔨 TabPage CREATED for: '{}'", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log!("💥 TabPage DESTROYED for: '{}'", key_for_cleanup));

    let content = render_tab_content(&key);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=key>
            {content}
        </div>
    }
}

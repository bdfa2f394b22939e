//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы

use crate::shared::table_state::SelectAllState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Три состояния: unchecked, checked, indeterminate. Клик вызывает `on_toggle`,
/// решение (выбрать или снять) принимает владелец состояния.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<SelectAllState>,

    on_toggle: Callback<()>,

    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства
    Effect::new(move |_| {
        let current = state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(current == SelectAllState::Some);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title=title.unwrap_or_else(|| "Select page".to_string())
                prop:checked=move || state.get() == SelectAllState::All
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}

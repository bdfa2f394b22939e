//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use leptos::prelude::*;
use thaw::*;

/// Останавливает propagation клика, чтобы не срабатывал клик по строке.
#[component]
pub fn TableCellCheckbox(
    /// ID текущего элемента
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    checked: Signal<bool>,

    /// Callback with the row id
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}

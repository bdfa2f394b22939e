//! Компонент сортируемой ячейки заголовка таблицы
//!
//! Клик переключает сортировку по колонке: нет → ▲ → ▼ → нет.

use contracts::shared::table::{SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

/// Индикатор направления сортировки для колонки
pub fn sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    match sort.direction_of(field) {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS class of the indicator; inactive columns show a dimmed arrow
pub fn sort_class(sort: &SortSpec, field: &str) -> &'static str {
    if sort.direction_of(field).is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    field: &'static str,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortSpec>,

    /// Callback при клике на заголовок
    on_sort: Callback<&'static str>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || sort.with(|s| sort_class(s, field))>
                    {move || sort.with(|s| sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_cycle() {
        let unsorted = SortSpec::unsorted();
        assert_eq!(sort_indicator(&unsorted, "qty"), " ⇅");
        let asc = unsorted.cycle("qty");
        assert_eq!(sort_indicator(&asc, "qty"), " ▲");
        assert_eq!(sort_indicator(&asc, "name"), " ⇅");
        assert_eq!(sort_indicator(&asc.cycle("qty"), "qty"), " ▼");
        assert_eq!(sort_class(&asc, "name"), "table__sort-indicator");
    }
}

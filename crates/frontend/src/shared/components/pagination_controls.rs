use crate::shared::icons::icon;
use crate::shared::table_state::{PageItem, PageSpec};
use leptos::prelude::*;

/// PaginationControls component - page-number strip with first/prev/next/last
/// buttons and a page size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page state of the table
    #[prop(into)]
    page: Signal<PageSpec>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    #[prop(into)]
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let current = move || page.get().current_page;
    let total = move || page.get().total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1))
                disabled=move || current() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let spec = page.get();
                spec.window()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=n == spec.current_page
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || current() >= total()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total())
                disabled=move || current() >= total()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">
                {move || {
                    let spec = page.get();
                    let range = spec.range();
                    if spec.total_items == 0 {
                        "No rows".to_string()
                    } else {
                        format!("{}–{} of {}", range.start + 1, range.end, spec.total_items)
                    }
                }}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page.get().items_per_page.to_string()
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page.get().items_per_page == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

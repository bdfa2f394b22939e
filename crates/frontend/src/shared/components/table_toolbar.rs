//! Панель действий над таблицей: фильтры, экспорт, обновление, навигация по страницам.
//!
//! Knows nothing about the rows; it talks to the table only through the [`TableBus`].

use crate::shared::config::config;
use crate::shared::event_bus::{ExportFormat, TableBus, TableEvent};
use crate::shared::icons::icon;
use crate::shared::table_state::PageSpec;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableToolbar(
    bus: TableBus,

    /// Page-specific actions shown before the standard buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let page = RwSignal::new(PageSpec::new(config().tables.default_page_size));
    let filter_open = RwSignal::new(false);
    let active_filters = RwSignal::new(0usize);

    let subscription = bus.subscribe(move |event| match event {
        TableEvent::PaginationUpdate(spec) => page.set(*spec),
        TableEvent::FilterModalStateChange { is_open } => filter_open.set(*is_open),
        TableEvent::ApplyFilters(spec) => active_filters.set(spec.active_count()),
        TableEvent::ClearFilters => active_filters.set(0),
        _ => {}
    });
    {
        let bus = bus.clone();
        on_cleanup(move || bus.unsubscribe(subscription));
    }

    let step_page = {
        let bus = bus.clone();
        move |step: isize| {
            if let Some(target) = neighbour_page(&page.get_untracked(), step) {
                bus.publish(TableEvent::ChangePage { page: target });
            }
        }
    };
    let step_back = step_page.clone();

    let current = move || page.get().current_page;
    let total = move || page.get().total_pages();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {children.map(|c| c())}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=emit(&bus, TableEvent::OpenFilterModal)
                        disabled=Signal::derive(move || filter_open.get())
                    >
                        {icon("filter")}
                        {move || match active_filters.get() {
                            0 => " Filters".to_string(),
                            n => format!(" Filters ({})", n),
                        }}
                    </Button>
                    {
                        let on_clear = emit(&bus, TableEvent::ClearFilters);
                        move || (active_filters.get() > 0).then(|| {
                            let on_clear = on_clear.clone();
                            view! {
                                <Button appearance=ButtonAppearance::Subtle on_click=on_clear>
                                    {icon("x")}
                                    " Clear"
                                </Button>
                            }
                        })
                    }
                </div>

                <div class="filter-panel-header__center">
                    <button
                        class="pagination-btn"
                        on:click=move |_| step_back(-1)
                        disabled=move || current() <= 1
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    <span class="pagination-info">
                        {move || format!("Page {} / {}", current(), total())}
                    </span>
                    <button
                        class="pagination-btn"
                        on:click=move |_| step_page(1)
                        disabled=move || current() >= total()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>

                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=emit(&bus, TableEvent::DownloadTable { format: ExportFormat::Csv })
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=emit(&bus, TableEvent::DownloadTable { format: ExportFormat::Pdf })
                    >
                        {icon("printer")}
                        " PDF"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=emit(&bus, TableEvent::Refresh)>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Click handler that publishes `event`
fn emit(bus: &TableBus, event: TableEvent) -> impl Fn(MouseEvent) + Clone + Send + Sync + 'static {
    let bus = bus.clone();
    move |_| bus.publish(event.clone())
}

/// Neighbouring page number, `None` at the edges
fn neighbour_page(spec: &PageSpec, step: isize) -> Option<usize> {
    let target = spec.current_page.checked_add_signed(step)?;
    (1..=spec.total_pages()).contains(&target).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_page() {
        let mut spec = PageSpec::new(10);
        spec.set_total_items(25);
        assert_eq!(neighbour_page(&spec, -1), None);
        assert_eq!(neighbour_page(&spec, 1), Some(2));
        spec.go_to(3);
        assert_eq!(neighbour_page(&spec, 1), None);
        assert_eq!(neighbour_page(&spec, -1), Some(2));
    }
}

use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_inventory_item::{InventoryItemDto, SCHEMA};
use leptos::prelude::*;

const ENDPOINT: &str = "/api/inventory";

/// Отчёт по остаткам. Selected rows are remembered and can be assigned to a
/// warehouse from the warehouse report.
#[component]
pub fn InventoryItemList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<InventoryItemDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    let total = move || state.with(|s| s.filtered_len());
    let selected = move || state.with(|s| s.selected_count());

    view! {
        <PageFrame page_id="a001_inventory_item--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>{move || total().to_string()}</Badge>
                {move || (selected() > 0).then(|| view! {
                    <Badge variant="neutral".to_string()>{format!("{} selected", selected())}</Badge>
                })}
            </PageHeader>

            <div class="page__content">
                <TableToolbar bus=bus.clone() />
                <DataTable state=state bus=bus selectable=true min_width="1100px" />
            </div>
        </PageFrame>
    }
}

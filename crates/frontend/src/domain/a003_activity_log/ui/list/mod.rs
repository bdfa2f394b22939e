use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_activity_log::{ActivityLogDto, SCHEMA};
use leptos::prelude::*;

const ENDPOINT: &str = "/api/logs";

/// Журнал действий пользователей
#[component]
pub fn ActivityLogList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<ActivityLogDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    view! {
        <PageFrame page_id="a003_activity_log--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title subtitle="User actions across inventory and warehouses".to_string()>
                <Badge variant="primary".to_string()>
                    {move || state.with(|s| s.filtered_len()).to_string()}
                </Badge>
            </PageHeader>

            <div class="page__content">
                <TableToolbar bus=bus.clone() />
                <DataTable state=state bus=bus min_width="1000px" />
            </div>
        </PageFrame>
    }
}

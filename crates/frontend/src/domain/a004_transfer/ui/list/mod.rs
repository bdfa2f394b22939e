use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_transfer::{TransferDto, SCHEMA};
use leptos::prelude::*;

const ENDPOINT: &str = "/api/transfers";

#[component]
pub fn TransferList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<TransferDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    // transfers still on the road among the filtered rows
    let in_transit = move || {
        state.with(|s| {
            s.filtered_rows()
                .into_iter()
                .filter(|t| t.status == "In Transit")
                .count()
        })
    };

    view! {
        <PageFrame page_id="a004_transfer--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>
                    {move || state.with(|s| s.filtered_len()).to_string()}
                </Badge>
                <Badge variant="warning".to_string()>{move || format!("{} in transit", in_transit())}</Badge>
            </PageHeader>

            <div class="page__content">
                <TableToolbar bus=bus.clone() />
                <DataTable state=state bus=bus min_width="1000px" />
            </div>
        </PageFrame>
    }
}

use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_warehouse_storage::{WarehouseStorageDto, SCHEMA};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "/api/warehouse-storage";

fn unselect_label(count: usize) -> String {
    if count == 1 {
        "Unselect 1 bin".to_string()
    } else {
        format!("Unselect {} bins", count)
    }
}

/// Размещение по ячейкам. Rows can be ticked for a recount list.
#[component]
pub fn WarehouseStorageList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<WarehouseStorageDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    let clear_selection = move |_: ev::MouseEvent| {
        state.update(|s| {
            if let Err(e) = s.clear_selection() {
                s.set_error(Some(e));
            }
        })
    };
    let selected = move || state.with(|s| s.selected_count());

    view! {
        <PageFrame page_id="a006_warehouse_storage--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>
                    {move || state.with(|s| s.filtered_len()).to_string()}
                </Badge>
            </PageHeader>

            <div class="page__content">
                <TableToolbar bus=bus.clone()>
                    {move || (selected() > 0).then(|| view! {
                        <Button appearance=ButtonAppearance::Subtle on_click=clear_selection>
                            {unselect_label(selected())}
                        </Button>
                    })}
                </TableToolbar>
                <DataTable state=state bus=bus selectable=true />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unselect_label() {
        assert_eq!(unselect_label(1), "Unselect 1 bin");
        assert_eq!(unselect_label(12), "Unselect 12 bins");
    }
}

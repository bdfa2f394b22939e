use super::assign::{selected_inventory_ids, AssignItemsDialog};
use crate::shared::api_utils::post_json;
use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::{TableBus, TableEvent};
use crate::shared::icons::icon;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load, spawn_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_state::MutationGuard;
use contracts::domain::a002_warehouse::{WarehouseDto, SCHEMA};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_assign_items::{AssignItems, AssignItemsRequest, AssignItemsResult};
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "/api/warehouses";

fn assigned_notice(warehouse: &str, result: &AssignItemsResult) -> String {
    match result.skipped.len() {
        0 => format!("{} item(s) assigned to {}.", result.assigned, warehouse),
        n => format!(
            "{} item(s) assigned to {}, {} skipped: {}",
            result.assigned,
            warehouse,
            n,
            result.skipped.join(", ")
        ),
    }
}

#[component]
pub fn WarehouseList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<WarehouseDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    let guard = RwSignal::new(MutationGuard::new());
    let assign_target = RwSignal::new(None::<WarehouseDto>);
    let notice = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);
    let running = Signal::derive(move || guard.with(|g| g.is_running(&AssignItems::full_name())));

    let on_confirm = {
        let bus = bus.clone();
        Callback::new(move |(warehouse, item_ids): (WarehouseDto, Vec<String>)| {
            let Some(request) = AssignItemsRequest::new(warehouse.id.clone(), item_ids) else {
                action_error.set(Some("No items selected.".to_string()));
                return;
            };
            action_error.set(None);
            notice.set(None);
            let requested = request.item_ids.len();
            let bus = bus.clone();
            spawn_mutation(
                guard,
                AssignItems::full_name(),
                async move { post_json::<_, AssignItemsResult>(AssignItems::endpoint(), &request).await },
                move |result| match result {
                    Ok(response) => {
                        let response = response.unwrap_or(AssignItemsResult {
                            assigned: requested,
                            skipped: Vec::new(),
                        });
                        notice.set(Some(assigned_notice(&warehouse.name, &response)));
                        assign_target.set(None);
                        bus.publish(TableEvent::Refresh);
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                },
            );
        })
    };

    let row_actions = Callback::new(move |row: WarehouseDto| {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| assign_target.set(Some(row.clone()))
            >
                {icon("package")}
                " Assign items"
            </Button>
        }
        .into_any()
    });

    let total = move || state.with(|s| s.filtered_len());

    view! {
        <PageFrame page_id="a002_warehouse--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>{move || total().to_string()}</Badge>
            </PageHeader>

            <div class="page__content">
                {move || notice.get().map(|text| view! {
                    <div class="alert alert--success">{text}</div>
                })}
                {move || action_error.get().map(|text| view! {
                    <div class="alert alert--error">{text}</div>
                })}
                <TableToolbar bus=bus.clone() />
                <DataTable state=state bus=bus row_actions=row_actions />
            </div>

            {move || assign_target.get().map(|warehouse| view! {
                <AssignItemsDialog
                    warehouse=warehouse
                    item_ids=selected_inventory_ids()
                    running=running
                    on_confirm=on_confirm
                    on_close=Callback::new(move |_| assign_target.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_notice() {
        let ok = AssignItemsResult { assigned: 3, skipped: vec![] };
        assert_eq!(assigned_notice("Main", &ok), "3 item(s) assigned to Main.");
        let partial = AssignItemsResult { assigned: 1, skipped: vec!["a".into(), "b".into()] };
        assert_eq!(assigned_notice("Main", &partial), "1 item(s) assigned to Main, 2 skipped: a, b");
    }
}

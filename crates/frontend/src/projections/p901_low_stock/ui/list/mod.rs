use super::super::fallback::sample_low_stock;
use super::super::row::{parse_to_order, purchase_order_lines};
use crate::shared::api_utils::{fetch_all_ids, post_json};
use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::error::TableError;
use crate::shared::event_bus::{TableBus, TableEvent};
use crate::shared::icons::icon;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load, spawn_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_state::{GlobalSelect, MutationGuard, RequestToken, TableRow, TableState};
use contracts::projections::p901_low_stock::{LowStockItemDto, SCHEMA, TO_ORDER_FIELD};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_purchase_order::{
    GeneratePurchaseOrder, GeneratePurchaseOrderRequest, PurchaseOrderCreated,
};
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::*;

const ENDPOINT: &str = "/api/inventory/low-stock";
const ORDER_SOURCE: &str = "low_stock";

/// Order lines come from the ticked rows, or from every filtered row when nothing is ticked.
fn order_request(state: &TableState<LowStockItemDto>) -> Option<GeneratePurchaseOrderRequest> {
    let lines = if state.selected_count() > 0 {
        purchase_order_lines(state.selected_rows())
    } else {
        purchase_order_lines(state.filtered_rows())
    };
    let request = GeneratePurchaseOrderRequest::new(ORDER_SOURCE, lines);
    (!request.is_empty()).then_some(request)
}

fn order_notice(created: &PurchaseOrderCreated) -> String {
    format!(
        "Purchase order {} created: {} line(s), {} unit(s).",
        created.order_number, created.total_lines, created.total_quantity
    )
}

fn report_error(state: RwSignal<TableState<LowStockItemDto>>, result: Result<(), TableError>) {
    if let Err(e) = result {
        state.update(|s| s.set_error(Some(e)));
    }
}

/// Dataset-wide select-all: clears a non-empty selection, otherwise selects every id
/// the server knows about (the loaded rows when showing sample data).
fn toggle_select_everything(state: RwSignal<TableState<LowStockItemDto>>) {
    let Some(step) = state.try_update(|s| s.begin_select_all_global()) else {
        return;
    };
    match step {
        Ok(GlobalSelect::Cleared) => {}
        Ok(GlobalSelect::NeedsIds(token)) if state.with_untracked(|s| s.is_fallback()) => {
            let ids = state.with_untracked(|s| s.rows().iter().map(|r| r.row_id()).collect());
            apply_all_ids(state, token, ids);
        }
        Ok(GlobalSelect::NeedsIds(token)) => spawn_local(async move {
            match fetch_all_ids(ENDPOINT).await {
                Ok(ids) => {
                    log!("{}: {} ids for select-all", SCHEMA.id, ids.len());
                    apply_all_ids(state, token, ids);
                }
                Err(e) => report_error(state, Err(e)),
            }
        }),
        Err(e) => report_error(state, Err(e)),
    }
}

fn apply_all_ids(state: RwSignal<TableState<LowStockItemDto>>, token: RequestToken, ids: Vec<String>) {
    match state.try_update(|s| s.finish_select_all_global(token, ids)) {
        Some(Ok(true)) | None => {}
        Some(Ok(false)) => log!("{}: selection changed, id listing ignored", SCHEMA.id),
        Some(Err(e)) => report_error(state, Err(e)),
    }
}

/// Отчёт «заканчивающиеся товары»: правка количества к заказу и формирование заказа поставщику
#[component]
pub fn LowStockList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<LowStockItemDto>().with_fallback(sample_low_stock()));
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    let guard = RwSignal::new(MutationGuard::new());
    let created = RwSignal::new(None::<PurchaseOrderCreated>);
    let action_error = RwSignal::new(None::<String>);
    let ordering = Signal::derive(move || guard.with(|g| g.is_running(&GeneratePurchaseOrder::full_name())));
    let is_fallback = Signal::derive(move || state.with(|s| s.is_fallback()));

    let render_cell = Callback::new(move |(row, field): (LowStockItemDto, &'static str)| {
        if field != TO_ORDER_FIELD {
            return None;
        }
        let id = row.row_id();
        let edited = state.with_untracked(|s| s.override_of(&id, TO_ORDER_FIELD).is_some());
        let on_change = move |ev: ev::Event| {
            let text = event_target_value(&ev);
            match parse_to_order(&text) {
                Some(quantity) => state.update(|s| {
                    if let Err(e) = s.persist_override(&id, TO_ORDER_FIELD, json!(quantity)) {
                        s.set_error(Some(e));
                    }
                }),
                None => log!("{}: invalid quantity '{}' for {}", SCHEMA.id, text, id),
            }
        };
        Some(
            view! {
                <input
                    type="number"
                    min="0"
                    step="1"
                    class="table__input"
                    class:table__input--edited=edited
                    prop:value=row.effective_to_order().to_string()
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_change
                />
            }
            .into_any(),
        )
    });

    let generate = {
        let bus = bus.clone();
        move |_| {
            action_error.set(None);
            let Some(request) = state.with_untracked(order_request) else {
                action_error.set(Some("Nothing to order: every quantity is zero.".to_string()));
                return;
            };
            log!("{}: ordering {} unit(s)", SCHEMA.id, request.total_quantity());
            let bus = bus.clone();
            spawn_mutation(
                guard,
                GeneratePurchaseOrder::full_name(),
                async move { post_json::<_, PurchaseOrderCreated>(GeneratePurchaseOrder::endpoint(), &request).await },
                move |result| match result {
                    Ok(response) => {
                        created.set(response);
                        report_error(state, state.try_update(|s| s.clear_selection()).unwrap_or(Ok(())));
                        bus.publish(TableEvent::Refresh);
                    }
                    Err(e) => action_error.set(Some(e.to_string())),
                },
            );
        }
    };

    let reset_quantities = move |_| report_error(state, state.try_update(|s| s.reset_overrides()).unwrap_or(Ok(())));
    let selected = move || state.with(|s| s.selected_count());

    view! {
        <PageFrame page_id="p901_low_stock--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title subtitle="Quantities to order are kept in this browser".to_string()>
                <Badge variant="warning".to_string()>
                    {move || state.with(|s| s.filtered_len()).to_string()}
                </Badge>
                {move || (selected() > 0).then(|| view! {
                    <Badge variant="neutral".to_string()>{format!("{} selected", selected())}</Badge>
                })}
            </PageHeader>

            <div class="page__content">
                {move || created.get().map(|order| view! {
                    <div class="alert alert--success">
                        {order_notice(&order)}
                        {order.invoice_url.clone().map(|url| view! {
                            " "
                            <a href=url target="_blank" rel="noopener">"Open invoice"</a>
                        })}
                    </div>
                })}
                {move || action_error.get().map(|text| view! {
                    <div class="alert alert--error">{text}</div>
                })}

                <TableToolbar bus=bus.clone()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=generate
                        disabled=Signal::derive(move || ordering.get() || is_fallback.get())
                    >
                        {icon("cart")}
                        {move || if ordering.get() { " Please wait..." } else { " Generate order" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle_select_everything(state)>
                        {icon("check")}
                        {move || if selected() > 0 { " Unselect all" } else { " Select all" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=reset_quantities>
                        {icon("x")}
                        " Reset quantities"
                    </Button>
                </TableToolbar>
                <DataTable state=state bus=bus selectable=true render_cell=render_cell min_width="1100px" />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> TableState<LowStockItemDto> {
        let mut state = TableState::new(10);
        let token = state.begin_load();
        state.finish_load(token, Ok(sample_low_stock()));
        state
    }

    #[test]
    fn test_order_uses_selection_when_present() {
        let mut state = loaded();
        let all = order_request(&state).unwrap();
        assert_eq!(all.lines.len(), sample_low_stock().len());

        state.toggle_select("sample-2").unwrap();
        let picked = order_request(&state).unwrap();
        assert_eq!(picked.lines.len(), 1);
        assert_eq!(picked.lines[0].item_id, "sample-2");
        assert_eq!(picked.source, ORDER_SOURCE);
    }

    #[test]
    fn test_order_with_zero_quantities_is_rejected() {
        let mut state = loaded();
        state.toggle_select("sample-1").unwrap();
        state.persist_override("sample-1", TO_ORDER_FIELD, json!(0)).unwrap();
        assert!(order_request(&state).is_none());
    }

    #[test]
    fn test_order_notice() {
        let created = PurchaseOrderCreated {
            order_number: "PO-7".into(),
            total_lines: 2,
            total_quantity: 30,
            invoice_url: None,
        };
        assert_eq!(order_notice(&created), "Purchase order PO-7 created: 2 line(s), 30 unit(s).");
    }
}

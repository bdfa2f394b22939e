use super::details::StockTransactionDetails;
use crate::shared::components::table::format_signed_quantity;
use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::icons::icon;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_stock_transaction::{StockTransactionDto, SCHEMA};
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "/api/transactions";

/// Net stock change of the given transactions
fn net_change<'a>(rows: impl IntoIterator<Item = &'a StockTransactionDto>) -> i64 {
    rows.into_iter().map(|t| t.signed_quantity()).sum()
}

/// Журнал прихода/расхода. A click on a row opens its details.
#[component]
pub fn StockTransactionList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<StockTransactionDto>());
    let bus = TableBus::new();

    let load = move || spawn_load(state, ENDPOINT);
    reload_on_refresh(&bus, load);
    Effect::new(move |_| load());

    let opened = RwSignal::new(None::<StockTransactionDto>);
    let open_details = Callback::new(move |tx: StockTransactionDto| opened.set(Some(tx)));

    let row_actions = Callback::new(move |tx: StockTransactionDto| {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| open_details.run(tx.clone())
            >
                {icon("eye")}
            </Button>
        }
        .into_any()
    });

    let net = move || state.with(|s| net_change(s.filtered_rows()));

    view! {
        <PageFrame page_id="a007_stock_transaction--list" category=PAGE_CAT_LIST>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>
                    {move || state.with(|s| s.filtered_len()).to_string()}
                </Badge>
                <Badge variant="neutral".to_string()>
                    {move || format!("Net {}", format_signed_quantity(net()))}
                </Badge>
            </PageHeader>

            <div class="page__content">
                <TableToolbar bus=bus.clone() />
                <DataTable
                    state=state
                    bus=bus
                    row_actions=row_actions
                    on_row_click=open_details
                    min_width="1200px"
                />
            </div>

            {move || opened.get().map(|tx| view! {
                <StockTransactionDetails tx=tx on_close=Callback::new(move |_| opened.set(None)) />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_change() {
        let raw = r#"[
            {"id":"1","reference":"R1","direction":"IN","quantity":10},
            {"id":"2","reference":"R2","direction":"OUT","quantity":4},
            {"id":"3","reference":"R3","direction":"out","quantity":1}
        ]"#;
        let rows: Vec<StockTransactionDto> = serde_json::from_str(raw).unwrap();
        assert_eq!(net_change(&rows), 5);
        assert_eq!(net_change(Vec::<StockTransactionDto>::new().iter()), 0);
    }
}

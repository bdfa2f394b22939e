use crate::shared::api_utils::fetch_rows;
use crate::shared::components::table::{format_money, format_signed_quantity};
use crate::shared::components::ui::Badge;
use crate::shared::components::{DataTable, PageHeader, TableToolbar};
use crate::shared::event_bus::TableBus;
use crate::shared::list_utils::{new_table_state, reload_on_refresh, spawn_load_with};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use chrono::NaiveDate;
use contracts::domain::a007_stock_transaction::StockTransactionDto;
use contracts::projections::p902_transaction_summary::{summarize, TransactionSummaryDto, SCHEMA};
use leptos::prelude::*;

const TRANSACTIONS_ENDPOINT: &str = "/api/transactions";

/// `YYYY-MM-DD` from a date input; empty or malformed means "no bound"
fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Итоги движения по позициям за период
#[component]
pub fn TransactionSummaryList() -> impl IntoView {
    let state = RwSignal::new(new_table_state::<TransactionSummaryDto>());
    let bus = TableBus::new();
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let load = move || {
        let from = parse_day(&date_from.get_untracked());
        let to = parse_day(&date_to.get_untracked());
        spawn_load_with(state, move || async move {
            fetch_rows::<StockTransactionDto>(TRANSACTIONS_ENDPOINT)
                .await
                .map(|transactions| summarize(&transactions, from, to))
        });
    };
    reload_on_refresh(&bus, load);
    Effect::new(move |_| {
        date_from.track();
        date_to.track();
        load();
    });

    let totals = move || {
        state.with(|s| {
            s.filtered_rows().into_iter().fold((0i64, 0.0f64, 0.0f64), |(net, inbound, outbound), r| {
                (net + r.net, inbound + r.inbound_value, outbound + r.outbound_value)
            })
        })
    };

    view! {
        <PageFrame page_id="p902_transaction_summary--report" category=PAGE_CAT_REPORT>
            <PageHeader title=SCHEMA.title>
                <Badge variant="primary".to_string()>
                    {move || format!("{} items", state.with(|s| s.filtered_len()))}
                </Badge>
            </PageHeader>

            <div class="page__content">
                <div class="report-period">
                    <label class="report-period__field">
                        "From"
                        <input
                            type="date"
                            prop:value=move || date_from.get()
                            on:change=move |ev| date_from.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="report-period__field">
                        "To"
                        <input
                            type="date"
                            prop:value=move || date_to.get()
                            on:change=move |ev| date_to.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="report-period__totals">
                        {move || {
                            let (net, inbound, outbound) = totals();
                            format!(
                                "Net {} · In {} · Out {}",
                                format_signed_quantity(net),
                                format_money(inbound),
                                format_money(outbound)
                            )
                        }}
                    </div>
                </div>

                <TableToolbar bus=bus.clone() />
                <DataTable state=state bus=bus min_width="1100px" />
            </div>
        </PageFrame>
    }
}

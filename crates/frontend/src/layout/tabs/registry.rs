//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::domain::a001_inventory_item::ui::list::InventoryItemList;
use crate::domain::a002_warehouse::ui::list::WarehouseList;
use crate::domain::a003_activity_log::ui::list::ActivityLogList;
use crate::domain::a004_transfer::ui::list::TransferList;
use crate::domain::a005_shipment::ui::list::ShipmentList;
use crate::domain::a006_warehouse_storage::ui::list::WarehouseStorageList;
use crate::domain::a007_stock_transaction::ui::list::StockTransactionList;
use crate::projections::p901_low_stock::ui::list::LowStockList;
use crate::projections::p902_transaction_summary::ui::list::TransactionSummaryList;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ── Reports ───────────────────────────────────────────────────────
        "a001_inventory_item" => view! { <InventoryItemList /> }.into_any(),
        "p901_low_stock" => view! { <LowStockList /> }.into_any(),
        "a002_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a003_activity_log" => view! { <ActivityLogList /> }.into_any(),

        // ── Tracking ──────────────────────────────────────────────────────
        "a004_transfer" => view! { <TransferList /> }.into_any(),
        "a005_shipment" => view! { <ShipmentList /> }.into_any(),
        "a006_warehouse_storage" => view! { <WarehouseStorageList /> }.into_any(),

        // ── Transactions ──────────────────────────────────────────────────
        "a007_stock_transaction" => view! { <StockTransactionList /> }.into_any(),
        "p902_transaction_summary" => view! { <TransactionSummaryList /> }.into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{format!("Unknown page: {}", key)}</div> }.into_any()
        }
    }
}

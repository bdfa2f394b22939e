use crate::shared::modal_frame::ModalFrame;
use crate::shared::storage::{default_store, SelectionStore};
use contracts::domain::a001_inventory_item::SCHEMA as INVENTORY_SCHEMA;
use contracts::domain::a002_warehouse::WarehouseDto;
use leptos::prelude::*;
use thaw::*;

/// Ids remembered by the inventory report's checkbox column
pub fn selected_inventory_ids() -> Vec<String> {
    SelectionStore::new(default_store(), INVENTORY_SCHEMA.selection_key())
        .load()
        .into_iter()
        .collect()
}

/// Подтверждение привязки отмеченных в отчёте по остаткам позиций к складу
#[component]
pub fn AssignItemsDialog(
    warehouse: WarehouseDto,

    /// Inventory ids to assign
    item_ids: Vec<String>,

    /// Request in flight, the confirm button waits
    #[prop(into)]
    running: Signal<bool>,

    on_confirm: Callback<(WarehouseDto, Vec<String>)>,

    on_close: Callback<()>,
) -> impl IntoView {
    let count = item_ids.len();
    let title = format!("Assign items to {}", warehouse.name);

    let body = if count == 0 {
        view! {
            <p class="modal-text">
                "No items are selected. Tick the items in the Inventory Report first."
            </p>
        }
        .into_any()
    } else {
        view! {
            <p class="modal-text">
                {format!("{} selected item(s) will be assigned to ", count)}
                <strong>{warehouse.name.clone()}</strong>
                {format!(" ({}).", warehouse.location)}
            </p>
        }
        .into_any()
    };

    let confirm = move |_| on_confirm.run((warehouse.clone(), item_ids.clone()));

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--confirm">
            {body}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=confirm
                    disabled=Signal::derive(move || count == 0 || running.get())
                >
                    {move || if running.get() { "Please wait..." } else { "Assign" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

use crate::shared::components::table::{format_money, format_quantity, format_signed_quantity};
use crate::shared::components::ui::StatusBadge;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a007_stock_transaction::StockTransactionDto;
use leptos::prelude::*;
use thaw::*;

#[component]
fn DetailRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="details-grid__row">
            <span class="details-grid__label">{label}</span>
            <span class="details-grid__value">{children()}</span>
        </div>
    }
}

/// Отображаемые значения карточки, подготовленные до рендера
#[derive(Debug, Clone, PartialEq)]
struct DetailValues {
    title: String,
    occurred_at: String,
    direction: String,
    item: String,
    warehouse: String,
    quantity: String,
    change: String,
    inbound: bool,
    unit_cost: String,
    total: String,
    performed_by: String,
    notes: Option<String>,
}

impl DetailValues {
    fn new(tx: &StockTransactionDto) -> Self {
        Self {
            title: format!("Transaction {}", tx.reference),
            occurred_at: tx.occurred_at.clone(),
            direction: tx.direction.to_uppercase(),
            item: format!("{} ({})", tx.item_name, tx.item_id),
            warehouse: tx.warehouse_name.clone(),
            quantity: format_quantity(tx.quantity),
            change: format_signed_quantity(tx.signed_quantity()),
            inbound: tx.is_inbound(),
            unit_cost: format_money(tx.unit_cost),
            total: format_money(tx.total_cost()),
            performed_by: tx.performed_by.clone(),
            notes: tx.notes.clone().filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Карточка движения товара
#[component]
pub fn StockTransactionDetails(tx: StockTransactionDto, on_close: Callback<()>) -> impl IntoView {
    let DetailValues {
        title,
        occurred_at,
        direction,
        item,
        warehouse,
        quantity,
        change,
        inbound,
        unit_cost,
        total,
        performed_by,
        notes,
    } = DetailValues::new(&tx);
    let movement_class = if inbound {
        "details-grid__value--in"
    } else {
        "details-grid__value--out"
    };

    view! {
        <ModalFrame
            title=title
            on_close=on_close
            modal_class="modal--details"
        >
            <div class="details-grid">
                <DetailRow label="Date">{occurred_at}</DetailRow>
                <DetailRow label="Type">
                    <StatusBadge status=direction />
                </DetailRow>
                <DetailRow label="Item">
                    {item}
                </DetailRow>
                <DetailRow label="Warehouse">{warehouse}</DetailRow>
                <DetailRow label="Quantity">{quantity}</DetailRow>
                <DetailRow label="Stock change">
                    <span class=movement_class>{change}</span>
                </DetailRow>
                <DetailRow label="Unit cost">{unit_cost}</DetailRow>
                <DetailRow label="Total">{total}</DetailRow>
                <DetailRow label="Performed by">{performed_by}</DetailRow>
            </div>
            {notes.map(|text| view! {
                <div class="details-notes">
                    <h3>"Notes"</h3>
                    <p>{text}</p>
                </div>
            })}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_values() {
        let tx: StockTransactionDto = serde_json::from_str(
            r#"{"id":"9","reference":"R-9","itemId":"i-1","itemName":"Bolt","direction":"out",
                "quantity":1200,"unitCost":2.5,"warehouseName":"North","performedBy":"ann",
                "occurredAt":"2024-03-01","notes":"  "}"#,
        )
        .unwrap();
        let values = DetailValues::new(&tx);
        assert_eq!(values.title, "Transaction R-9");
        assert_eq!(values.direction, "OUT");
        assert_eq!(values.item, "Bolt (i-1)");
        assert_eq!(values.change, "-1 200");
        assert!(!values.inbound);
        assert_eq!(values.total, "3 000.00");
        assert_eq!(values.notes, None);
    }
}

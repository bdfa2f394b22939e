use crate::domain::a007_stock_transaction::StockTransactionDto;
use crate::shared::table::{FieldDef, TableSchema};
use chrono::{DateTime, NaiveDate};
use crate::shared::row_id::string_or_number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Итоги движения по одной позиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummaryDto {
    /// Item id, stable key of the summary row
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub item_name: String,
    pub total_in: i64,
    pub total_out: i64,
    pub net: i64,
    pub transactions: i64,
    pub inbound_value: f64,
    pub outbound_value: f64,
    pub last_activity: String,
}

/// Extracts the calendar day of an RFC 3339 timestamp or plain `YYYY-MM-DD` date.
pub fn activity_day(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(timestamp.get(..10)?, "%Y-%m-%d").ok()
}

/// Groups transactions per item; rows come out ordered by item name.
///
/// `from`/`to` restrict by activity day (inclusive); transactions without a
/// parseable date are kept only when no period is set.
pub fn summarize(
    transactions: &[StockTransactionDto],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<TransactionSummaryDto> {
    let mut by_item: BTreeMap<String, TransactionSummaryDto> = BTreeMap::new();

    for tx in transactions {
        if from.is_some() || to.is_some() {
            let Some(day) = activity_day(&tx.occurred_at) else {
                continue;
            };
            if from.is_some_and(|f| day < f) || to.is_some_and(|t| day > t) {
                continue;
            }
        }

        let key = if tx.item_id.is_empty() {
            tx.item_name.clone()
        } else {
            tx.item_id.clone()
        };
        let row = by_item
            .entry(key.clone())
            .or_insert_with(|| TransactionSummaryDto {
                id: key,
                item_name: tx.item_name.clone(),
                total_in: 0,
                total_out: 0,
                net: 0,
                transactions: 0,
                inbound_value: 0.0,
                outbound_value: 0.0,
                last_activity: String::new(),
            });

        if tx.is_inbound() {
            row.total_in += tx.quantity;
            row.inbound_value += tx.total_cost();
        } else {
            row.total_out += tx.quantity;
            row.outbound_value += tx.total_cost();
        }
        row.net += tx.signed_quantity();
        row.transactions += 1;
        if tx.occurred_at > row.last_activity {
            row.last_activity = tx.occurred_at.clone();
        }
    }

    let mut rows: Vec<_> = by_item.into_values().collect();
    rows.sort_by(|a, b| a.item_name.to_lowercase().cmp(&b.item_name.to_lowercase()));
    rows
}

pub const FIELDS: &[FieldDef] = &[
    FieldDef::text("item_name", "Item"),
    FieldDef::number("total_in", "Total In"),
    FieldDef::number("total_out", "Total Out"),
    FieldDef::number("net", "Net Change"),
    FieldDef::number("transactions", "Transactions"),
    FieldDef::money("inbound_value", "Inbound Value"),
    FieldDef::money("outbound_value", "Outbound Value"),
    FieldDef::date("last_activity", "Last Activity"),
];

pub const SCHEMA: TableSchema = TableSchema {
    id: "p902_transaction_summary",
    title: "Transaction Summary",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(item: &str, direction: &str, qty: i64, at: &str) -> StockTransactionDto {
        StockTransactionDto {
            id: format!("{item}-{at}"),
            reference: "R".into(),
            item_id: item.to_lowercase(),
            item_name: item.into(),
            direction: direction.into(),
            quantity: qty,
            unit_cost: 1.0,
            warehouse_name: "Main".into(),
            performed_by: "ops".into(),
            occurred_at: at.into(),
            notes: None,
        }
    }

    #[test]
    fn test_summarize_per_item() {
        let txs = vec![
            tx("bolt", "IN", 10, "2024-03-01T08:00:00Z"),
            tx("Anchor", "IN", 2, "2024-03-02T08:00:00Z"),
            tx("bolt", "OUT", 4, "2024-03-05T08:00:00Z"),
        ];
        let rows = summarize(&txs, None, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item_name, "Anchor");
        let bolt = &rows[1];
        assert_eq!((bolt.total_in, bolt.total_out, bolt.net), (10, 4, 6));
        assert_eq!(bolt.transactions, 2);
        assert_eq!(bolt.last_activity, "2024-03-05T08:00:00Z");
        assert_eq!(bolt.outbound_value, 4.0);
    }

    #[test]
    fn test_summarize_period() {
        let txs = vec![
            tx("bolt", "IN", 10, "2024-03-01T08:00:00Z"),
            tx("bolt", "OUT", 4, "2024-03-05"),
            tx("bolt", "OUT", 1, "not a date"),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 3, 2);
        let rows = summarize(&txs, from, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].net, -4);
    }

    #[test]
    fn test_activity_day() {
        assert_eq!(activity_day("2024-03-05T23:00:00+00:00"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(activity_day("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(activity_day("x"), None);
    }
}

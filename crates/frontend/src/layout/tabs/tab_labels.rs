//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Titles come from the table schemas in `contracts`, so a tab, its menu item
//! and its exported report share one name.

use contracts::domain::a001_inventory_item::SCHEMA as A001;
use contracts::domain::a002_warehouse::SCHEMA as A002;
use contracts::domain::a003_activity_log::SCHEMA as A003;
use contracts::domain::a004_transfer::SCHEMA as A004;
use contracts::domain::a005_shipment::SCHEMA as A005;
use contracts::domain::a006_warehouse_storage::SCHEMA as A006;
use contracts::domain::a007_stock_transaction::SCHEMA as A007;
use contracts::projections::p901_low_stock::SCHEMA as P901;
use contracts::projections::p902_transaction_summary::SCHEMA as P902;

/// Возвращает читаемый заголовок таба для данного ключа, `""` для неизвестных.
pub fn tab_label_for_key(key: &str) -> &'static str {
    [A001, A002, A003, A004, A005, A006, A007, P901, P902]
        .into_iter()
        .find(|schema| schema.id == key)
        .map(|schema| schema.title)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label_for_key() {
        assert_eq!(tab_label_for_key("p901_low_stock"), "Low Stock Report");
        assert_eq!(tab_label_for_key("a007_stock_transaction"), "Stock In / Out Log");
        assert_eq!(tab_label_for_key("nope"), "");
    }
}

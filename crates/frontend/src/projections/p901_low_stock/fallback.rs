//! Образец данных для отчёта, когда API недоступен
use contracts::projections::p901_low_stock::LowStockItemDto;

fn sample(
    id: &str,
    sku: &str,
    name: &str,
    category: &str,
    quantity: i64,
    reorder_level: i64,
    supplier: Option<&str>,
) -> LowStockItemDto {
    LowStockItemDto {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        reorder_level,
        to_order: None,
        supplier: supplier.map(str::to_string),
        status: String::new(),
    }
}

/// Rows shown while the low-stock endpoint cannot be reached
pub fn sample_low_stock() -> Vec<LowStockItemDto> {
    vec![
        sample("sample-1", "HW-1001", "Hex Bolt M8", "Hardware", 12, 50, Some("Fastenal")),
        sample("sample-2", "HW-1002", "Lock Nut M8", "Hardware", 0, 40, Some("Fastenal")),
        sample("sample-3", "EL-2040", "Cable Tie 200mm", "Electrical", 35, 100, None),
        sample("sample-4", "PK-3001", "Shipping Box S", "Packaging", 8, 25, Some("Uline")),
        sample("sample-5", "PK-3007", "Bubble Wrap Roll", "Packaging", 0, 10, Some("Uline")),
        sample("sample-6", "SF-4100", "Safety Gloves L", "Safety", 4, 20, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_rows_need_restock() {
        let rows = sample_low_stock();
        let ids: BTreeSet<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rows.len());
        assert!(rows.iter().all(|r| r.quantity < r.reorder_level && r.effective_to_order() > 0));
    }
}

pub mod p901_low_stock;
pub mod p902_transaction_summary;

pub mod a001_inventory_item;
pub mod a002_warehouse;
pub mod a003_activity_log;
pub mod a004_transfer;
pub mod a005_shipment;
pub mod a006_warehouse_storage;
pub mod a007_stock_transaction;

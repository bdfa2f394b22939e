pub mod common;
pub mod u501_generate_purchase_order;
pub mod u502_assign_items;

pub mod row;
pub mod ui;

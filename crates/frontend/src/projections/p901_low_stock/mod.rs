pub mod fallback;
pub mod row;
pub mod ui;

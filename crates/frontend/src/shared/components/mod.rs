pub mod data_table;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
pub mod table_toolbar;
pub mod ui;

pub use data_table::DataTable;
pub use filter_panel::{FilterModal, FilterTag};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use table_toolbar::TableToolbar;

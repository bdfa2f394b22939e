//! Table screen descriptions shared by every report/tracking/transaction list.
//!
//! - `schema`: declared columns per screen (type, sortable, filter control)
//! - `filter`: FilterSpec, the user's filter constraints
//! - `sort`: SortSpec with the three-state column cycle

pub mod filter;
pub mod schema;
pub mod sort;

pub use filter::{FilterSpec, FilterValue};
pub use schema::{FieldDef, FieldKind, FilterKind, TableSchema};
pub use sort::{SortDirection, SortSpec};

pub mod request;

pub use request::{AssignItemsRequest, AssignItemsResult};

use crate::usecases::common::UseCaseMetadata;

pub struct AssignItems;

impl UseCaseMetadata for AssignItems {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "assign_items"
    }

    fn display_name() -> &'static str {
        "Assign items to warehouse"
    }

    fn endpoint() -> &'static str {
        "/api/warehouses/assign-items"
    }
}

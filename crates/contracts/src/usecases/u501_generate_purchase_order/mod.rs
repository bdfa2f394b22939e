pub mod request;
pub mod response;

pub use request::{GeneratePurchaseOrderRequest, PurchaseOrderLine};
pub use response::PurchaseOrderCreated;

use crate::usecases::common::UseCaseMetadata;

pub struct GeneratePurchaseOrder;

impl UseCaseMetadata for GeneratePurchaseOrder {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "generate_purchase_order"
    }

    fn display_name() -> &'static str {
        "Generate purchase order"
    }

    fn endpoint() -> &'static str {
        "/api/purchase-orders"
    }
}

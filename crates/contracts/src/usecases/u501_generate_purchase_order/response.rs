use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderCreated {
    pub order_number: String,
    #[serde(default)]
    pub total_lines: usize,
    #[serde(default)]
    pub total_quantity: i64,
    /// Link to the generated invoice document, if the backend produced one
    #[serde(default)]
    pub invoice_url: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Привязка выбранных позиций к складу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignItemsRequest {
    pub warehouse_id: String,
    pub item_ids: Vec<String>,
}

impl AssignItemsRequest {
    /// Sorted, de-duplicated ids; `None` when nothing is left to assign.
    pub fn new(warehouse_id: impl Into<String>, item_ids: impl IntoIterator<Item = String>) -> Option<Self> {
        let mut item_ids: Vec<String> = item_ids.into_iter().filter(|id| !id.is_empty()).collect();
        item_ids.sort();
        item_ids.dedup();
        if item_ids.is_empty() {
            return None;
        }
        Some(Self {
            warehouse_id: warehouse_id.into(),
            item_ids,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignItemsResult {
    #[serde(default)]
    pub assigned: usize,
    #[serde(default)]
    pub skipped: Vec<String>,
}

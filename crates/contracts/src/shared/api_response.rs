use crate::shared::row_id::id_from_value;
use serde::{Deserialize, Serialize};

/// Envelope returned by every list endpoint.
///
/// `GET <endpoint>?limit=<n>` answers with `{ success, data, pagination? }`
/// on success and `{ success: false, error }` on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Converts the envelope into the row list or the server-side error text.
    pub fn into_result(self) -> Result<Vec<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Request failed without an error message".to_string()))
        }
    }
}

/// Server-side totals (informational, the UI paginates on the client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: usize,
}

/// Answer of `GET <endpoint>?getAllIds=true`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllIdsResponse {
    pub success: bool,
    #[serde(default)]
    pub all_ids: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AllIdsResponse {
    /// Ids come back either as numbers or strings; the UI keys rows by string.
    pub fn into_ids(self) -> Result<Vec<String>, String> {
        if !self.success {
            return Err(self
                .error
                .unwrap_or_else(|| "Failed to list identifiers".to_string()));
        }
        Ok(self
            .all_ids
            .into_iter()
            .filter_map(id_from_value)
            .collect())
    }
}

/// Envelope returned by mutation endpoints (`POST`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> MutationResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Action failed without an error message".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_success_envelope() {
        let raw = r#"{"success":true,"data":[{"id":1},{"id":2}],"pagination":{"totalItems":2}}"#;
        let resp: ApiResponse<Row> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.pagination, Some(Pagination { total_items: 2 }));
        assert_eq!(resp.into_result().unwrap(), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_error_envelope_without_data() {
        let raw = r#"{"success":false,"error":"db offline"}"#;
        let resp: ApiResponse<Row> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "db offline");
    }

    #[test]
    fn test_all_ids_mixed_types() {
        let raw = r#"{"success":true,"allIds":[1,"b-2",null,3]}"#;
        let resp: AllIdsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_ids().unwrap(), vec!["1", "b-2", "3"]);
    }

    #[test]
    fn test_mutation_failure() {
        let raw = r#"{"success":false,"error":"duplicate key"}"#;
        let resp: MutationResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap_err(), "duplicate key");
    }
}

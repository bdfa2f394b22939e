//! Ошибки табличных экранов
//!
//! Every async operation on a table screen converts its failure into a
//! `TableError` at the call site; the page renders it as a banner or alert.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Network, HTTP status or parse failure on a read
    #[error("Failed to load data: {0}")]
    Fetch(String),

    /// Failure of a write action (purchase order, assignment, ...)
    #[error("Action failed: {0}")]
    Mutation(String),

    /// The same action is still running
    #[error("\"{0}\" is already in progress, please wait")]
    DuplicateAction(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Browser storage error: {0}")]
    Storage(String),
}

impl TableError {
    /// Rewrites backend duplicate-key failures into guidance for the user.
    pub fn from_mutation_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("duplicate key") || lower.contains("unique constraint") {
            TableError::Mutation(
                "This record was already submitted. Refresh the table to see the latest state before trying again."
                    .to_string(),
            )
        } else {
            TableError::Mutation(message)
        }
    }

    /// Errors worth offering a "Retry" button for
    pub fn is_retryable(&self) -> bool {
        matches!(self, TableError::Fetch(_) | TableError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_guidance() {
        let err = TableError::from_mutation_message(
            "ERROR: duplicate key value violates unique constraint \"po_pkey\"",
        );
        match err {
            TableError::Mutation(msg) => assert!(msg.starts_with("This record was already submitted")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            TableError::from_mutation_message("warehouse is full"),
            TableError::Mutation("warehouse is full".into())
        );
    }

    #[test]
    fn test_display_and_retry() {
        assert_eq!(TableError::Timeout(15000).to_string(), "Request timed out after 15000 ms");
        assert!(TableError::Timeout(1).is_retryable());
        assert!(!TableError::Export("x".into()).is_retryable());
    }
}

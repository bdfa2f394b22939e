use crate::shared::error::TableError;
use std::collections::BTreeSet;

/// Generation number of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues tokens so that only the newest fetch may update the table.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// In-flight guard for mutating actions, keyed by action name
#[derive(Debug, Clone, Default)]
pub struct MutationGuard {
    in_flight: BTreeSet<String>,
}

impl MutationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&mut self, action: &str) -> Result<(), TableError> {
        if !self.in_flight.insert(action.to_string()) {
            log::warn!("rejected duplicate '{}' while it is in flight", action);
            return Err(TableError::DuplicateAction(action.to_string()));
        }
        Ok(())
    }

    pub fn finish(&mut self, action: &str) {
        self.in_flight.remove(action);
    }

    pub fn is_running(&self, action: &str) -> bool {
        self.in_flight.contains(action)
    }

    pub fn any_running(&self) -> bool {
        !self.in_flight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let mut tracker = RequestTracker::default();
        let a = tracker.issue();
        assert!(tracker.is_current(a));
        let b = tracker.issue();
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
    }

    #[test]
    fn test_guard_rejects_second_invocation() {
        let mut guard = MutationGuard::new();
        guard.try_begin("u501_generate_purchase_order").unwrap();
        assert_eq!(
            guard.try_begin("u501_generate_purchase_order"),
            Err(TableError::DuplicateAction("u501_generate_purchase_order".into()))
        );
        guard.try_begin("u502_assign_items").unwrap();
        assert!(guard.is_running("u502_assign_items"));

        guard.finish("u501_generate_purchase_order");
        guard.finish("u502_assign_items");
        assert!(!guard.any_running());
        assert!(guard.try_begin("u501_generate_purchase_order").is_ok());
    }
}

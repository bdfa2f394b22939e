//! Typed pub/sub between a table and its toolbar
//!
//! A `TableBus` is created by the page and passed to both the toolbar and the
//! table as a prop. Each side publishes what it changed and subscribes to what
//! it renders.

use crate::shared::table_state::PageSpec;
use contracts::shared::table::FilterSpec;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Toolbar → table: show the filter dialog
    OpenFilterModal,
    /// Table → toolbar: the filter dialog opened or closed
    FilterModalStateChange { is_open: bool },
    ApplyFilters(FilterSpec),
    ClearFilters,
    /// Toolbar → table
    ChangePage { page: usize },
    /// Table → toolbar, after every change of the page state
    PaginationUpdate(PageSpec),
    DownloadTable { format: ExportFormat },
    /// Reload rows, e.g. after a mutation
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&TableEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

/// Cloneable handle; clones share the same subscribers.
#[derive(Clone, Default)]
pub struct TableBus {
    inner: Arc<Mutex<BusInner>>,
}

impl TableBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&TableEvent) + Send + Sync + 'static,
    {
        let Ok(mut inner) = self.inner.lock() else {
            log::warn!("table bus poisoned, subscription dropped");
            return SubscriptionId(0);
        };
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.handlers.push((id, Arc::new(handler)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.handlers.retain(|(h, _)| *h != id);
        }
    }

    /// Delivers `event` to every subscriber in subscription order. Handlers
    /// may publish or subscribe themselves; they run outside the lock.
    pub fn publish(&self, event: TableEvent) {
        let handlers: Vec<Handler> = match self.inner.lock() {
            Ok(inner) => inner.handlers.iter().map(|(_, h)| h.clone()).collect(),
            Err(_) => return,
        };
        log::debug!("bus: {:?} → {} subscribers", event, handlers.len());
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.handlers.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &TableBus) -> (SubscriptionId, Arc<Mutex<Vec<TableEvent>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = bus.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        (id, seen)
    }

    #[test]
    fn test_publish_reaches_all_clones() {
        let bus = TableBus::new();
        let toolbar = bus.clone();
        let (_, a) = recorder(&bus);
        let (_, b) = recorder(&toolbar);
        toolbar.publish(TableEvent::ChangePage { page: 3 });
        bus.publish(TableEvent::DownloadTable {
            format: ExportFormat::Csv,
        });
        assert_eq!(a.lock().unwrap().len(), 2);
        assert_eq!(b.lock().unwrap()[0], TableEvent::ChangePage { page: 3 });
    }

    #[test]
    fn test_unsubscribe() {
        let bus = TableBus::new();
        let (id, seen) = recorder(&bus);
        bus.unsubscribe(id);
        bus.publish(TableEvent::ClearFilters);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_handler_can_republish() {
        let bus = TableBus::new();
        let (_, seen) = recorder(&bus);
        let echo = bus.clone();
        bus.subscribe(move |e| {
            if let TableEvent::ChangePage { page } = e {
                let mut spec = PageSpec::new(10);
                spec.set_total_items(100);
                spec.go_to(*page);
                echo.publish(TableEvent::PaginationUpdate(spec));
            }
        });
        bus.publish(TableEvent::ChangePage { page: 2 });
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[1], TableEvent::PaginationUpdate(p) if p.current_page == 2));
    }
}

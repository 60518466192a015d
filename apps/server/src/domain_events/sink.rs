use std::sync::Mutex;

use budgetwise_core::events::{DomainEvent, DomainEventSink};
use serde_json::json;
use tokio::sync::mpsc;

use crate::events::{
    EventBus, ServerEvent, EXPENSE_ADDED, SALARY_CYCLE_RELOADED, SALARY_UPDATED,
};

/// Domain event sink for the web server runtime.
///
/// `emit` never blocks the mutating request: events go onto an unbounded
/// channel and a background worker started by [`start_worker`] drains it.
/// Events emitted before the worker starts are buffered.
///
/// [`start_worker`]: WebDomainEventSink::start_worker
pub struct WebDomainEventSink {
    tx: mpsc::UnboundedSender<DomainEvent>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<DomainEvent>>>,
}

impl Default for WebDomainEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDomainEventSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Spawns the worker forwarding events to `event_bus`. Later calls are ignored.
    pub fn start_worker(&self, event_bus: EventBus) {
        let rx = match self.rx.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(mut rx) = rx else {
            tracing::warn!("Domain event worker already started");
            return;
        };

        tokio::spawn(async move {
            tracing::info!("Domain event worker started");
            while let Some(event) = rx.recv().await {
                tracing::debug!(?event, "Domain event");
                event_bus.publish(to_server_event(event));
            }
        });
    }
}

fn to_server_event(event: DomainEvent) -> ServerEvent {
    match event {
        DomainEvent::ExpenseAdded {
            user_id,
            expense_id,
            group,
            amount,
        } => ServerEvent::for_user(
            EXPENSE_ADDED,
            user_id,
            json!({ "expenseId": expense_id, "group": group, "amount": amount }),
        ),
        DomainEvent::SalaryUpdated {
            user_id,
            old_salary,
            new_salary,
        } => ServerEvent::for_user(
            SALARY_UPDATED,
            user_id,
            json!({ "oldSalary": old_salary, "newSalary": new_salary }),
        ),
        DomainEvent::SalaryCycleReloaded {
            user_id,
            cycle_start,
        } => ServerEvent::for_user(
            SALARY_CYCLE_RELOADED,
            user_id,
            json!({ "cycleStart": cycle_start }),
        ),
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Domain event dropped: worker has stopped");
        }
    }
}

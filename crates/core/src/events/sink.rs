//! Where committed ledger and salary changes are announced.

use super::DomainEvent;

/// Receives an event once the mutation behind it is committed.
///
/// `emit` runs on the request path, so it must hand the event off without
/// blocking. There is no error channel: an event the sink cannot forward is
/// dropped and the mutation stands.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Keeps every emitted event so service tests can assert on them.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordingEventSink {
    events: std::sync::Arc<std::sync::Mutex<Vec<DomainEvent>>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub(crate) fn recorded(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

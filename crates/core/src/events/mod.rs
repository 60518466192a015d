//! Events announced after ledger and salary mutations commit.
//!
//! The server implements [`DomainEventSink`] to turn them into log records
//! and pushes on the notification stream.

mod domain_event;
mod sink;

pub use domain_event::DomainEvent;
pub use sink::DomainEventSink;

#[cfg(test)]
pub(crate) use sink::RecordingEventSink;

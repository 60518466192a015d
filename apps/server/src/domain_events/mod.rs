//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via DomainEventSink, logs them and forwards them
//! to SSE subscribers through the event bus.

mod sink;

pub use sink::WebDomainEventSink;

//! Observability for gamestore
//!
//! Structured JSON logging with deterministic output:
//! - One log line = one event
//! - Explicit severity levels
//! - Synchronous, no buffering
//!
//! Logging never alters request handling; a failed write is ignored.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::info(event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}

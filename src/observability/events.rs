//! Process lifecycle events

/// Events logged once per process lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// CLI started a boot sequence
    BootStart,
    /// Configuration file parsed and validated
    ConfigLoaded,
    /// Schema DDL applied to the database file
    SchemaApplied,
    /// HTTP listener bound and serving
    HttpServerStart,
}

impl Event {
    /// Returns the event name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaApplied => "SCHEMA_APPLIED",
            Event::HttpServerStart => "HTTP_SERVER_START",
        }
    }
}

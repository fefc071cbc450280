//! Structured JSON logger
//!
//! Log lines are built by hand so the key order is deterministic:
//! `event` first, then `severity`, then the remaining fields sorted
//! alphabetically. Output is one JSON object per line.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous JSON-line logger
pub struct Logger;

impl Logger {
    /// Log at INFO level to stdout
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level to stdout
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level to stderr
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(Severity::Error, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted {
            line.push_str(",\"");
            Self::escape_into(&mut line, key);
            line.push_str("\":\"");
            Self::escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write call per line; failures are swallowed.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn escape_into(line: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => line.push_str("\\\""),
                '\\' => line.push_str("\\\\"),
                '\n' => line.push_str("\\n"),
                '\r' => line.push_str("\\r"),
                '\t' => line.push_str("\\t"),
                c if c.is_control() => {
                    line.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => line.push(c),
            }
        }
    }
}

#[cfg(test)]
fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::write_line(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (alphabetical)
//! - Explicit severity levels
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues (e.g. fail-open reads)
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
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

/// Structured logger that emits one JSON object per line.
///
/// `serde_json::Map` is BTreeMap-backed, so keys serialize in alphabetical
/// order regardless of insertion order.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors that must survive stdout redirection).
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut map = Map::new();
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        map.insert("ts".to_string(), Value::String(Utc::now().to_rfc3339()));
        for (key, value) in fields {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }

        let line = Value::Object(map).to_string();
        // The logger must never take the process down.
        let _ = writeln!(writer, "{}", line);
    }
}

//! # Logger Service
//!
//! This crate implements structured logging for dirspace.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Entries are built as values and then emitted through `tracing`; the
//! host decides where they end up by installing a subscriber with [`init`].

use std::fmt;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

/// A structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Emitting component (if known)
    pub source: Option<String>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            source: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the emitting component
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Renders the fields as space-separated `key=value` pairs
    pub fn render_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={:?}", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Forwards the entry to the installed `tracing` subscriber
    pub fn emit(&self) {
        let source = self.source.as_deref().unwrap_or("-");
        let fields = self.render_fields();

        match self.level {
            LogLevel::Debug => debug!(source, fields = %fields, "{}", self.message),
            LogLevel::Info => info!(source, fields = %fields, "{}", self.message),
            LogLevel::Warn => warn!(source, fields = %fields, "{}", self.message),
            LogLevel::Error => error!(source, fields = %fields, "{}", self.message),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}]", self.level)?;
        if let Some(source) = &self.source {
            write!(f, " {}:", source)?;
        }
        write!(f, " {}", self.message)?;
        if !self.fields.is_empty() {
            write!(f, " {}", self.render_fields())?;
        }
        Ok(())
    }
}

/// Installs the process-wide subscriber
///
/// Output goes to stderr. `RUST_LOG` takes precedence over
/// `default_filter`. Returns false if a subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

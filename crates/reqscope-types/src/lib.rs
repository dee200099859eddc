//! Shared types for reqscope
//!
//! This crate contains data structures used across multiple reqscope crates.

use serde::Deserialize;

// ============================================================================
// Severity
// ============================================================================

/// Log severity level
///
/// The five standard levels emitted by the request-logging convention.
/// The set is closed; a line carrying any other level token is not a
/// request event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// All levels in report column order
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Parse a level token as it appears in a log line
    ///
    /// Only the exact uppercase tokens are recognized; anything else
    /// returns `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// The level token as it appears in log lines and report headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

// ============================================================================
// Request Events
// ============================================================================

/// A classified request-log event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestEvent {
    /// Severity of the line the event came from
    pub level: Severity,

    /// Extracted request path, possibly still carrying a query string
    ///
    /// Query-string stripping happens during aggregation, not here.
    pub path: String,
}

impl RequestEvent {
    pub fn new(level: Severity, path: String) -> Self {
        Self { level, path }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Runtime configuration
///
/// Defaults match the Django request-logging convention; a TOML config
/// file may override individual fields.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Logger identifier whose lines alone are aggregated
    pub request_logger: String,

    /// File the rendered report is written to
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_logger: "django.request".to_string(),
            report_file: "report_han.txt".to_string(),
        }
    }
}

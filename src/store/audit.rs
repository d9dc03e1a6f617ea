use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Timestamp layout of audit lines: `yyyy/MM/dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    at: NaiveDateTime,
    message: String,
}

impl AuditEntry {
    pub fn new(at: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            at,
            message: message.into(),
        }
    }

    /// Stamps the message with the local wall clock.
    pub fn now(message: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), message)
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.at.format(TIMESTAMP_FORMAT), self.message)
    }
}

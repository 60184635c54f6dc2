//! Syntax error type shared by fatal failures and lenient diagnostics

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorKind;
use crate::base::{LineIndex, Position};

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// A failure that stops the reader
    #[default]
    Error,
    /// A deviation recorded in lenient mode; reading continued
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A syntax error with location and kind
///
/// Returned as the `Err` of every fallible reader call, and collected with
/// [`Severity::Warning`] as a diagnostic when lenient mode recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message} (at offset {})", u32::from(.range.start()))]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location (byte offsets into the input text)
    pub range: TextRange,
    /// Categorized error kind
    pub kind: ErrorKind,
    /// Error severity
    pub severity: Severity,
}

impl SyntaxError {
    /// Create a new error
    pub fn new(kind: ErrorKind, message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
            kind,
            severity: Severity::Error,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(kind: ErrorKind, message: impl Into<String>, offset: TextSize) -> Self {
        Self::new(kind, message, TextRange::empty(offset))
    }

    /// Create an error carrying the kind's default message
    pub fn of_kind(kind: ErrorKind, range: TextRange) -> Self {
        Self::new(kind, kind.default_message(), range)
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Byte offset where the error starts
    pub fn offset(&self) -> usize {
        u32::from(self.range.start()) as usize
    }

    /// Line and column of the error start within `text`
    pub fn position(&self, text: &str) -> Position {
        LineIndex::new(text).position(text, self.range.start())
    }
}

/// Result alias used throughout the reader
pub type Result<T, E = SyntaxError> = std::result::Result<T, E>;

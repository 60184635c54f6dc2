//! Error code definitions for reader diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (tokens, numbers, keyword spellings)
//! - E02xx: Structural errors (delimiters, separators, trailing input)
//! - E03xx: Grammar errors (missing elements, invariants)
//! - E04xx: API errors (type mismatch on typed entry points)

use std::fmt;

/// Kinds of reader failures and diagnostics
///
/// Each kind maps to a stable error code so diagnostics can be filtered
/// and documented independently of their message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Token present where a keyword, number or name was required
    UnexpectedToken,
    /// Word that cannot be resolved to any keyword where one was required
    UnknownKeywordSpelling,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Right delimiter without a matching left one, or input ending inside an element
    UnbalancedDelimiter,
    /// Missing `,` between two elements
    MissingSeparator,
    /// Unconsumed tokens after the top-level element
    TrailingInput,

    // =========================================================================
    // E03xx: Grammar errors
    // =========================================================================
    /// Required production keyword absent
    MissingKeyword,
    /// Structural rule violated (e.g. compound CRS with fewer than two members)
    StructuralViolation,

    // =========================================================================
    // E04xx: API errors
    // =========================================================================
    /// Parsed CRS kind differs from the kind the caller asked for
    TypeMismatch,
}

impl ErrorKind {
    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "E0101",
            Self::UnknownKeywordSpelling => "E0102",
            Self::UnbalancedDelimiter => "E0201",
            Self::MissingSeparator => "E0202",
            Self::TrailingInput => "E0203",
            Self::MissingKeyword => "E0301",
            Self::StructuralViolation => "E0302",
            Self::TypeMismatch => "E0401",
        }
    }

    /// Get the default message for this kind
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnknownKeywordSpelling => "unknown keyword",
            Self::UnbalancedDelimiter => "unbalanced delimiter",
            Self::MissingSeparator => "missing separator",
            Self::TrailingInput => "unexpected input after the end of the element",
            Self::MissingKeyword => "missing keyword",
            Self::StructuralViolation => "structural rule violated",
            Self::TypeMismatch => "unexpected CRS kind",
        }
    }

    /// Whether lenient mode may downgrade this kind to a diagnostic
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingSeparator
                | Self::UnexpectedToken
                | Self::TrailingInput
                | Self::StructuralViolation
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

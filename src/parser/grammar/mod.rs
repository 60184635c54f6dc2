//! Grammar productions for WKT CRS text
//!
//! Productions are free functions generic over [`WktParser`] so the grammar
//! is kept apart from the token bookkeeping and error policy of the reader:
//! - `common` - identifiers, units, usages and extents, the object tail
//! - `datum` - reference frames, ensembles, ellipsoids, prime meridians
//! - `cs` - coordinate systems and axes
//! - `crs` - top-level dispatch, single, projected, compound, bound CRSs
//! - `derived` - derived CRSs and their base CRSs
//! - `operation` - conversions, coordinate/point-motion/concatenated operations
//! - `compat` - the legacy WKT1 dialect, normalized into the same model
//!
//! Every production is entered with its keyword already consumed and starts
//! by reading the left delimiter.

mod common;
mod compat;
mod crs;
mod cs;
mod datum;
mod derived;
mod operation;

// Shared imports for submodules via `use super::*;`
pub(super) use crate::model::*;
pub(super) use crate::parser::errors::{ErrorKind, Result, SyntaxError};
pub(super) use crate::parser::keywords::Keyword;
pub(super) use crate::parser::lexer::TokenKind;
pub(super) use text_size::{TextRange, TextSize};
pub(super) use tracing::debug;

pub(super) use self::common::*;
pub(super) use self::cs::*;
pub(super) use self::datum::*;
pub(super) use self::derived::*;
pub(super) use self::operation::*;

pub use self::crs::parse_crs;

// =============================================================================
// Keyword sets
// =============================================================================

/// Keywords that open a top-level element
pub const CRS_KEYWORDS: &[Keyword] = &[
    Keyword::GeodCrs,
    Keyword::GeogCrs,
    Keyword::ProjCrs,
    Keyword::VertCrs,
    Keyword::EngCrs,
    Keyword::ParametricCrs,
    Keyword::TimeCrs,
    Keyword::DerivedProjCrs,
    Keyword::CompoundCrs,
    Keyword::BoundCrs,
    Keyword::CoordinateMetadata,
    Keyword::CoordinateOperation,
    Keyword::PointMotionOperation,
    Keyword::ConcatenatedOperation,
    Keyword::GeogCs,
    Keyword::GeocCs,
    Keyword::ProjCs,
    Keyword::VertCs,
    Keyword::LocalCs,
];

pub const BASE_CRS_KEYWORDS: &[Keyword] = &[
    Keyword::BaseGeodCrs,
    Keyword::BaseGeogCrs,
    Keyword::BaseVertCrs,
    Keyword::BaseEngCrs,
    Keyword::BaseParamCrs,
    Keyword::BaseTimeCrs,
    Keyword::BaseProjCrs,
];

pub const ID_KEYWORDS: &[Keyword] = &[Keyword::Id, Keyword::Authority];

pub const PARAMETER_KEYWORDS: &[Keyword] = &[Keyword::Parameter, Keyword::ParameterFile];

/// Units of ellipsoidal, spherical and polar systems
pub const ANGLE_FIRST: &[Keyword] = &[
    Keyword::AngleUnit,
    Keyword::LengthUnit,
    Keyword::ScaleUnit,
    Keyword::ParametricUnit,
];

/// Units of Cartesian, vertical and the remaining spatial systems
pub const LENGTH_FIRST: &[Keyword] = &[
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::ParametricUnit,
];

pub const PARAMETRIC_FIRST: &[Keyword] = &[
    Keyword::ParametricUnit,
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
];

pub const TIME_ONLY: &[Keyword] = &[Keyword::TimeUnit];
pub const LENGTH_ONLY: &[Keyword] = &[Keyword::LengthUnit];
pub const ANGLE_ONLY: &[Keyword] = &[Keyword::AngleUnit];

/// Parameters of operations: any unit, length preferred for a bare `UNIT`
pub const ANY_UNIT: &[Keyword] = &[
    Keyword::LengthUnit,
    Keyword::AngleUnit,
    Keyword::ScaleUnit,
    Keyword::ParametricUnit,
    Keyword::TimeUnit,
];

// =============================================================================
// WktParser trait
// =============================================================================

/// A literal value read from the input, detached from the token buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: TokenKind,
    /// Unescaped text for quoted values, raw text otherwise
    pub text: String,
    pub range: TextRange,
}

/// Operations the grammar needs from a reader
///
/// Keyword methods consume the keyword token itself but not its left
/// delimiter. Methods returning `Result` fail fatally; deviations that lenient
/// mode tolerates go through [`report`](WktParser::report).
pub trait WktParser {
    /// Offset of the next token
    fn offset(&self) -> TextSize;

    /// Record a recoverable deviation: an error in strict mode, a warning otherwise
    fn report(&mut self, error: SyntaxError) -> Result<()>;

    // -----------------------------------------------------------------
    // Keywords
    // -----------------------------------------------------------------

    /// Whether one of `candidates` comes next as an element, without consuming.
    ///
    /// Strict mode needs `,KEYWORD[`; lenient mode also accepts `KEYWORD[`.
    fn is_keyword_next(&self, candidates: &[Keyword]) -> bool;

    /// Read an optional element keyword.
    ///
    /// Scans forward within the enclosing element for one of `candidates`.
    /// Returns `None`, consuming nothing, when none is found before the
    /// enclosing right delimiter. Text skipped to reach the keyword is reported.
    fn next_keyword(&mut self, candidates: &[Keyword]) -> Result<Option<Keyword>>;

    /// Read a keyword that must be the very next token
    fn read_keyword(&mut self, candidates: &[Keyword]) -> Result<Keyword>;

    /// Read a mandatory element keyword; absence is fatal in both modes
    fn expect_keyword(&mut self, candidates: &[Keyword]) -> Result<Keyword> {
        match self.next_keyword(candidates)? {
            Some(keyword) => Ok(keyword),
            None => Err(SyntaxError::at_offset(
                ErrorKind::MissingKeyword,
                format!("expected {}", describe(candidates)),
                self.offset(),
            )),
        }
    }

    // -----------------------------------------------------------------
    // Punctuation
    // -----------------------------------------------------------------

    fn open_element(&mut self) -> Result<()>;

    /// Read the right delimiter of the current element.
    ///
    /// Lenient mode skips anything left over inside the element first.
    fn close_element(&mut self) -> Result<()>;

    /// Read a `,`; a missing one is reported
    fn read_separator(&mut self) -> Result<()>;

    /// Kind of the token following a `,`, or `None` if no `,` comes next
    fn peek_after_separator(&self) -> Option<TokenKind>;

    // -----------------------------------------------------------------
    // Values
    // -----------------------------------------------------------------

    fn read_quoted(&mut self) -> Result<String>;
    fn read_number(&mut self) -> Result<f64>;
    fn read_unsigned_number(&mut self) -> Result<f64>;
    fn read_unsigned_integer(&mut self) -> Result<u64>;

    /// Read an unsigned integer that fits in a `u32`, such as a dimension
    fn read_u32(&mut self) -> Result<u32> {
        let offset = self.offset();
        let value = self.read_unsigned_integer()?;
        u32::try_from(value).map_err(|_| {
            SyntaxError::at_offset(
                ErrorKind::UnexpectedToken,
                format!("integer {value} is out of range"),
                offset,
            )
        })
    }

    /// Read a bare word such as an axis direction or CS type
    fn read_word(&mut self) -> Result<Literal>;

    /// Read a quoted, numeric or bare value
    fn read_literal(&mut self) -> Result<Literal>;

    /// Read an optional value of `kind` preceded by a separator
    fn optional_value(&mut self, kind: TokenKind) -> Result<Option<Literal>> {
        if self.peek_after_separator() != Some(kind) {
            return Ok(None);
        }
        self.read_separator()?;
        self.read_literal().map(Some)
    }
}

/// Human-readable list of keywords for error messages
pub(crate) fn describe(candidates: &[Keyword]) -> String {
    let mut names: Vec<&str> = candidates.iter().map(|k| k.as_str()).collect();
    names.dedup();
    match names.as_slice() {
        [] => "a keyword".to_string(),
        [one] => (*one).to_string(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
    }
}

/// Parse a number literal's text; the lexer guarantees the shape
pub(super) fn literal_number(literal: &Literal) -> Result<f64> {
    literal.text.parse::<f64>().map_err(|_| {
        SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("expected a number but found '{}'", literal.text),
            literal.range,
        )
    })
}

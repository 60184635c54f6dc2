//! WKT reader
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Tokenizer → lookahead and push-back over the token vector
//!     ↓
//! Reader + grammar → Crs object graph (+ lenient-mode diagnostics)
//! ```
//!
//! Keywords are resolved through the static [`keywords`] table; the grammar
//! never compares spellings itself.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod grammar;
pub mod keywords;
mod lexer;
mod options;
mod tokenizer;

pub use errors::{ErrorKind, Result, Severity, SyntaxError};
pub use keywords::Keyword;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use options::ParseOptions;
pub use parser::Parse;
pub use tokenizer::Tokenizer;

use text_size::{TextRange, TextSize};

use crate::model::{BoundCrs, CompoundCrs, Crs, CrsKind, ProjectedCrs, SingleCrs};

/// Read a CRS in lenient mode, dropping diagnostics
pub fn parse(text: &str) -> Result<Crs> {
    parse_with_options(text, &ParseOptions::lenient()).map(|parse| parse.crs)
}

/// Read a CRS in strict mode
pub fn parse_strict(text: &str) -> Result<Crs> {
    parse_with_options(text, &ParseOptions::strict()).map(|parse| parse.crs)
}

/// Read a CRS, returning lenient-mode diagnostics alongside it
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Parse> {
    parser::read(text, options)
}

/// Read a CRS that must be one of `kinds`
pub fn parse_as(text: &str, options: &ParseOptions, kinds: &[CrsKind]) -> Result<Crs> {
    let crs = parse_with_options(text, options)?.crs;
    if kinds.contains(&crs.kind()) {
        Ok(crs)
    } else {
        Err(mismatch(text, kinds, crs.kind()))
    }
}

fn mismatch(text: &str, expected: &[CrsKind], found: CrsKind) -> SyntaxError {
    let expected: Vec<String> = expected.iter().map(|k| format!("{k:?}")).collect();
    SyntaxError::new(
        ErrorKind::TypeMismatch,
        format!("expected {} CRS but found {found:?}", expected.join(" or ")),
        TextRange::up_to(TextSize::of(text)),
    )
}

/// Read a geodetic or geographic CRS
pub fn parse_geodetic(text: &str, options: &ParseOptions) -> Result<SingleCrs> {
    match parse_as(text, options, &[CrsKind::Geodetic, CrsKind::Geographic])? {
        Crs::Geodetic(crs) | Crs::Geographic(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Geodetic], other.kind())),
    }
}

pub fn parse_projected(text: &str, options: &ParseOptions) -> Result<ProjectedCrs> {
    match parse_as(text, options, &[CrsKind::Projected])? {
        Crs::Projected(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Projected], other.kind())),
    }
}

pub fn parse_vertical(text: &str, options: &ParseOptions) -> Result<SingleCrs> {
    match parse_as(text, options, &[CrsKind::Vertical])? {
        Crs::Vertical(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Vertical], other.kind())),
    }
}

pub fn parse_engineering(text: &str, options: &ParseOptions) -> Result<SingleCrs> {
    match parse_as(text, options, &[CrsKind::Engineering])? {
        Crs::Engineering(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Engineering], other.kind())),
    }
}

pub fn parse_compound(text: &str, options: &ParseOptions) -> Result<CompoundCrs> {
    match parse_as(text, options, &[CrsKind::Compound])? {
        Crs::Compound(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Compound], other.kind())),
    }
}

pub fn parse_bound(text: &str, options: &ParseOptions) -> Result<BoundCrs> {
    match parse_as(text, options, &[CrsKind::Bound])? {
        Crs::Bound(crs) => Ok(crs),
        other => Err(mismatch(text, &[CrsKind::Bound], other.kind())),
    }
}

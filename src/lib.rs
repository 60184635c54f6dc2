//! # wkt-crs
//!
//! Reader and writer for the OGC/ISO 19162 Well-Known Text representation of
//! coordinate reference systems, covering WKT2 and the legacy WKT1 dialect.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → canonical writer, number rendering, pretty printer
//!   ↓
//! parser    → Logos lexer, tokenizer, keyword table, recursive-descent reader
//!   ↓
//! model     → CRS object graph, extras bag
//!   ↓
//! base      → Primitives (TextRange, line/column positions)
//! ```
//!
//! ```
//! let text = r#"VERTCRS["NAVD88",VDATUM["North American Vertical Datum 1988"],
//!     CS[vertical,1],AXIS["gravity-related height (H)",up],LENGTHUNIT["metre",1.0]]"#;
//! let crs = wkt_crs::parse_strict(text).unwrap();
//! assert_eq!(crs.name(), "NAVD88");
//! assert!(wkt_crs::write(&crs).starts_with(r#"VERTCRS["NAVD88",VDATUM["#));
//! ```

// ============================================================================
// MODULES (dependency order: base → model → parser → syntax)
// ============================================================================

/// Foundation types: TextRange, Position, LineIndex
pub mod base;

/// CRS object model produced by the reader and consumed by the writer
pub mod model;

/// Reader: Logos lexer, tokenizer, keyword table, grammar
pub mod parser;

/// Writer and pretty printer
pub mod syntax;

// Re-export commonly needed items
pub use parser::keywords;
pub use parser::{
    ErrorKind, Keyword, Parse, ParseOptions, Result, Severity, SyntaxError, Tokenizer, parse,
    parse_as, parse_bound, parse_compound, parse_engineering, parse_geodetic, parse_projected,
    parse_strict, parse_vertical, parse_with_options,
};
pub use syntax::{FormatOptions, ToWkt, reformat, write, write_pretty, write_with};

pub use model::{Crs, CrsKind, Extras, decode_extras, encode_extras};

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};

//! WKT output: the canonical writer and the pretty printer
pub mod formatter;
pub mod writer;

pub use formatter::{FormatOptions, format};
pub use writer::{ToWkt, WktWriter, format_number};

use std::fmt;

use crate::model::Crs;
use crate::parser::{self, Result};

/// Canonical single-line WKT
pub fn write(crs: &Crs) -> String {
    crs.to_wkt()
}

/// Canonical WKT reformatted with the given line break and indentation.
///
/// Empty strings for both produce exactly [`write`]'s output.
pub fn write_pretty(crs: &Crs, newline: &str, indent: &str) -> String {
    write_with(crs, &FormatOptions::new(newline, indent))
}

pub fn write_with(crs: &Crs, options: &FormatOptions) -> String {
    let canonical = crs.to_wkt();
    if options.is_plain() {
        return canonical;
    }
    format(&canonical, options)
}

/// Read WKT text leniently and write it back in canonical, pretty-printed form
pub fn reformat(text: &str, newline: &str, indent: &str) -> Result<String> {
    let crs = parser::parse(text)?;
    Ok(write_pretty(&crs, newline, indent))
}

impl fmt::Display for Crs {
    /// `{}` writes canonical WKT; `{:#}` pretty-prints with the default options
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&write_with(self, &FormatOptions::default()))
        } else {
            f.write_str(&self.to_wkt())
        }
    }
}

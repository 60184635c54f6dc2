//! Foundation types shared by the reader and writer.
//!
//! - [`TextRange`], [`TextSize`] - byte offsets into WKT text
//! - [`LineIndex`], [`Position`] - line/column conversion for diagnostics
//!
//! This module has NO dependencies on other wkt-crs modules.

mod position;

pub use position::{LineIndex, Position};
pub use text_size::{TextRange, TextSize};

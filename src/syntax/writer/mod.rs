//! Canonical WKT writer
//!
//! Emits canonical keywords, `[`/`]` delimiters and `,` separators with no
//! whitespace. Elements are written in the order the reader expects them.
//! The writer has no configuration; pretty output is a separate pass over
//! the canonical text.

mod common;
mod crs;
mod cs;
mod datum;
mod number;
mod operation;

pub use number::format_number;

use crate::parser::Keyword;

/// Builder for WKT text that places separators itself
#[derive(Debug, Default)]
pub struct WktWriter {
    out: String,
    /// One entry per open element: whether it already holds an item
    open: Vec<bool>,
}

impl WktWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Emit a separator unless this is the first item of the element
    fn item(&mut self) {
        if let Some(has_items) = self.open.last_mut() {
            if *has_items {
                self.out.push(',');
            }
            *has_items = true;
        }
    }

    /// `KEYWORD[`
    pub fn open(&mut self, keyword: Keyword) {
        self.item();
        self.out.push_str(keyword.as_str());
        self.out.push('[');
        self.open.push(false);
    }

    /// `]`
    pub fn close(&mut self) {
        self.out.push(']');
        self.open.pop();
    }

    /// Quoted text with `"` doubled
    pub fn quoted(&mut self, text: &str) {
        self.item();
        self.out.push('"');
        self.out.push_str(&text.replace('"', "\"\""));
        self.out.push('"');
    }

    pub fn number(&mut self, value: f64) {
        self.item();
        self.out.push_str(&format_number(value));
    }

    /// Integers (dimensions, axis order, identifier codes) have no decimal point
    pub fn integer(&mut self, value: i64) {
        self.item();
        self.out.push_str(&value.to_string());
    }

    /// A bare word such as an axis direction or a date
    pub fn word(&mut self, text: &str) {
        self.item();
        self.out.push_str(text);
    }

    /// `KEYWORD["text"]`
    pub fn text_element(&mut self, keyword: Keyword, text: &str) {
        self.open(keyword);
        self.quoted(text);
        self.close();
    }

    /// `KEYWORD[number]`
    pub fn number_element(&mut self, keyword: Keyword, value: f64) {
        self.open(keyword);
        self.number(value);
        self.close();
    }

    pub fn write<T: ToWkt + ?Sized>(&mut self, value: &T) {
        value.write_wkt(self);
    }

    pub fn write_all<'a, T: ToWkt + 'a>(&mut self, values: impl IntoIterator<Item = &'a T>) {
        for value in values {
            value.write_wkt(self);
        }
    }

    pub fn write_opt<T: ToWkt>(&mut self, value: Option<&T>) {
        if let Some(value) = value {
            value.write_wkt(self);
        }
    }
}

/// Types that serialize to a WKT element
pub trait ToWkt {
    fn write_wkt(&self, w: &mut WktWriter);

    /// Canonical single-line text
    fn to_wkt(&self) -> String {
        let mut w = WktWriter::new();
        self.write_wkt(&mut w);
        w.finish()
    }
}

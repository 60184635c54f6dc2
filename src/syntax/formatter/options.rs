//! Formatting options

/// Line break and indentation used by the pretty printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Emitted before each nested element
    pub newline: String,
    /// Repeated once per delimiter depth after each newline
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            newline: "\n".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new(newline: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            newline: newline.into(),
            indent: indent.into(),
        }
    }

    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    /// True when formatting reproduces the canonical single-line text
    pub fn is_plain(&self) -> bool {
        self.newline.is_empty() && self.indent.is_empty()
    }
}

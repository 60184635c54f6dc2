//! Reader configuration

/// Options controlling how the reader treats deviations from the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Fail on missing separators, skipped tokens, trailing input and
    /// undersized compound CRSs instead of recording a diagnostic
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

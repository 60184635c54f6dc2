//! Recursive descent reader for WKT CRS text
//!
//! Owns the token stream and the strict/lenient policy. The grammar itself
//! lives in [`super::grammar`] and drives the reader through [`WktParser`].

use text_size::{TextRange, TextSize};
use tracing::{trace, warn};

use super::errors::{ErrorKind, Result, Severity, SyntaxError};
use super::grammar::{self, Literal, WktParser, describe};
use super::keywords::{self, Keyword};
use super::lexer::{Token, TokenKind};
use super::options::ParseOptions;
use super::tokenizer::{Tokenizer, unexpected};
use crate::model::Crs;

/// Result of a successful read: the CRS and any lenient-mode diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub crs: Crs,
    pub diagnostics: Vec<SyntaxError>,
}

impl Parse {
    /// Check if the text was read without deviations
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Read one top-level element from `text`
pub(crate) fn read(text: &str, options: &ParseOptions) -> Result<Parse> {
    let mut reader = Reader::new(text, options);
    let crs = reader.read_top()?;
    Ok(Parse {
        crs,
        diagnostics: reader.diagnostics,
    })
}

/// The reader state
pub(crate) struct Reader<'a> {
    tokens: Tokenizer<'a>,
    strict: bool,
    diagnostics: Vec<SyntaxError>,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            tokens: Tokenizer::new(text),
            strict: options.strict,
            diagnostics: Vec::new(),
        }
    }

    fn read_top(&mut self) -> Result<Crs> {
        if self.tokens.is_at_end() {
            return Err(SyntaxError::at_offset(
                ErrorKind::MissingKeyword,
                "expected a CRS but the text is empty",
                self.tokens.end_offset(),
            ));
        }
        let crs = grammar::parse_crs(self)?;
        self.check_trailing()?;
        Ok(crs)
    }

    fn check_trailing(&mut self) -> Result<()> {
        let Some(first) = self.tokens.peek_token(0) else {
            return Ok(());
        };

        let mut depth = 0usize;
        let mut i = 0;
        while let Some(token) = self.tokens.peek_token(i) {
            match token.kind {
                TokenKind::LeftDelimiter => depth += 1,
                TokenKind::RightDelimiter if depth == 0 => {
                    return Err(SyntaxError::new(
                        ErrorKind::UnbalancedDelimiter,
                        format!("'{}' without a matching opening delimiter", token.text),
                        token.range(),
                    ));
                }
                TokenKind::RightDelimiter => depth -= 1,
                _ => {}
            }
            i += 1;
        }
        if depth > 0 {
            return Err(self.at_end_error("unclosed delimiter in text after the CRS"));
        }

        let range = TextRange::new(first.offset, self.tokens.end_offset());
        self.report(SyntaxError::of_kind(ErrorKind::TrailingInput, range))?;
        while self.tokens.read_token().is_some() {}
        Ok(())
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn peek(&self, n: usize) -> Option<Token<'a>> {
        self.tokens.peek_token(n)
    }

    fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek(n).map(|t| t.kind)
    }

    /// The keyword starting an element at lookahead `n`, if it is a candidate
    fn element_at(&self, n: usize, candidates: &[Keyword]) -> Option<Keyword> {
        let token = self.peek(n)?;
        if token.kind != TokenKind::Word || self.peek_kind(n + 1) != Some(TokenKind::LeftDelimiter) {
            return None;
        }
        keywords::select(token.text, candidates)
    }

    /// Find a candidate element at depth 0 before the enclosing right delimiter
    fn scan_for(&self, candidates: &[Keyword]) -> Option<(usize, Keyword)> {
        let mut depth = 0usize;
        let mut i = 0;
        while let Some(token) = self.peek(i) {
            match token.kind {
                TokenKind::LeftDelimiter => depth += 1,
                TokenKind::RightDelimiter if depth == 0 => return None,
                TokenKind::RightDelimiter => depth -= 1,
                TokenKind::Word if depth == 0 => {
                    if let Some(keyword) = self.element_at(i, candidates) {
                        return Some((i, keyword));
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.tokens.read_token();
        }
    }

    /// Range covering lookahead tokens `0..n`
    fn span(&self, n: usize) -> TextRange {
        let start = self.tokens.offset();
        let end = n
            .checked_sub(1)
            .and_then(|last| self.peek(last))
            .map(|t| t.range().end())
            .unwrap_or(start);
        TextRange::new(start, end)
    }

    fn at_end_error(&self, message: &str) -> SyntaxError {
        SyntaxError::at_offset(ErrorKind::UnbalancedDelimiter, message, self.tokens.end_offset())
    }
}

impl WktParser for Reader<'_> {
    fn offset(&self) -> TextSize {
        self.tokens.offset()
    }

    fn report(&mut self, error: SyntaxError) -> Result<()> {
        if self.strict {
            return Err(error);
        }
        warn!(
            code = error.kind.code(),
            offset = error.offset(),
            "{}",
            error.message
        );
        self.diagnostics.push(error.with_severity(Severity::Warning));
        Ok(())
    }

    fn is_keyword_next(&self, candidates: &[Keyword]) -> bool {
        if self.peek_kind(0) == Some(TokenKind::Separator) {
            return self.element_at(1, candidates).is_some();
        }
        !self.strict && self.element_at(0, candidates).is_some()
    }

    fn next_keyword(&mut self, candidates: &[Keyword]) -> Result<Option<Keyword>> {
        let Some((index, keyword)) = self.scan_for(candidates) else {
            trace!(candidates = %describe(candidates), "no optional element");
            return Ok(None);
        };
        trace!(keyword = keyword.as_str(), skipped = index, "found element");

        let separated = index > 0 && self.peek_kind(index - 1) == Some(TokenKind::Separator);
        let skipped = if separated { index - 1 } else { index };
        if skipped > 0 {
            let error = SyntaxError::new(
                ErrorKind::UnexpectedToken,
                format!("skipped unexpected text before {}", keyword.as_str()),
                self.span(skipped),
            );
            self.report(error)?;
        }
        if !separated {
            let offset = self.peek(index).map(|t| t.offset).unwrap_or_else(|| self.offset());
            self.report(SyntaxError::at_offset(
                ErrorKind::MissingSeparator,
                format!("expected ',' before {}", keyword.as_str()),
                offset,
            ))?;
        }

        self.advance(index + 1);
        Ok(Some(keyword))
    }

    fn read_keyword(&mut self, candidates: &[Keyword]) -> Result<Keyword> {
        let token = match self.tokens.read_token() {
            Some(token) => token,
            None => {
                return Err(SyntaxError::at_offset(
                    ErrorKind::MissingKeyword,
                    format!("expected {}", describe(candidates)),
                    self.tokens.end_offset(),
                ));
            }
        };
        if token.kind != TokenKind::Word {
            return Err(SyntaxError::new(
                ErrorKind::MissingKeyword,
                format!("expected {} but found '{}'", describe(candidates), token.text),
                token.range(),
            ));
        }

        keywords::resolve_required(token.text, token.range())?;
        keywords::select(token.text, candidates).ok_or_else(|| {
            SyntaxError::new(
                ErrorKind::MissingKeyword,
                format!("expected {} but found {}", describe(candidates), token.text),
                token.range(),
            )
        })
    }

    fn open_element(&mut self) -> Result<()> {
        let token = self.tokens.read_expected_token()?;
        if token.kind != TokenKind::LeftDelimiter {
            return Err(unexpected(&token, "'['"));
        }
        Ok(())
    }

    fn close_element(&mut self) -> Result<()> {
        let mut depth = 0usize;
        let mut i = 0;
        loop {
            let Some(token) = self.peek(i) else {
                return Err(self.at_end_error("missing closing delimiter"));
            };
            match token.kind {
                TokenKind::RightDelimiter if depth == 0 => break,
                TokenKind::RightDelimiter => depth -= 1,
                TokenKind::LeftDelimiter => depth += 1,
                _ => {}
            }
            i += 1;
        }

        if i > 0 {
            let text = self.peek(0).map(|t| t.text).unwrap_or_default();
            let error = SyntaxError::new(
                ErrorKind::UnexpectedToken,
                format!("unexpected '{text}' before closing delimiter"),
                self.span(i),
            );
            self.report(error)?;
            self.advance(i);
        }
        self.advance(1);
        Ok(())
    }

    fn read_separator(&mut self) -> Result<()> {
        if self.peek_kind(0) == Some(TokenKind::Separator) {
            self.advance(1);
            return Ok(());
        }
        if self.tokens.is_at_end() {
            return Err(self.at_end_error("unexpected end of text"));
        }
        self.report(SyntaxError::at_offset(
            ErrorKind::MissingSeparator,
            "expected ','",
            self.offset(),
        ))
    }

    fn peek_after_separator(&self) -> Option<TokenKind> {
        if self.peek_kind(0) != Some(TokenKind::Separator) {
            return None;
        }
        self.peek_kind(1)
    }

    fn read_quoted(&mut self) -> Result<String> {
        let token = self.tokens.read_kind(TokenKind::Quoted, "quoted text")?;
        Ok(token.value().into_owned())
    }

    fn read_number(&mut self) -> Result<f64> {
        self.tokens.read_number()
    }

    fn read_unsigned_number(&mut self) -> Result<f64> {
        self.tokens.read_unsigned_number()
    }

    fn read_unsigned_integer(&mut self) -> Result<u64> {
        self.tokens.read_unsigned_integer()
    }

    fn read_word(&mut self) -> Result<Literal> {
        let token = self.tokens.read_kind(TokenKind::Word, "a word")?;
        Ok(literal(&token))
    }

    fn read_literal(&mut self) -> Result<Literal> {
        let token = self.tokens.read_expected_token()?;
        match token.kind {
            TokenKind::Quoted | TokenKind::Number | TokenKind::Word => Ok(literal(&token)),
            _ => Err(unexpected(&token, "a value")),
        }
    }
}

fn literal(token: &Token<'_>) -> Literal {
    Literal {
        kind: token.kind,
        text: token.value().into_owned(),
        range: token.range(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str, strict: bool) -> Reader<'_> {
        Reader::new(text, &ParseOptions { strict })
    }

    #[test]
    fn test_is_keyword_next_requires_separator_when_strict() {
        let r = reader("ID[\"EPSG\",1]", true);
        assert!(!r.is_keyword_next(&[Keyword::Id]));
        let r = reader("ID[\"EPSG\",1]", false);
        assert!(r.is_keyword_next(&[Keyword::Id]));
        let r = reader(",ID[\"EPSG\",1]", true);
        assert!(r.is_keyword_next(&[Keyword::Id]));
    }

    #[test]
    fn test_next_keyword_stops_at_enclosing_delimiter() {
        let mut r = reader(",ANCHOR[\"a\"]],ID[\"EPSG\",1]", false);
        assert_eq!(r.next_keyword(&[Keyword::Id]).unwrap(), None);
        assert_eq!(r.offset(), TextSize::new(0));
    }

    #[test]
    fn test_next_keyword_skips_junk_when_lenient() {
        let mut r = reader(",junk,ID[", false);
        assert_eq!(r.next_keyword(&[Keyword::Id]).unwrap(), Some(Keyword::Id));
        assert_eq!(r.diagnostics.len(), 1);
        assert_eq!(r.diagnostics[0].kind, ErrorKind::UnexpectedToken);
        assert_eq!(r.diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_next_keyword_junk_fails_when_strict() {
        let mut r = reader(",junk,ID[", true);
        let err = r.next_keyword(&[Keyword::Id]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_missing_separator() {
        let mut r = reader("ID[", false);
        assert_eq!(r.next_keyword(&[Keyword::Id]).unwrap(), Some(Keyword::Id));
        assert_eq!(r.diagnostics[0].kind, ErrorKind::MissingSeparator);

        let mut r = reader("ID[", true);
        assert_eq!(
            r.next_keyword(&[Keyword::Id]).unwrap_err().kind,
            ErrorKind::MissingSeparator
        );
    }

    #[test]
    fn test_read_keyword_unknown_spelling() {
        let mut r = reader("BANANA[", true);
        let err = r.read_keyword(&[Keyword::GeogCrs]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeywordSpelling);
    }

    #[test]
    fn test_read_keyword_wrong_keyword() {
        let mut r = reader("DATUM[", false);
        let err = r.read_keyword(&[Keyword::Ellipsoid]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingKeyword);
    }

    #[test]
    fn test_close_element_skips_leftovers_when_lenient() {
        let mut r = reader(",1,X[2]]", false);
        r.close_element().unwrap();
        assert!(r.tokens.is_at_end());
        assert_eq!(r.diagnostics.len(), 1);
    }

    #[test]
    fn test_close_element_at_end_is_fatal() {
        let mut r = reader(",1", false);
        let err = r.close_element().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedDelimiter);
    }
}

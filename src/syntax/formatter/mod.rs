//! Pretty printer for WKT text
//!
//! Re-tokenizes WKT and re-emits it with each nested element on its own
//! line, indented by its delimiter depth. Only the text between tokens
//! changes, so formatted output reads back to the same object graph.

mod options;

#[cfg(test)]
mod tests;

use crate::parser::{Token, TokenKind, tokenize};
pub use options::FormatOptions;
use tracing::trace;

/// Reformat WKT text; tokens are copied verbatim
pub fn format(source: &str, options: &FormatOptions) -> String {
    let tokens = tokenize(source);
    let mut out = String::with_capacity(source.len());
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftDelimiter => depth += 1,
            TokenKind::RightDelimiter => depth = depth.saturating_sub(1),
            _ => {}
        }
        if starts_nested_element(&tokens, i) {
            out.push_str(&options.newline);
            out.push_str(&options.indent(depth));
        }
        out.push_str(token.text);
    }

    trace!(tokens = tokens.len(), bytes = out.len(), "formatted WKT");
    out
}

/// A keyword that opens an element and directly follows a separator
fn starts_nested_element(tokens: &[Token<'_>], i: usize) -> bool {
    tokens[i].is(TokenKind::Word)
        && i > 0
        && tokens[i - 1].is(TokenKind::Separator)
        && tokens
            .get(i + 1)
            .is_some_and(|next| next.is(TokenKind::LeftDelimiter))
}

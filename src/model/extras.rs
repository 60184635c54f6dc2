//! Extras bag: ordered key/value pairs carried from legacy WKT
//!
//! Some WKT1 attributes have no slot in the WKT2 model (a numeric datum type
//! code, `EXTENSION` pairs, a `TOWGS84` vector outside a projected CRS). They
//! are kept here and written inside a `REMARK` as `["key","value"],...`.

use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::parser::errors::{ErrorKind, Result, SyntaxError};
use crate::parser::{TokenKind, Tokenizer};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras(IndexMap<String, String>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair; an existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn shift_remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    /// Render as `["key1","value1"],["key2","value2"]`
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            push_quoted(&mut out, key);
            out.push(',');
            push_quoted(&mut out, value);
            out.push(']');
        }
        out
    }

    /// Parse the `["key","value"],...` list produced by [`Extras::encode`].
    ///
    /// Blank text decodes to an empty bag. Anything that is not exactly a
    /// comma-separated list of two-string brackets is an error.
    pub fn decode(text: &str) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(text);
        let mut extras = Self::new();

        if tokenizer.is_at_end() {
            return Ok(extras);
        }

        loop {
            expect(&mut tokenizer, TokenKind::LeftDelimiter)?;
            let key = expect(&mut tokenizer, TokenKind::Quoted)?;
            expect(&mut tokenizer, TokenKind::Separator)?;
            let value = expect(&mut tokenizer, TokenKind::Quoted)?;
            expect(&mut tokenizer, TokenKind::RightDelimiter)?;
            extras.insert(key, value);

            match tokenizer.read_token() {
                None => return Ok(extras),
                Some(token) if token.kind == TokenKind::Separator => continue,
                Some(token) => {
                    return Err(SyntaxError::new(
                        ErrorKind::UnexpectedToken,
                        format!("unexpected '{}' in extras list", token.text),
                        token.range(),
                    ));
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    out.push_str(&text.replace('"', "\"\""));
    out.push('"');
}

fn expect(tokenizer: &mut Tokenizer<'_>, kind: TokenKind) -> Result<String> {
    let token = tokenizer.read_expected_token()?;
    if token.kind != kind {
        return Err(SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("unexpected '{}' in extras list", token.text),
            token.range(),
        ));
    }
    Ok(token.value().into_owned())
}

/// Free-function form of [`Extras::encode`]
pub fn encode_extras(extras: &Extras) -> String {
    extras.encode()
}

/// Free-function form of [`Extras::decode`]
pub fn decode_extras(text: &str) -> Result<Extras> {
    Extras::decode(text)
}

use shared::domain::Symbol::{self, Dash, Dot};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("'{0}' has no pulse pattern")]
    UnknownSymbol(char),
}

/// Every encodable character with its pulse pattern.
pub const ALPHABET: [(char, &[Symbol]); 13] = [
    ('R', &[Dot, Dash, Dot]),
    ('G', &[Dash, Dash, Dot]),
    ('B', &[Dash, Dot, Dot, Dot]),
    ('0', &[Dash, Dash, Dash, Dash, Dash]),
    ('1', &[Dot, Dash, Dash, Dash, Dash]),
    ('2', &[Dot, Dot, Dash, Dash, Dash]),
    ('3', &[Dot, Dot, Dot, Dash, Dash]),
    ('4', &[Dot, Dot, Dot, Dot, Dash]),
    ('5', &[Dot, Dot, Dot, Dot, Dot]),
    ('6', &[Dash, Dot, Dot, Dot, Dot]),
    ('7', &[Dash, Dash, Dot, Dot, Dot]),
    ('8', &[Dash, Dash, Dash, Dot, Dot]),
    ('9', &[Dash, Dash, Dash, Dash, Dot]),
];

/// Looks up the pattern for one character. Matching is exact: letters must
/// already be upper case.
pub fn encode_char(ch: char) -> Result<&'static [Symbol], EncodeError> {
    ALPHABET
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, pattern)| *pattern)
        .ok_or(EncodeError::UnknownSymbol(ch))
}

/// Renders free text as glyph patterns, one space between letters.
///
/// Input is upper-cased first. The first character outside the alphabet
/// aborts the whole rendering.
pub fn render_pattern(text: &str) -> Result<String, EncodeError> {
    let mut letters = Vec::new();
    for ch in text.chars().flat_map(char::to_uppercase) {
        let glyphs: String = encode_char(ch)?.iter().map(|s| s.glyph()).collect();
        letters.push(glyphs);
    }
    Ok(letters.join(" "))
}

#[cfg(test)]
#[path = "tests/alphabet_tests.rs"]
mod tests;

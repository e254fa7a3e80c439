use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Largest value a selection number may carry.
pub const MAX_SIGNAL_NUMBER: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// The alphabet letter the color is keyed as.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported color '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Exact, case-sensitive match on the color name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == raw)
            .ok_or_else(|| ParseColorError(raw.to_string()))
    }
}

/// A selection number as the caller typed it.
///
/// Always a non-empty run of ASCII digits whose value lies in `0..=100`.
/// The original spelling is kept ("007" stays "007") because every digit
/// is keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SignalNumber(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    #[error("'{0}' is not a whole number")]
    NotNumeric(String),
    #[error("{0} is outside 0-{MAX_SIGNAL_NUMBER}")]
    OutOfRange(String),
}

impl SignalNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        // Digits and range were checked on construction.
        self.0.parse().unwrap_or_default()
    }

    pub fn digits(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl FromStr for SignalNumber {
    type Err = ParseNumberError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unsigned = raw.strip_prefix('-').unwrap_or(raw);
        if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseNumberError::NotNumeric(raw.to_string()));
        }
        // Negative values (including "-0") never have a digit-only spelling.
        if unsigned.len() != raw.len() {
            return Err(ParseNumberError::OutOfRange(raw.to_string()));
        }

        let in_range = raw
            .parse::<u32>()
            .map(|value| value <= MAX_SIGNAL_NUMBER)
            .unwrap_or(false);
        if !in_range {
            return Err(ParseNumberError::OutOfRange(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }
}

impl<'de> Deserialize<'de> for SignalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SignalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One keyed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    pub fn glyph(self) -> char {
        match self {
            Symbol::Dot => '·',
            Symbol::Dash => '−',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Symbol::Dot => "Dot",
            Symbol::Dash => "Dash",
        }
    }
}

/// What part of the selection a pulse belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseRole {
    Color,
    Digit,
}

impl PulseRole {
    pub fn label(self) -> &'static str {
        match self {
            PulseRole::Color => "color",
            PulseRole::Digit => "digit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    IntraLetter,
    InterLetter,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;

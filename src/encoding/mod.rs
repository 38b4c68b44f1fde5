//! Text payloads for literal values.
//!
//! Literal text does not go straight to the screen. A host typically
//! evaluates a script that assigns the text inside a single-quoted string
//! literal, and the text itself is shown as a Python-looking literal. Each of
//! those steps interprets backslashes and quotes once. Every piece of literal
//! text in a projection is produced here, so the escaping is done the same
//! way everywhere.
//!
//! The number of interpreting layers is a property of the host and is
//! configured with [`Layers`]:
//!
//! 1. the displayed literal itself: a quoted string with control characters,
//!    backslashes and double quotes escaped;
//! 2. and above: one more single-quoted script literal per layer, each
//!    doubling backslashes and then escaping single quotes.

use serde::Deserialize;
use thiserror::Error;

use crate::language::Literal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unsupported number of escaping layers: {0} (expected 1 to 4)")]
    LayersOutOfRange(u8),
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("dangling backslash at end of text")]
    DanglingEscape,
    #[error("not a quoted literal: {0}")]
    NotQuoted(String),
}

/// How many string-literal interpretations the text survives on its way to
/// the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct Layers(u8);

impl Layers {
    pub const MINIMUM: u8 = 1;
    pub const MAXIMUM: u8 = 4;

    pub fn new(count: u8) -> Result<Layers, EncodingError> {
        if (Self::MINIMUM..=Self::MAXIMUM).contains(&count) {
            Ok(Layers(count))
        } else {
            Err(EncodingError::LayersOutOfRange(count))
        }
    }

    pub fn count(self) -> u8 {
        self.0
    }

    // layers beyond the displayed literal
    fn embeddings(self) -> u8 {
        self.0 - 1
    }
}

impl Default for Layers {
    /// A webview host: a script evaluation around the displayed literal.
    fn default() -> Self {
        Layers(2)
    }
}

impl TryFrom<u8> for Layers {
    type Error = EncodingError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Layers::new(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoder {
    layers: Layers,
}

impl Encoder {
    pub fn new(layers: Layers) -> Encoder {
        Encoder { layers }
    }

    pub fn layers(&self) -> Layers {
        self.layers
    }

    /// Text for a constant: a quoted string for strings, the canonical
    /// Python spelling for everything else.
    pub fn literal(&self, value: &Literal) -> String {
        match value {
            Literal::String(text) => self.string(text),
            Literal::None => self.wrap("None".to_string()),
            Literal::Bool(true) => self.wrap("True".to_string()),
            Literal::Bool(false) => self.wrap("False".to_string()),
            Literal::Integer(digits) => self.wrap(digits.clone()),
            Literal::Float(number) => self.wrap(float_repr(*number)),
        }
    }

    /// A string shown with its quotes. The empty string yields `""`.
    pub fn string(&self, text: &str) -> String {
        self.wrap(quote(text))
    }

    /// A literal run inside an f-string. Escaped exactly like a string, but
    /// without the quotes: the enclosing f-string node supplies them.
    pub fn fragment(&self, text: &str) -> String {
        let quoted = quote(text);
        let inner = &quoted[1..quoted.len() - 1];
        self.wrap(inner.to_string())
    }

    /// Text shown as is (docstring lines), protected for the host layers
    /// only.
    pub fn verbatim(&self, text: &str) -> String {
        self.wrap(text.to_string())
    }

    fn wrap(&self, mut text: String) -> String {
        for _ in 0..self
            .layers
            .embeddings()
        {
            text = embed(&text);
        }
        text
    }
}

/// Undo everything [`Encoder::string`] did for the given number of layers,
/// recovering the original string.
pub fn decode(encoded: &str, layers: Layers) -> Result<String, EncodingError> {
    let displayed = unwrap(encoded, layers)?;
    serde_json::from_str::<String>(&displayed).map_err(|_| EncodingError::NotQuoted(displayed))
}

/// Evaluate the host layers only, leaving the displayed text.
pub fn unwrap(encoded: &str, layers: Layers) -> Result<String, EncodingError> {
    let mut text = encoded.to_string();
    for _ in 0..layers.embeddings() {
        text = unembed(&text)?;
    }
    Ok(text)
}

fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

// one single-quoted script literal
fn embed(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
}

fn unembed(text: &str) -> Result<String, EncodingError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some(other) => return Err(EncodingError::InvalidEscape(other)),
            None => return Err(EncodingError::DanglingEscape),
        }
    }

    Ok(result)
}

// Python spells exponents with a sign and at least two digits, and writes
// non-finite values in lower case.
fn float_repr(number: f64) -> String {
    if number.is_nan() {
        return "nan".to_string();
    }
    if number.is_infinite() {
        let text = if number > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let text = format!("{:?}", number);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

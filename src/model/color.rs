//! Hex web-colour value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;
use crate::model::FieldValue;

/// A hex web-colour in canonical `#rrggbbaa` form, or empty.
///
/// The setter accepts the short and long forms with or without the leading
/// `#`, with or without alpha:
///
/// | input       | stored      |
/// |-------------|-------------|
/// | `abc`       | `#aabbccff` |
/// | `#abc`      | `#aabbccff` |
/// | `abcd`      | `#aabbccdd` |
/// | `#abcd`     | `#aabbccdd` |
/// | `abcdef`    | `#abcdefff` |
/// | `#abcdef`   | `#abcdefff` |
/// | `abcdef12`  | `#abcdef12` |
/// | `#abcdef12` | `#abcdef12` |
///
/// Input is lower-cased first; the empty string clears the colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

/// Decoded colour channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already stored string without normalising it.
    ///
    /// Use [`FieldValue::validate`] before trusting the result.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    /// Normalises and stores `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` has a length no form above accepts, or if the
    /// normalised value is not `#` followed by 8 hex digits. Use
    /// [`Color::try_set`] for untrusted input.
    pub fn set(&mut self, s: &str) {
        match normalize(s) {
            Ok(v) => self.0 = v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible twin of [`Color::set`]. Leaves the colour unchanged on error.
    pub fn try_set(&mut self, s: &str) -> Result<(), AppError> {
        self.0 = normalize(s)?;
        Ok(())
    }

    pub fn get_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        if self.0.is_empty() { default } else { &self.0 }
    }

    /// Decodes the channels. An empty colour yields `Rgba::default()`.
    ///
    /// # Panics
    ///
    /// Panics if a raw stored value is malformed.
    pub fn rgba(&self) -> Rgba {
        if self.0.is_empty() {
            return Rgba::default();
        }
        if !self.is_valid() {
            panic!("Invalid hex web-color: {}", self.0);
        }
        match hex::decode(&self.0[1..]).as_deref() {
            Ok([r, g, b, a]) => Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: *a,
            },
            _ => panic!("Invalid web-color length: {}", self.0),
        }
    }
}

fn normalize(input: &str) -> Result<String, AppError> {
    let s = input.to_lowercase();
    let b = s.as_bytes();

    let normalized = match b.len() {
        0 | 9 => s.clone(),
        3 => expand(&[b[0], b[1], b[2]], b'f'),
        4 if b[0] == b'#' => expand(&[b[1], b[2], b[3]], b'f'),
        4 => expand(&[b[0], b[1], b[2], b[3]], 0),
        5 if b[0] == b'#' => expand(&[b[1], b[2], b[3], b[4]], 0),
        5 => {
            return Err(AppError::bad_request(
                format!("Invalid hex web-color: 5-digit form needs a leading '#': {input}"),
                json!({ "value": input, "length": 5 }),
            ));
        }
        6 => format!("#{s}ff"),
        7 => format!("{s}ff"),
        8 => format!("#{s}"),
        len => {
            return Err(AppError::bad_request(
                format!("Invalid hex web-color length: {len}"),
                json!({ "value": input, "length": len }),
            ));
        }
    };

    if !is_canonical(&normalized) {
        return Err(AppError::bad_request(
            format!("Invalid hex web-color: {input}"),
            json!({ "value": input }),
        ));
    }

    tracing::trace!(input, normalized = %normalized, "normalized web-color");
    Ok(normalized)
}

/// Doubles every digit; `alpha` (when non-zero) is appended twice.
fn expand(digits: &[u8], alpha: u8) -> String {
    let mut out = String::with_capacity(9);
    out.push('#');
    for &d in digits {
        out.push(d as char);
        out.push(d as char);
    }
    if alpha != 0 {
        out.push(alpha as char);
        out.push(alpha as char);
    }
    out
}

fn is_canonical(s: &str) -> bool {
    match s.len() {
        0 => true,
        9 if s.starts_with('#') => hex::decode(&s[1..]).is_ok(),
        _ => false,
    }
}

impl FieldValue for Color {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn is_valid(&self) -> bool {
        is_canonical(&self.0)
    }

    fn format_error(&self) -> AppError {
        AppError::bad_request(
            format!("Invalid hex web-color: {}", self.0),
            json!({ "value": self.0 }),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).map(Self)
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

//! Radix (base) selection and digit-string conversion.
//!
//! `Radix` covers the four conventional bases with their prefixes; the
//! generalized `RadixStyle` accepts any base from 2 to 36 and is validated
//! when constructed, never at format time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FormatError;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Convert the magnitude of `value` to an uppercase digit string in `base`.
///
/// Sign is the caller's responsibility; the result is never empty
/// (zero renders as `"0"`). Callers guarantee `base` is in 2..=36.
pub(crate) fn digits(value: i128, base: u32) -> String {
    debug_assert!((2..=36).contains(&base));
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }
    let base = base as u128;
    let mut out = Vec::new();
    while magnitude > 0 {
        out.push(DIGITS[(magnitude % base) as usize] as char);
        magnitude /= base;
    }
    out.iter().rev().collect()
}

/// Radix (base) options for integer formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Radix {
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 10 (default)
    #[default]
    Decimal,
    /// Base 16
    Hex,
}

impl Radix {
    /// Numeric base for this radix.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Conventional prefix (`0b`, `0o`, `0x`); empty for decimal.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Hex => "0x",
            Radix::Decimal => "",
        }
    }

    /// Digit count that represents exactly one byte in this radix,
    /// or `None` where no such count exists (decimal).
    pub fn bytewise_digits(self) -> Option<usize> {
        match self {
            Radix::Binary => Some(8),
            Radix::Octal => Some(4),
            Radix::Hex => Some(2),
            Radix::Decimal => None,
        }
    }
}

impl FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "octal" | "oct" | "8" => Ok(Radix::Octal),
            "decimal" | "dec" | "10" => Ok(Radix::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Radix::Hex),
            _ => Err(format!("Unknown radix: {}", s)),
        }
    }
}

/// Generalized radix rendering for any base from 2 to 36.
///
/// Unlike [`Radix`], which is limited to the four conventional bases,
/// a `RadixStyle` renders in arbitrary bases with optional case control
/// and caller-chosen prefix/suffix strings. The base is validated once,
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixStyle {
    base: u32,
    uppercase: bool,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl RadixStyle {
    /// Create a style for the given base.
    ///
    /// Returns [`FormatError::InvalidRadix`] when `base` falls outside
    /// 2..=36; a style that would produce garbage digits cannot be built.
    pub fn new(base: u32) -> crate::Result<Self> {
        if !(2..=36).contains(&base) {
            return Err(FormatError::InvalidRadix(base));
        }
        Ok(Self {
            base,
            uppercase: false,
            prefix: None,
            suffix: None,
        })
    }

    /// Builder: render digit letters in uppercase
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Builder: prepend a prefix string
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Builder: append a suffix string
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// The validated base.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Render `value` in this style: prefix, sign, digits, suffix.
    pub fn string_from<T: Into<i128>>(&self, value: T) -> String {
        let value = value.into();
        let mut rendered = digits(value, self.base);
        if !self.uppercase {
            rendered.make_ascii_lowercase();
        }
        let sign = if value < 0 { "-" } else { "" };
        format!(
            "{}{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            sign,
            rendered,
            self.suffix.as_deref().unwrap_or("")
        )
    }
}

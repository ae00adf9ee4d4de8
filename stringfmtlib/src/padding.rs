//! Fixed-width padding and alignment.
//!
//! A [`StringFormatter`] pads a rendering of any `Display` value out to a
//! minimum width. Widths count `char`s. Text already at or beyond the
//! width passes through unchanged; nothing is ever truncated.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Placement of content within a padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Content flush left, padding on the right
    Left,
    /// Content flush right, padding on the left (default)
    #[default]
    Right,
    /// Content centered; an odd deficit puts the extra character on the left
    Center,
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "center" | "centre" => Ok(Alignment::Center),
            _ => Err(format!("Unknown alignment: {}", s)),
        }
    }
}

/// Padding and alignment configuration.
///
/// Read-only after construction; a call-site width override goes through
/// [`StringFormatter::string_from_width`] rather than mutating the stored
/// width, so a shared formatter is safe to reuse.
///
/// ```rust
/// use stringfmtlib::{Alignment, StringFormatter};
///
/// assert_eq!(StringFormatter::format().width(5).string_from(23), "   23");
/// assert_eq!(
///     StringFormatter::format().alignment(Alignment::Left).width(5).string_from(23),
///     "23   "
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFormatter {
    /// Where the content sits within the field
    pub alignment: Alignment,
    /// Character repeated to fill the deficit
    pub padding_character: char,
    /// Minimum field width; 0 means no minimum
    pub width: usize,
}

impl Default for StringFormatter {
    fn default() -> Self {
        Self {
            alignment: Alignment::Right,
            padding_character: ' ',
            width: 0,
        }
    }
}

impl StringFormatter {
    /// Create a formatter with the defaults: right-aligned, space-filled,
    /// no minimum width.
    pub fn format() -> Self {
        Self::default()
    }

    /// Builder: set the alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder: set the padding character
    pub fn padding_character(mut self, padding_character: char) -> Self {
        self.padding_character = padding_character;
        self
    }

    /// Builder: set the minimum width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Pad `text` to the configured width.
    ///
    /// Deficit distribution: right alignment puts it all on the left,
    /// left alignment all on the right; centering puts `deficit / 2` on
    /// the right and the remainder on the left.
    pub fn pad(&self, text: &str) -> String {
        self.pad_to(text, self.width)
    }

    fn pad_to(&self, text: &str, width: usize) -> String {
        let count = text.chars().count();
        if count >= width {
            return text.to_string();
        }
        let deficit = width - count;
        let fill = |n: usize| self.padding_character.to_string().repeat(n);

        match self.alignment {
            Alignment::Right => format!("{}{}", fill(deficit), text),
            Alignment::Left => format!("{}{}", text, fill(deficit)),
            Alignment::Center => {
                let half = deficit / 2;
                format!("{}{}{}", fill(deficit - half), text, fill(half))
            }
        }
    }

    /// Render `value` via `Display`, then pad it.
    pub fn string_from<T: Display>(&self, value: T) -> String {
        self.pad(&value.to_string())
    }

    /// Like [`string_from`](Self::string_from), but a non-zero `width`
    /// takes precedence over the configured one for this call only.
    pub fn string_from_width<T: Display>(&self, value: T, width: usize) -> String {
        let effective = if width != 0 { width } else { self.width };
        self.pad_to(&value.to_string(), effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_alignment_default() {
        let fmt = StringFormatter::format().width(5);
        assert_eq!(fmt.pad("23"), "   23");
        assert_eq!(fmt.string_from(23), "   23");
        // whole floats display without a fraction, so they pad like ints
        assert_eq!(fmt.string_from(23.0), "   23");
        assert_eq!(fmt.string_from(23.5), " 23.5");
    }

    #[test]
    fn test_left_alignment() {
        let fmt = StringFormatter::format()
            .alignment(Alignment::Left)
            .width(5);
        assert_eq!(fmt.pad("23"), "23   ");
    }

    #[test]
    fn test_center_tie_break_goes_left() {
        // deficit 5: 3 fill chars on the left, 2 on the right
        let fmt = StringFormatter::format()
            .alignment(Alignment::Center)
            .width(7);
        assert_eq!(fmt.pad("23"), "   23  ");

        // even deficit splits evenly
        let fmt = fmt.width(6);
        assert_eq!(fmt.pad("23"), "  23  ");
    }

    #[test]
    fn test_custom_padding_character() {
        let fmt = StringFormatter::format().padding_character('0').width(5);
        assert_eq!(fmt.string_from(23), "00023");
        let fmt = StringFormatter::format()
            .alignment(Alignment::Center)
            .padding_character('-')
            .width(8);
        assert_eq!(fmt.pad("ab"), "---ab---");
    }

    #[test]
    fn test_never_truncates() {
        let fmt = StringFormatter::format().width(3);
        assert_eq!(fmt.pad("longer"), "longer");
        assert_eq!(fmt.pad("abc"), "abc");
        assert_eq!(StringFormatter::format().pad("x"), "x");
    }

    #[test]
    fn test_idempotent_on_sufficient_width() {
        let fmt = StringFormatter::format()
            .alignment(Alignment::Center)
            .width(7);
        let once = fmt.pad("23");
        assert_eq!(fmt.pad(&once), once);
    }

    #[test]
    fn test_width_override_does_not_mutate_config() {
        let fmt = StringFormatter::format().width(5);
        assert_eq!(fmt.string_from_width(23, 8), "      23");
        // zero override falls back to the stored width
        assert_eq!(fmt.string_from_width(23, 0), "   23");
        assert_eq!(fmt.width, 5);
        assert_eq!(fmt.string_from(23), "   23");
    }

    #[test]
    fn test_char_counted_width() {
        let fmt = StringFormatter::format().width(4);
        assert_eq!(fmt.pad("héé"), " héé");
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!(Alignment::from_str("left").unwrap(), Alignment::Left);
        assert_eq!(Alignment::from_str("RIGHT").unwrap(), Alignment::Right);
        assert_eq!(Alignment::from_str("center").unwrap(), Alignment::Center);
        assert!(Alignment::from_str("middle").is_err());
    }
}

//! Floating-point formatting with a bounded fraction length.
//!
//! This is the boundary to general number formatting: the formatter
//! either produces a string or reports that it cannot, and callers that
//! want a total function get the `Unformattable<…>` sentinel instead of
//! an error.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Build the in-band substitute for a value the number formatter could
/// not represent.
pub fn unformattable<T: Debug>(value: T) -> String {
    format!("Unformattable<{:?}>", value)
}

/// Fraction-digit-bounded float formatting.
///
/// No grouping separator, at least one integer digit, trailing zeros in
/// the fraction dropped.
///
/// ```rust
/// use stringfmtlib::FloatFormatter;
///
/// let fmt = FloatFormatter::format(2);
/// assert_eq!(fmt.string_from(123.456), "123.46");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatFormatter {
    /// Maximum number of digits after the decimal point
    pub max_fraction_digits: u32,
}

impl Default for FloatFormatter {
    fn default() -> Self {
        Self {
            max_fraction_digits: 1,
        }
    }
}

impl FloatFormatter {
    /// Create a formatter allowing up to `max_fraction_digits` after the
    /// decimal point.
    pub fn format(max_fraction_digits: u32) -> Self {
        Self {
            max_fraction_digits,
        }
    }

    /// Format `value`, or report that it cannot be represented.
    ///
    /// Non-finite values (NaN, infinities) are the could-not-format case.
    pub fn try_string_from(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return None;
        }

        // Prefer the shortest round-trip rendering when its fraction
        // already fits the bound, so a generous bound does not surface
        // binary representation noise (123.456 at 99 digits stays
        // "123.456").
        let shortest = value.to_string();
        let fraction_len = shortest
            .split_once('.')
            .map(|(_, frac)| frac.len())
            .unwrap_or(0);
        if fraction_len <= self.max_fraction_digits as usize {
            return Some(shortest);
        }

        let rounded = format!("{:.*}", self.max_fraction_digits as usize, value);
        if !rounded.contains('.') {
            return Some(rounded);
        }
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        Some(trimmed.to_string())
    }

    /// Format `value`, substituting the `Unformattable<…>` sentinel for
    /// values the formatter cannot represent. Never fails.
    pub fn string_from(&self, value: f64) -> String {
        self.try_string_from(value)
            .unwrap_or_else(|| unformattable(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_digit_bounds() {
        assert_eq!(FloatFormatter::format(0).string_from(123.456), "123");
        assert_eq!(FloatFormatter::format(1).string_from(123.456), "123.5");
        assert_eq!(FloatFormatter::format(2).string_from(123.456), "123.46");
        assert_eq!(FloatFormatter::format(3).string_from(123.456), "123.456");
        assert_eq!(FloatFormatter::format(99).string_from(123.456), "123.456");
    }

    #[test]
    fn test_rounding_up_to_a_round_number() {
        assert_eq!(FloatFormatter::format(0).string_from(199.6), "200");
        assert_eq!(FloatFormatter::format(1).string_from(1.96), "2");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(FloatFormatter::format(3).string_from(123.4), "123.4");
        assert_eq!(FloatFormatter::format(2).string_from(5.0), "5");
        assert_eq!(FloatFormatter::format(4).string_from(0.25), "0.25");
    }

    #[test]
    fn test_leading_integer_digit() {
        assert_eq!(FloatFormatter::format(2).string_from(0.5), "0.5");
        assert_eq!(FloatFormatter::format(1).string_from(-0.25), "-0.2");
    }

    #[test]
    fn test_default_one_fraction_digit() {
        assert_eq!(FloatFormatter::default().string_from(3.14159), "3.1");
    }

    #[test]
    fn test_non_finite_is_unformattable() {
        let fmt = FloatFormatter::format(2);
        assert_eq!(fmt.try_string_from(f64::NAN), None);
        assert_eq!(fmt.try_string_from(f64::INFINITY), None);
        assert_eq!(fmt.string_from(f64::NAN), "Unformattable<NaN>");
        assert_eq!(fmt.string_from(f64::INFINITY), "Unformattable<inf>");
        assert_eq!(fmt.string_from(f64::NEG_INFINITY), "Unformattable<-inf>");
    }

    #[test]
    fn test_unformattable_sentinel() {
        assert_eq!(unformattable("x"), "Unformattable<\"x\">");
    }
}

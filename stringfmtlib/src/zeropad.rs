//! Fixed two- and three-digit zero padding, the common case for clock
//! and calendar fields.
//!
//! These are shorthands over the value's natural rendering: a value that
//! already fills the field, or a negative one, passes through unchanged.
//! A zero is never inserted in front of a minus sign.

/// Pad a non-negative integer below 10 to two digits: `5` becomes `"05"`.
pub fn two_digits(value: i64) -> String {
    if (0..10).contains(&value) {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Pad a non-negative integer below 100 to three digits: `5` becomes
/// `"005"`, `55` becomes `"055"`.
pub fn three_digits(value: i64) -> String {
    match value {
        0..=9 => format!("00{}", value),
        10..=99 => format!("0{}", value),
        _ => value.to_string(),
    }
}

/// Two-digit padding for a float's integer part: `5.5` becomes `"05.5"`.
pub fn two_digits_f64(value: f64) -> String {
    if (0.0..10.0).contains(&value) {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

//! Small selection helpers: pluralization buckets and conditional text.

/// Pick a noun form by count: exact match on 0 and 1, everything else
/// (negatives included) selects `many`. No locale plural rules.
pub fn select_plural<'a>(count: i64, zero: &'a str, one: &'a str, many: &'a str) -> &'a str {
    match count {
        0 => zero,
        1 => one,
        _ => many,
    }
}

/// Include `literal` only when `condition` holds.
pub fn include_if(condition: bool, literal: &str) -> &str {
    if condition {
        literal
    } else {
        ""
    }
}

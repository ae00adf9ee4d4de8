//! Presentation of optional ("value absent") cases.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Styles for presenting an optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptionalStyle {
    /// `Optional(…)` wrapper around both the present and absent cases
    Descriptive,
    /// No wrapper at all (default)
    #[default]
    Stripped,
    /// Present values render exactly as they display themselves; the
    /// engine adds no wrapper of its own. Absent values use the fallback
    /// text. Kept distinct from `Stripped`: any wrapping in this style
    /// belongs to the value's own rendering, not to the presenter.
    SystemDefault,
}

impl FromStr for OptionalStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "descriptive" => Ok(OptionalStyle::Descriptive),
            "stripped" => Ok(OptionalStyle::Stripped),
            "system" | "default" => Ok(OptionalStyle::SystemDefault),
            _ => Err(format!("Unknown optional style: {}", s)),
        }
    }
}

/// Formats optional values under one of three styles.
///
/// ```rust
/// use stringfmtlib::{OptionalFormatter, OptionalStyle};
///
/// let fmt = OptionalFormatter::format(OptionalStyle::Descriptive);
/// assert_eq!(fmt.string_from(Some(23)), "Optional(23)");
/// assert_eq!(fmt.string_from(None::<i32>), "Optional(nil)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalFormatter {
    /// Presentation style
    pub style: OptionalStyle,
    /// Fallback text for the absent case
    pub absent_text: String,
}

impl Default for OptionalFormatter {
    fn default() -> Self {
        Self {
            style: OptionalStyle::Stripped,
            absent_text: "nil".to_string(),
        }
    }
}

impl OptionalFormatter {
    /// Create a formatter with the given style and the `"nil"` fallback.
    pub fn format(style: OptionalStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Builder: set the absent-case fallback text
    pub fn absent_text(mut self, absent_text: impl Into<String>) -> Self {
        self.absent_text = absent_text.into();
        self
    }

    /// Render the optional value under this formatter's style.
    pub fn string_from<T: Display>(&self, value: Option<T>) -> String {
        match self.style {
            OptionalStyle::Descriptive => match value {
                Some(v) => format!("Optional({})", v),
                None => format!("Optional({})", self.absent_text),
            },
            OptionalStyle::Stripped => match value {
                Some(v) => v.to_string(),
                None => self.absent_text.clone(),
            },
            OptionalStyle::SystemDefault => match value {
                Some(v) => v.to_string(),
                None => self.absent_text.clone(),
            },
        }
    }
}

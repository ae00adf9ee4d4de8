//! # stringfmtlib
//!
//! Configurable display formatters for primitive values: integers under
//! radix/sign/padding rules, fixed-width aligned fields, optional-value
//! presentation, plus a handful of small selection helpers.
//!
//! ## Overview
//!
//! Every formatter here is a plain configuration value with a
//! `string_from` method: build it once, then format any number of values
//! with it. Configurations are read-only after construction; formatting
//! borrows them immutably, so sharing one across calls or threads cannot
//! leak state from one call into the next.
//!
//! - **[`IntegerFormatter`]**: radix (binary/octal/decimal/hex), `0b`-style
//!   prefixes, explicit `+` signs, bytewise or minimum-digit zero padding
//! - **[`RadixStyle`]**: generalized rendering in any base 2–36, validated
//!   at construction
//! - **[`StringFormatter`]**: pad any `Display` value to a minimum width
//!   with left/right/center alignment and a chosen fill character
//! - **[`OptionalFormatter`]**: three styles for `Option<T>` presentation
//! - **[`FloatFormatter`]**: bounded fraction digits, with an in-band
//!   `Unformattable<…>` substitute for values it cannot represent
//! - **[`DateFormatter`]**: timestamp rendering by date/time style pair
//! - [`select_plural`] / [`include_if`] / [`zeropad`] helpers
//!
//! The engine manipulates ASCII digit strings only; it is not a
//! locale-aware numeral system.
//!
//! ## Example
//!
//! ```rust
//! use stringfmtlib::{
//!     Alignment, IntegerFormatter, OptionalFormatter, OptionalStyle, Radix, StringFormatter,
//! };
//!
//! let hex = IntegerFormatter::format(Radix::Hex).uses_prefix(true).bytewise(true);
//! assert_eq!(hex.string_from(15), "0x0F");
//!
//! let cell = StringFormatter::format().alignment(Alignment::Center).width(7);
//! assert_eq!(cell.string_from(23), "   23  ");
//!
//! let opt = OptionalFormatter::format(OptionalStyle::Descriptive);
//! assert_eq!(opt.string_from(None::<i32>), "Optional(nil)");
//! ```

pub mod date;
pub mod error;
pub mod integer;
pub mod number;
pub mod optional;
pub mod padding;
pub mod radix;
pub mod select;
pub mod zeropad;

pub use date::{DateFormatter, DateStyle};
pub use error::FormatError;
pub use integer::IntegerFormatter;
pub use number::{unformattable, FloatFormatter};
pub use optional::{OptionalFormatter, OptionalStyle};
pub use padding::{Alignment, StringFormatter};
pub use radix::{Radix, RadixStyle};
pub use select::{include_if, select_plural};
pub use zeropad::{three_digits, two_digits, two_digits_f64};

/// Result type for stringfmtlib operations
pub type Result<T> = std::result::Result<T, FormatError>;

//! Format and parse local dates with `SimpleDateFormat`-style patterns.
//!
//! A pattern is a string of symbol runs (`yyyy`, `MM`, `hh`...) and literal
//! text. The pattern compiles into a token list once; the same tokens drive
//! both directions: [`DateFormatter`] renders a date through them,
//! [`DateParser`] segments an input string on the pattern's literal
//! characters and decodes each segment back into a calendar field.
//!
//! Parsing is deliberately lenient: malformed segments decode to zero,
//! out-of-range values are clamped, and fields the pattern does not supply
//! are filled from the current time. See [`DateParser::parse_strict`] for
//! the checked variant.
//!
//! ```
//! use chrono::NaiveDate;
//! use pattern_date::{DateFormatter, DateParser};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 10, 29)
//!     .unwrap()
//!     .and_hms_opt(10, 16, 0)
//!     .unwrap();
//!
//! let formatter = DateFormatter::from_pattern("MM/dd/yyyy hh:mm:ss");
//! assert_eq!(formatter.format(&date), "10/29/2024 10:16:00");
//!
//! let parser = DateParser::from_pattern("MM/dd/yyyy hh:mm:ss");
//! assert_eq!(parser.parse("10/29/2024 10:16:00"), date);
//! ```

mod consts;
mod format;
mod locale;
mod parse;
mod pattern;
mod prelude;
mod token;
mod types;

pub use consts::*;
pub use format::{DateFormatter, FormatOptions};
pub use locale::{Locale, LocaleTokenSet};
pub use parse::{DateInput, DateParser, DecodeError, ParseOptions};
pub use pattern::CompiledPattern;
pub use token::{Token, TokenKind};
pub use types::{EraSpan, HourConvention, Repetition, WeekNumbering, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::NaiveDateTime;

/// Error raised when a locale argument cannot be resolved to a supported
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LocaleError {
    #[display(fmt = "Unrecognized locale tag: {_0}")]
    Unrecognized(String),
    #[display(fmt = "Empty locale tag")]
    Empty,
}

impl std::error::Error for LocaleError {}

/// One-shot formatting in the default locale.
///
/// Builds a throwaway [`DateFormatter`]; construct one yourself to reuse
/// the compiled pattern across calls.
pub fn format(pattern: &str, datetime: &NaiveDateTime) -> String {
    DateFormatter::from_pattern(pattern).format(datetime)
}

/// One-shot lenient parsing in the default locale.
///
/// Builds a throwaway [`DateParser`]; construct one yourself to reuse the
/// compiled pattern or to set a pivot year.
pub fn parse(pattern: &str, input: &str) -> NaiveDateTime {
    DateParser::from_pattern(pattern).parse(input)
}

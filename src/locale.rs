use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LocaleError;
use crate::prelude::*;
use crate::token::{Token, TokenKind};
use crate::types::{EraSpan, HourConvention, WeekNumbering};

/// A supported locale, identified by its BCP 47-style tag.
///
/// Serializes as the tag string and deserializes through [`Locale::resolve`],
/// so unknown tags are rejected at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English (United States): January-first week numbering, weeks start
    /// on Sunday
    #[display(fmt = "en-US")]
    EnUs,
    /// English (United Kingdom): same display names as `en-US` with
    /// ISO 8601 week numbering and Monday week start
    #[display(fmt = "en-GB")]
    EnGb,
    /// German (Germany)
    #[display(fmt = "de-DE")]
    DeDe,
}

impl Default for Locale {
    fn default() -> Self {
        Self::EnUs
    }
}

impl Locale {
    /// Normalizes a locale tag and resolves it to a supported locale.
    ///
    /// Matching is case-insensitive and accepts `_` in place of `-`;
    /// a bare language subtag resolves to that language's default region.
    ///
    /// # Errors
    /// Returns `LocaleError::Empty` for a blank tag and
    /// `LocaleError::Unrecognized` for any tag outside the supported set.
    pub fn resolve(tag: &str) -> Result<Self, LocaleError> {
        let normalized = tag.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "" => Err(LocaleError::Empty),
            "en" | "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "de" | "de-de" => Ok(Self::DeDe),
            _ => Err(LocaleError::Unrecognized(tag.trim().to_owned())),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

// --- display data for the built-in locales ---

const EN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const EN_MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const EN_DAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const EN_DAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const EN_ERAS: [EraSpan; 2] = [
    EraSpan { name: "Before Christ", abbrev: "BC", start: None, end: Some(1) },
    EraSpan { name: "Anno Domini", abbrev: "AD", start: Some(1), end: None },
];

const DE_MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];
const DE_MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];
const DE_DAY_NAMES: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];
const DE_DAY_ABBREVS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
const DE_DAY_LETTERS: [&str; 7] = ["S", "M", "D", "M", "D", "F", "S"];
const DE_ERAS: [EraSpan; 2] = [
    EraSpan { name: "vor Christus", abbrev: "v. Chr.", start: None, end: Some(1) },
    EraSpan { name: "nach Christus", abbrev: "n. Chr.", start: Some(1), end: None },
];

/// Weekday index (0 = Sunday) a locale's weeks start on
const SUNDAY: u32 = 0;
const MONDAY: u32 = 1;

/// The locale-parameterized bundle of display data every token needs:
/// month and day name tables, era table, am/pm strings, and the locale's
/// week-numbering policy.
///
/// A token set is immutable after construction. Consumers that switch
/// locale derive a fresh set rather than mutating one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleTokenSet {
    locale: Locale,
    month_names: &'static [&'static str; 12],
    month_abbrevs: &'static [&'static str; 12],
    day_names: &'static [&'static str; 7],
    day_abbrevs: &'static [&'static str; 7],
    day_letters: &'static [&'static str; 7],
    am: &'static str,
    pm: &'static str,
    eras: &'static [EraSpan],
    week_numbering: WeekNumbering,
    first_weekday: u32,
}

impl LocaleTokenSet {
    /// Builds the token set for a locale
    pub fn new(locale: Locale) -> Self {
        match locale {
            Locale::EnUs => Self {
                locale,
                month_names: &EN_MONTH_NAMES,
                month_abbrevs: &EN_MONTH_ABBREVS,
                day_names: &EN_DAY_NAMES,
                day_abbrevs: &EN_DAY_ABBREVS,
                day_letters: &EN_DAY_LETTERS,
                am: "AM",
                pm: "PM",
                eras: &EN_ERAS,
                week_numbering: WeekNumbering::JanuaryFirst,
                first_weekday: SUNDAY,
            },
            Locale::EnGb => Self {
                locale,
                month_names: &EN_MONTH_NAMES,
                month_abbrevs: &EN_MONTH_ABBREVS,
                day_names: &EN_DAY_NAMES,
                day_abbrevs: &EN_DAY_ABBREVS,
                day_letters: &EN_DAY_LETTERS,
                am: "AM",
                pm: "PM",
                eras: &EN_ERAS,
                week_numbering: WeekNumbering::Iso8601,
                first_weekday: MONDAY,
            },
            Locale::DeDe => Self {
                locale,
                month_names: &DE_MONTH_NAMES,
                month_abbrevs: &DE_MONTH_ABBREVS,
                day_names: &DE_DAY_NAMES,
                day_abbrevs: &DE_DAY_ABBREVS,
                day_letters: &DE_DAY_LETTERS,
                am: "AM",
                pm: "PM",
                eras: &DE_ERAS,
                week_numbering: WeekNumbering::Iso8601,
                first_weekday: MONDAY,
            },
        }
    }

    /// The locale this set was derived from
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The locale's week-numbering policy
    pub const fn week_numbering(&self) -> WeekNumbering {
        self.week_numbering
    }

    /// Weekday the locale's weeks start on (0 = Sunday)
    pub const fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    /// Instantiates the token for one run of identical pattern symbols.
    ///
    /// The run's first character selects the field; the token keeps the
    /// whole run so it knows the output width it governs. Characters
    /// outside the symbol table produce a literal token, so arbitrary
    /// text passes through a pattern unchanged.
    pub fn token(&self, run: &str) -> Token {
        let symbol = run.chars().next().unwrap_or(' ');
        if let Some(convention) = HourConvention::from_symbol(symbol) {
            return Token::new(run, TokenKind::Hour(convention));
        }
        let kind = match symbol {
            'G' => TokenKind::Era { eras: self.eras },
            'y' | 'Y' => TokenKind::Year,
            'M' | 'L' => TokenKind::Month {
                names: self.month_names,
                abbrevs: self.month_abbrevs,
            },
            'w' => TokenKind::WeekInYear {
                numbering: self.week_numbering,
                first_weekday: self.first_weekday,
            },
            'W' => TokenKind::WeekInMonth { first_weekday: self.first_weekday },
            'd' => TokenKind::DayOfMonth,
            'D' => TokenKind::DayInYear,
            'F' => TokenKind::WeekdayOccurrence,
            'E' => TokenKind::DayName {
                names: self.day_names,
                abbrevs: self.day_abbrevs,
                letters: self.day_letters,
            },
            'u' => TokenKind::IsoDayNumber,
            'a' => TokenKind::AmPm { am: self.am, pm: self.pm },
            'm' => TokenKind::Minute,
            's' => TokenKind::Second,
            'S' => TokenKind::Millisecond,
            _ => TokenKind::Literal,
        };
        Token::new(run, kind)
    }
}

impl From<Locale> for LocaleTokenSet {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}

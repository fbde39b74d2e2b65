use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// How a token reacts to the length of its symbol run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    /// Run length has no effect on the rendered form
    None,
    /// Numeric output is zero-padded to the run length
    Pad,
    /// The run's characters are emitted verbatim
    Repeat,
    /// Run length selects a different form (full name, abbreviation, numeric)
    VaryFormat,
}

/// One of the four hour-of-day conventions selectable from a pattern.
///
/// Each convention owns its numeric range and the wraparound boundary used
/// when converting to and from the 0-23 hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum HourConvention {
    /// `H`: 0-23
    #[display(fmt = "H")]
    ZeroTo23,
    /// `h`: 1-12, midnight and noon render as 12
    #[display(fmt = "h")]
    OneTo12,
    /// `K`: 0-11
    #[display(fmt = "K")]
    ZeroTo11,
    /// `k`: 1-24, midnight renders as 24
    #[display(fmt = "k")]
    OneTo24,
}

impl HourConvention {
    /// Maps a pattern symbol to its convention, `None` for non-hour symbols
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'H' => Some(Self::ZeroTo23),
            'h' => Some(Self::OneTo12),
            'K' => Some(Self::ZeroTo11),
            'k' => Some(Self::OneTo24),
            _ => None,
        }
    }

    /// Inclusive numeric range of the convention
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Self::ZeroTo23 => (0, 23),
            Self::OneTo12 => (1, 12),
            Self::ZeroTo11 => (0, 11),
            Self::OneTo24 => (1, 24),
        }
    }

    /// Converts an hour of day (0-23) into this convention's display value
    pub(crate) const fn display_hour(self, hour: u32) -> u32 {
        match self {
            Self::ZeroTo23 => hour,
            Self::OneTo12 => {
                let wrapped = hour % 12;
                if wrapped == 0 { 12 } else { wrapped }
            }
            Self::ZeroTo11 => hour % 12,
            Self::OneTo24 => {
                if hour == 0 {
                    24
                } else {
                    hour
                }
            }
        }
    }

    /// Inverts [`display_hour`](Self::display_hour): interprets a parsed value
    /// under this convention as a 0-based hour of day.
    ///
    /// Out-of-range values first wrap into the convention's bounds
    /// (below the minimum adds the maximum, above the maximum subtracts the
    /// minimum), matching the rendering wrap applied in reverse.
    pub(crate) const fn hour_of_day(self, value: i64) -> i64 {
        let (min, max) = self.bounds();
        let wrapped = if value < min {
            value + max
        } else if value > max {
            value - min
        } else {
            value
        };
        match self {
            Self::OneTo12 => wrapped % 12,
            Self::OneTo24 => wrapped % 24,
            Self::ZeroTo23 | Self::ZeroTo11 => wrapped,
        }
    }
}

/// Policy used to assign week numbers to dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WeekNumbering {
    /// ISO 8601 week dates: week 1 holds the first Thursday of the year
    #[display(fmt = "iso-8601")]
    Iso8601,
    /// Week 1 is the week containing January 1st, weeks start on the
    /// locale's first weekday
    #[display(fmt = "january-first")]
    JanuaryFirst,
}

/// A named span of years forming one era of a calendar.
///
/// Open-ended bounds extend the span infinitely in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraSpan {
    /// Full display name, e.g. "Anno Domini"
    pub name: &'static str,
    /// Abbreviated display name, e.g. "AD"
    pub abbrev: &'static str,
    /// First year of the era (inclusive), `None` for an open start
    pub start: Option<i32>,
    /// Year the era ends (exclusive), `None` for an open end
    pub end: Option<i32>,
}

impl EraSpan {
    /// Whether the given year falls inside this era's span
    pub const fn contains(&self, year: i32) -> bool {
        let after_start = match self.start {
            Some(start) => year >= start,
            None => true,
        };
        let before_end = match self.end {
            Some(end) => year < end,
            None => true,
        };
        after_start && before_end
    }
}

// --- calendar arithmetic ---

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Ordinal position of a date among same-weekday dates in its month:
/// 1 for days 1-7, 2 for days 8-14, and so on.
pub(crate) const fn weekday_occurrence(day: u32) -> u32 {
    (day - 1) / DAYS_PER_WEEK + 1
}

/// Day of month of the first occurrence of `weekday` (0 = Sunday) in the
/// given month.
pub(crate) fn first_weekday_occurrence(year: i32, month: u32, weekday: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    let first_weekday = first.weekday().num_days_from_sunday();
    1 + (weekday + DAYS_PER_WEEK - first_weekday) % DAYS_PER_WEEK
}

/// Week number of `date` within its year under the given policy.
///
/// `first_weekday` (0 = Sunday) only affects the January-first policy.
pub(crate) fn week_of_year(date: NaiveDate, numbering: WeekNumbering, first_weekday: u32) -> u32 {
    match numbering {
        WeekNumbering::Iso8601 => date.iso_week().week(),
        WeekNumbering::JanuaryFirst => {
            let jan_first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or_default();
            let offset = (jan_first.weekday().num_days_from_sunday() + DAYS_PER_WEEK
                - first_weekday)
                % DAYS_PER_WEEK;
            (date.ordinal0() + offset) / DAYS_PER_WEEK + 1
        }
    }
}

/// Week number of `date` within its month, weeks starting on `first_weekday`.
pub(crate) fn week_of_month(date: NaiveDate, first_weekday: u32) -> u32 {
    let month_first = date.with_day(1).unwrap_or(date);
    let offset = (month_first.weekday().num_days_from_sunday() + DAYS_PER_WEEK - first_weekday)
        % DAYS_PER_WEEK;
    (date.day0() + offset) / DAYS_PER_WEEK + 1
}

// --- string/number primitives ---

/// Parses an integer leniently: leading zeros are stripped and anything
/// unparseable falls back to 0.
pub(crate) fn parse_int_or_zero(s: &str) -> i64 {
    let trimmed = s.trim().trim_start_matches('0');
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or(0)
}

/// Left-pads the decimal rendering of `value` with zeros to `width`
pub(crate) fn zero_pad(value: i64, width: usize) -> String {
    format!("{value:0width$}")
}

/// Converts a millisecond Unix timestamp into local wall-clock time.
/// Unrepresentable inputs fall back to the epoch.
pub(crate) fn timestamp_to_local(millis: i64) -> NaiveDateTime {
    chrono::Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .unwrap_or_default()
}

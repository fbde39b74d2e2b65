use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::LocaleError;
use crate::consts::{
    ABBREV_WIDTH, DEFAULT_PATTERN, DEFAULT_PIVOT_YEAR, MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE,
    MAX_SECOND, MAX_YEAR, MIN_YEAR, PIVOT_FUTURE_CENTURY, PIVOT_PAST_CENTURY,
};
use crate::format::DateFormatter;
use crate::locale::{Locale, LocaleTokenSet};
use crate::pattern::CompiledPattern;
use crate::prelude::*;
use crate::token::{Token, TokenKind};
use crate::types::{days_in_month, first_weekday_occurrence, parse_int_or_zero, timestamp_to_local};

/// Sentinel for a calendar field no segment has written yet
const UNSET: i64 = -1;

/// Two-digit year values sit below this bound
const TWO_DIGIT_YEAR_BOUND: i64 = 100;

/// Error describing one segment that failed to decode.
///
/// Only surfaced by [`DateParser::parse_strict`]; the lenient entry points
/// fall back to zero/sentinel values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A numeric field received a non-numeric segment.
    #[error("Segment {segment:?} is not numeric for pattern symbol '{symbol}'")]
    NotNumeric { symbol: char, segment: String },

    /// A name field received a string outside its name tables.
    #[error("Unknown name {segment:?} for pattern symbol '{symbol}'")]
    UnknownName { symbol: char, segment: String },

    /// The input did not split into one segment per token.
    #[error("Input split into {found} segments but the pattern has {expected} tokens")]
    SegmentCount { expected: usize, found: usize },
}

/// Parser input. Values that already carry a point in time bypass the
/// pattern machinery entirely.
#[derive(Debug, Clone, Copy, From)]
pub enum DateInput<'a> {
    /// An already-resolved datetime, returned as-is
    DateTime(NaiveDateTime),
    /// Milliseconds since the Unix epoch, converted to local time
    Timestamp(i64),
    /// A string to parse against the configured pattern
    Text(&'a str),
}

/// Configuration for a [`DateParser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// The format pattern the input is expected to follow
    pub pattern: String,
    /// Locale supplying name tables and week policy
    pub locale: Locale,
    /// Two-digit-year pivot, see [`DateParser::set_pivot_year`]
    pub pivot_year: i32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_owned(),
            locale: Locale::default(),
            pivot_year: DEFAULT_PIVOT_YEAR,
        }
    }
}

impl ParseOptions {
    pub fn new(pattern: impl Into<String>, locale: Locale) -> Self {
        Self {
            pattern: pattern.into(),
            locale,
            pivot_year: DEFAULT_PIVOT_YEAR,
        }
    }
}

/// Scratch variables the decoding loop accumulates into. `-1` marks a
/// field no segment has supplied.
#[derive(Debug, Clone, Copy)]
struct FieldAccumulator {
    year: i64,
    month: i64,
    day_of_month: i64,
    weekday: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis: i64,
    /// A PM marker was decoded before any hour segment; the +12
    /// adjustment is applied once the hour arrives
    pm_pending: bool,
}

impl FieldAccumulator {
    const fn unset() -> Self {
        Self {
            year: UNSET,
            month: UNSET,
            day_of_month: UNSET,
            weekday: UNSET,
            hours: UNSET,
            minutes: UNSET,
            seconds: UNSET,
            millis: UNSET,
            pm_pending: false,
        }
    }
}

/// Parses strings back into dates through the same token model the
/// formatter renders with.
///
/// Parsing is lenient by default: malformed segments decode to zero or
/// are ignored, out-of-range values are clamped, and missing fields are
/// filled from the reference time. [`parse_strict`](Self::parse_strict)
/// surfaces decode failures instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    options: ParseOptions,
    token_set: LocaleTokenSet,
    compiled: CompiledPattern,
    pivot_year: i32,
}

impl DateParser {
    /// Builds a parser, deriving a fresh token set for the configured
    /// locale
    pub fn new(options: ParseOptions) -> Self {
        let token_set = LocaleTokenSet::new(options.locale);
        Self::with_token_set(options, token_set)
    }

    /// Builds a parser around an explicitly supplied token set, which
    /// takes precedence over one derived from `options.locale`
    pub fn with_token_set(options: ParseOptions, token_set: LocaleTokenSet) -> Self {
        let compiled = CompiledPattern::compile(&options.pattern, &token_set);
        let pivot_year = options.pivot_year.max(0);
        Self { options, token_set, compiled, pivot_year }
    }

    /// Parser for a pattern in the default locale
    pub fn from_pattern(pattern: impl Into<String>) -> Self {
        Self::new(ParseOptions::new(pattern, Locale::default()))
    }

    /// Parser for a pattern and a raw locale tag.
    ///
    /// # Errors
    /// Returns [`LocaleError`] if the tag does not resolve to a supported
    /// locale.
    pub fn from_tag(pattern: impl Into<String>, tag: &str) -> Result<Self, LocaleError> {
        let locale = Locale::resolve(tag)?;
        Ok(Self::new(ParseOptions::new(pattern, locale)))
    }

    /// Parser inverting an existing formatter: pattern, locale, and token
    /// set are inherited from it
    pub fn from_formatter(formatter: &DateFormatter) -> Self {
        Self::with_token_set(
            ParseOptions::new(formatter.pattern(), formatter.locale()),
            *formatter.token_set(),
        )
    }

    /// The configured pattern
    pub fn pattern(&self) -> &str {
        &self.options.pattern
    }

    /// The configured locale
    pub const fn locale(&self) -> Locale {
        self.options.locale
    }

    /// The token set decoding is performed against
    pub const fn token_set(&self) -> &LocaleTokenSet {
        &self.token_set
    }

    /// The current two-digit-year pivot
    pub const fn pivot_year(&self) -> i32 {
        self.pivot_year
    }

    /// Changes the two-digit-year pivot for subsequent calls: a two-digit
    /// year above the pivot lands in the 1900s, at or below it in the
    /// 2000s. Negative values are clamped to 0.
    pub fn set_pivot_year(&mut self, pivot_year: i32) {
        self.pivot_year = pivot_year.max(0);
    }

    /// Switches locale, re-deriving the token set and recompiling the
    /// pattern against it
    pub fn set_locale(&mut self, locale: Locale) {
        self.options.locale = locale;
        self.token_set = LocaleTokenSet::new(locale);
        self.compiled = CompiledPattern::compile(&self.options.pattern, &self.token_set);
    }

    /// Parses an input string against the configured pattern, filling
    /// fields the pattern does not supply from the current local time.
    ///
    /// Never fails: malformed segments fall back to zero, out-of-range
    /// values are clamped.
    pub fn parse(&self, input: &str) -> NaiveDateTime {
        self.parse_from(input, chrono::Local::now().naive_local())
    }

    /// Like [`parse`](Self::parse) with an explicit reference time for
    /// the defaulting step, which makes the result reproducible.
    pub fn parse_from(&self, input: &str, reference: NaiveDateTime) -> NaiveDateTime {
        self.run(input, reference, false).unwrap_or_default()
    }

    /// Resolves any parser input: datetimes pass straight through,
    /// timestamps convert to local time, text goes through
    /// [`parse`](Self::parse).
    pub fn parse_value<'a>(&self, input: impl Into<DateInput<'a>>) -> NaiveDateTime {
        match input.into() {
            DateInput::DateTime(datetime) => datetime,
            DateInput::Timestamp(millis) => timestamp_to_local(millis),
            DateInput::Text(text) => self.parse(text),
        }
    }

    /// Strict variant of [`parse`](Self::parse): the input must split
    /// into exactly one segment per token and every segment must decode.
    ///
    /// # Errors
    /// Returns the first [`DecodeError`] encountered.
    pub fn parse_strict(&self, input: &str) -> Result<NaiveDateTime, DecodeError> {
        self.run(input, chrono::Local::now().naive_local(), true)
    }

    fn run(
        &self,
        input: &str,
        reference: NaiveDateTime,
        strict: bool,
    ) -> Result<NaiveDateTime, DecodeError> {
        let tokens = self.compiled.tokens();
        let delimiters = self.compiled.literal_delimiters();
        let segments = segment(input, &delimiters);
        if strict && segments.len() != tokens.len() {
            return Err(DecodeError::SegmentCount {
                expected: tokens.len(),
                found: segments.len(),
            });
        }

        let mut fields = FieldAccumulator::unset();
        for (token, segment) in tokens.iter().zip(&segments) {
            let outcome = self.decode(token, segment, &mut fields);
            if strict {
                outcome?;
            }
        }
        Ok(assemble(fields, reference))
    }

    /// Decodes one segment into the accumulator according to its token's
    /// field kind. Lenient updates are applied even when the returned
    /// result is an error; only strict mode acts on it.
    fn decode(
        &self,
        token: &Token,
        segment: &str,
        fields: &mut FieldAccumulator,
    ) -> Result<(), DecodeError> {
        match token.kind() {
            TokenKind::Literal => Ok(()),
            TokenKind::Era { eras } => {
                let known = name_position(segment, eras.iter().map(|era| era.abbrev))
                    .or_else(|| name_position(segment, eras.iter().map(|era| era.name)))
                    .is_some();
                if known {
                    Ok(())
                } else {
                    Err(unknown_name(token, segment))
                }
            }
            TokenKind::Year => {
                let (value, check) = numeric(token, segment);
                fields.year = if value < TWO_DIGIT_YEAR_BOUND {
                    if value > i64::from(self.pivot_year) {
                        value + PIVOT_PAST_CENTURY
                    } else {
                        value + PIVOT_FUTURE_CENTURY
                    }
                } else {
                    value
                };
                check
            }
            TokenKind::Month { names, abbrevs } => {
                if token.width() >= ABBREV_WIDTH {
                    match name_position(segment, names.iter().copied())
                        .or_else(|| name_position(segment, abbrevs.iter().copied()))
                    {
                        Some(index) => {
                            fields.month = (index as i64).clamp(0, 11);
                            Ok(())
                        }
                        None => {
                            fields.month = 0;
                            Err(unknown_name(token, segment))
                        }
                    }
                } else {
                    let (value, check) = numeric(token, segment);
                    fields.month = (value - 1).clamp(0, 11);
                    check
                }
            }
            TokenKind::DayOfMonth => {
                let (value, check) = numeric(token, segment);
                fields.day_of_month = value;
                check
            }
            TokenKind::DayName { names, abbrevs, .. } => {
                if token.width() >= ABBREV_WIDTH {
                    match name_position(segment, names.iter().copied())
                        .or_else(|| name_position(segment, abbrevs.iter().copied()))
                    {
                        Some(index) => {
                            fields.weekday = (index as i64).clamp(0, 6);
                            Ok(())
                        }
                        None => {
                            fields.weekday = 0;
                            Err(unknown_name(token, segment))
                        }
                    }
                } else {
                    let (value, check) = numeric(token, segment);
                    fields.weekday = value.clamp(0, 6);
                    check
                }
            }
            TokenKind::IsoDayNumber => {
                let (value, check) = numeric(token, segment);
                // 7 is Sunday in ISO numbering, index 0 internally
                fields.weekday = (value % 7).clamp(0, 6);
                check
            }
            TokenKind::Hour(convention) => {
                let (value, check) = numeric(token, segment);
                let mut hour = convention.hour_of_day(value);
                if fields.pm_pending {
                    if hour < 12 {
                        hour += 12;
                    }
                    fields.pm_pending = false;
                }
                fields.hours = hour;
                check
            }
            TokenKind::AmPm { am, pm } => {
                if eq_fold(segment, pm) {
                    if fields.hours == UNSET {
                        fields.pm_pending = true;
                    } else if (0..12).contains(&fields.hours) {
                        fields.hours += 12;
                    }
                    Ok(())
                } else if eq_fold(segment, am) {
                    Ok(())
                } else {
                    Err(unknown_name(token, segment))
                }
            }
            TokenKind::Minute => {
                let (value, check) = numeric(token, segment);
                fields.minutes = value;
                check
            }
            TokenKind::Second => {
                let (value, check) = numeric(token, segment);
                fields.seconds = value;
                check
            }
            TokenKind::Millisecond => {
                let (value, check) = numeric(token, segment);
                fields.millis = value;
                check
            }
            // these tokens carry no scratch field; their segments only
            // get validated in strict mode
            TokenKind::WeekInYear { .. }
            | TokenKind::WeekInMonth { .. }
            | TokenKind::DayInYear
            | TokenKind::WeekdayOccurrence => {
                let (_, check) = numeric(token, segment);
                check
            }
        }
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Splits an input string on the single-character delimiter alphabet: a
/// delimiter closes the accumulating segment and is pushed as its own
/// one-character segment, everything else accumulates. The result is
/// positionally aligned with the compiled token list.
fn segment(input: &str, delimiters: &HashSet<char>) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in input.chars() {
        if delimiters.contains(&ch) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            segments.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Fills unset fields and builds the final local datetime.
///
/// Year and month default to the reference time. An unset day of month
/// becomes the first occurrence of the resolved weekday (or the
/// reference's weekday) in the resolved month. Unset time fields sit at
/// the sentinel and clamp up to zero.
fn assemble(mut fields: FieldAccumulator, reference: NaiveDateTime) -> NaiveDateTime {
    if fields.year == UNSET {
        fields.year = i64::from(reference.year());
    }
    if fields.month == UNSET {
        fields.month = i64::from(reference.month0());
    }
    let year = fields.year.clamp(i64::from(MIN_YEAR), i64::from(MAX_YEAR)) as i32;
    let month = fields.month.clamp(0, 11) as u32 + 1;

    if fields.day_of_month == UNSET {
        let weekday = if fields.weekday == UNSET {
            i64::from(reference.weekday().num_days_from_sunday())
        } else {
            fields.weekday
        };
        fields.day_of_month = i64::from(first_weekday_occurrence(year, month, weekday as u32));
    }
    let day = fields
        .day_of_month
        .clamp(1, i64::from(days_in_month(year, month))) as u32;

    let hours = fields.hours.clamp(0, MAX_HOUR) as u32;
    let minutes = fields.minutes.clamp(0, MAX_MINUTE) as u32;
    let seconds = fields.seconds.clamp(0, MAX_SECOND) as u32;
    let millis = fields.millis.clamp(0, MAX_MILLISECOND) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hours, minutes, seconds, millis))
        .unwrap_or_default()
}

/// Lenient numeric decode: the value falls back to 0 for malformed
/// segments, the result reports whether the segment was actually numeric.
fn numeric(token: &Token, segment: &str) -> (i64, Result<(), DecodeError>) {
    let value = parse_int_or_zero(segment);
    let trimmed = segment.trim();
    let is_numeric = !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit());
    let check = if is_numeric {
        Ok(())
    } else {
        Err(DecodeError::NotNumeric {
            symbol: token.symbol(),
            segment: segment.to_owned(),
        })
    };
    (value, check)
}

fn unknown_name(token: &Token, segment: &str) -> DecodeError {
    DecodeError::UnknownName {
        symbol: token.symbol(),
        segment: segment.to_owned(),
    }
}

/// Case-insensitive position of a segment within a name table
fn name_position<'a>(segment: &str, mut names: impl Iterator<Item = &'a str>) -> Option<usize> {
    let needle = segment.trim().to_lowercase();
    names.position(|name| name.to_lowercase() == needle)
}

/// Locale-tolerant case-insensitive string comparison
fn eq_fold(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn reference() -> NaiveDateTime {
        // a Tuesday
        NaiveDate::from_ymd_opt(2024, 10, 29)
            .unwrap()
            .and_hms_opt(10, 16, 0)
            .unwrap()
    }

    fn datetime(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_parse_full_pattern() {
        let parser = DateParser::from_pattern("MM/dd/yyyy hh:mm:ss");
        let parsed = parser.parse_from("10/29/2024 10:16:00", reference());
        assert_eq!(parsed, datetime(2024, 10, 29, 10, 16, 0));
    }

    #[test]
    fn test_parse_is_deterministic_when_all_fields_present() {
        // no defaulting step is reached, so the plain entry point works
        let parser = DateParser::from_pattern("MM/dd/yyyy HH:mm:ss");
        let parsed = parser.parse("01/02/2003 04:05:06");
        assert_eq!(parsed, datetime(2003, 1, 2, 4, 5, 6));
    }

    #[test]
    fn test_segmentation_aligns_with_tokens() {
        let delimiters: HashSet<char> = ['/', ' ', ':'].into_iter().collect();
        let segments = segment("10/29/2024 10:16:00", &delimiters);
        assert_eq!(
            segments,
            vec!["10", "/", "29", "/", "2024", " ", "10", ":", "16", ":", "00"]
        );
    }

    #[test]
    fn test_two_digit_year_pivot_default() {
        let parser = DateParser::from_pattern("MM/dd/yy");
        assert_eq!(
            parser.parse_from("01/01/30", reference()).year(),
            2030
        );
        assert_eq!(
            parser.parse_from("01/01/70", reference()).year(),
            1970
        );
    }

    #[test]
    fn test_pivot_year_is_mutable_without_recompiling() {
        let mut parser = DateParser::from_pattern("MM/dd/yy");
        assert_eq!(parser.pivot_year(), 65);
        parser.set_pivot_year(10);
        assert_eq!(parser.parse_from("01/01/30", reference()).year(), 1930);
        assert_eq!(parser.parse_from("01/01/05", reference()).year(), 2005);
    }

    #[test]
    fn test_pivot_year_clamps_at_zero() {
        let mut parser = DateParser::from_pattern("MM/dd/yy");
        parser.set_pivot_year(-20);
        assert_eq!(parser.pivot_year(), 0);
        // 0 is not above the pivot, so it stays in the 2000s
        assert_eq!(parser.parse_from("01/01/00", reference()).year(), 2000);
        assert_eq!(parser.parse_from("01/01/05", reference()).year(), 1905);
    }

    #[test]
    fn test_four_digit_years_bypass_the_pivot() {
        let parser = DateParser::from_pattern("yyyy");
        assert_eq!(parser.parse_from("1850", reference()).year(), 1850);
    }

    #[test]
    fn test_twelve_without_marker_is_midnight() {
        let parser = DateParser::from_pattern("hh");
        assert_eq!(parser.parse_from("12", reference()).hour(), 0);
    }

    #[test]
    fn test_twelve_with_pm_marker_is_noon() {
        let parser = DateParser::from_pattern("hh a");
        assert_eq!(parser.parse_from("12 PM", reference()).hour(), 12);
    }

    #[test]
    fn test_pm_after_hour_adjusts() {
        let parser = DateParser::from_pattern("hh a");
        assert_eq!(parser.parse_from("01 PM", reference()).hour(), 13);
        assert_eq!(parser.parse_from("07 AM", reference()).hour(), 7);
    }

    #[test]
    fn test_pm_before_hour_defers_adjustment() {
        let parser = DateParser::from_pattern("a hh");
        assert_eq!(parser.parse_from("PM 07", reference()).hour(), 19);
        assert_eq!(parser.parse_from("AM 07", reference()).hour(), 7);
    }

    #[test]
    fn test_pm_leaves_24_hour_values_alone() {
        let parser = DateParser::from_pattern("HH a");
        assert_eq!(parser.parse_from("13 PM", reference()).hour(), 13);
    }

    #[test]
    fn test_hour_convention_24_wraps() {
        let parser = DateParser::from_pattern("kk");
        assert_eq!(parser.parse_from("24", reference()).hour(), 0);
        assert_eq!(parser.parse_from("23", reference()).hour(), 23);
    }

    #[test]
    fn test_day_of_month_defaults_to_first_weekday_occurrence() {
        // no day token: the reference's weekday (Tuesday) picks the day,
        // and the first Tuesday of October 2024 is the 1st
        let parser = DateParser::from_pattern("MM/yyyy");
        let parsed = parser.parse_from("10/2024", reference());
        assert_eq!(parsed, datetime(2024, 10, 1, 0, 0, 0));
    }

    #[test]
    fn test_weekday_token_steers_day_defaulting() {
        let parser = DateParser::from_pattern("EEE MM yyyy");
        // first Friday of October 2024 is the 4th
        let parsed = parser.parse_from("Fri 10 2024", reference());
        assert_eq!(parsed.day(), 4);
    }

    #[test]
    fn test_iso_day_number_steers_day_defaulting() {
        let parser = DateParser::from_pattern("u MM yyyy");
        // ISO 7 is Sunday; the first Sunday of October 2024 is the 6th
        let parsed = parser.parse_from("7 10 2024", reference());
        assert_eq!(parsed.day(), 6);
    }

    #[test]
    fn test_empty_pattern_defaults_everything() {
        let parser = DateParser::from_pattern("");
        let parsed = parser.parse_from("", reference());
        assert_eq!(parsed, datetime(2024, 10, 1, 0, 0, 0));
    }

    #[test]
    fn test_time_fields_clamp() {
        let parser = DateParser::from_pattern("HH:mm:ss");
        let parsed = parser.parse_from("99:99:99", reference());
        assert_eq!(parsed.hour(), 23);
        assert_eq!(parsed.minute(), 59);
        assert_eq!(parsed.second(), 59);
    }

    #[test]
    fn test_day_of_month_clamps_into_the_month() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        let parsed = parser.parse_from("02/31/2023", reference());
        assert_eq!(parsed.month(), 2);
        assert_eq!(parsed.day(), 28);
    }

    #[test]
    fn test_month_numeric_is_clamped() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        assert_eq!(parser.parse_from("00/15/2024", reference()).month(), 1);
        assert_eq!(parser.parse_from("13/15/2024", reference()).month(), 12);
    }

    #[test]
    fn test_month_name_parsing() {
        let parser = DateParser::from_pattern("dd MMMM yyyy");
        let parsed = parser.parse_from("15 October 2024", reference());
        assert_eq!(parsed, datetime(2024, 10, 15, 0, 0, 0));
        // abbreviations and arbitrary case resolve too
        let parser = DateParser::from_pattern("dd MMM yyyy");
        assert_eq!(parser.parse_from("15 oct 2024", reference()).month(), 10);
    }

    #[test]
    fn test_month_name_parsing_german() {
        let parser = DateParser::new(ParseOptions::new("dd MMMM yyyy", Locale::DeDe));
        let parsed = parser.parse_from("15 März 2024", reference());
        assert_eq!(parsed, datetime(2024, 3, 15, 0, 0, 0));
        assert_eq!(parser.parse_from("15 märz 2024", reference()).month(), 3);
    }

    #[test]
    fn test_malformed_segments_fall_back_leniently() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        let parsed = parser.parse_from("XX/YY/2024", reference());
        assert_eq!(parsed, datetime(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_era_segments_are_recognized_but_carry_no_field() {
        let parser = DateParser::from_pattern("yyyy G");
        let parsed = parser.parse_strict("2024 AD").unwrap();
        assert_eq!(parsed.year(), 2024);
    }

    #[test]
    fn test_multi_character_literal_segments_on_first_character_only() {
        // the literal " - " only contributes ' ' to the delimiter
        // alphabet, so the '-' lands in the month token's segment and
        // decodes to January; pinned, not fixed
        let parser = DateParser::from_pattern("dd - MM");
        let parsed = parser.parse_from("29 - 10", reference());
        assert_eq!(parsed.day(), 29);
        assert_eq!(parsed.month(), 1);
    }

    #[test]
    fn test_strict_rejects_non_numeric_segment() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        let error = parser.parse_strict("XX/15/2024").unwrap_err();
        assert!(matches!(
            error,
            DecodeError::NotNumeric { symbol: 'M', ref segment } if segment == "XX"
        ));
    }

    #[test]
    fn test_strict_rejects_unknown_name() {
        let parser = DateParser::from_pattern("MMMM dd yyyy");
        let error = parser.parse_strict("Smarch 13 2024").unwrap_err();
        assert!(matches!(error, DecodeError::UnknownName { symbol: 'M', .. }));
    }

    #[test]
    fn test_strict_rejects_segment_count_mismatch() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        let error = parser.parse_strict("10/29").unwrap_err();
        assert_eq!(
            error,
            DecodeError::SegmentCount { expected: 5, found: 3 }
        );
    }

    #[test]
    fn test_strict_accepts_well_formed_input() {
        let parser = DateParser::from_pattern("MM/dd/yyyy hh:mm:ss");
        let parsed = parser.parse_strict("10/29/2024 10:16:00").unwrap();
        assert_eq!(parsed, datetime(2024, 10, 29, 10, 16, 0));
    }

    #[test]
    fn test_parse_value_passthrough() {
        let parser = DateParser::from_pattern("MM/dd/yyyy");
        let already = datetime(2001, 2, 3, 4, 5, 6);
        assert_eq!(parser.parse_value(already), already);

        let millis: i64 = 1_730_196_960_000;
        assert_eq!(parser.parse_value(millis), timestamp_to_local(millis));

        assert_eq!(
            parser.parse_value("10/29/2024").date(),
            NaiveDate::from_ymd_opt(2024, 10, 29).unwrap()
        );
    }

    #[test]
    fn test_parser_inherits_formatter_configuration() {
        let formatter =
            DateFormatter::new(crate::FormatOptions::new("dd MMMM yyyy", Locale::DeDe));
        let parser = DateParser::from_formatter(&formatter);
        assert_eq!(parser.pattern(), "dd MMMM yyyy");
        assert_eq!(parser.locale(), Locale::DeDe);
        assert_eq!(
            parser.parse_from("15 März 2024", reference()).month(),
            3
        );
    }

    #[test]
    fn test_set_locale_rederives_token_set() {
        let mut parser = DateParser::from_pattern("MMMM");
        assert_eq!(parser.parse_from("Oktober", reference()).month(), 1);
        parser.set_locale(Locale::DeDe);
        assert_eq!(parser.parse_from("Oktober", reference()).month(), 10);
    }

    #[test]
    fn test_from_tag_resolution() {
        let parser = DateParser::from_tag("yyyy", "EN_us").unwrap();
        assert_eq!(parser.locale(), Locale::EnUs);
        assert!(DateParser::from_tag("yyyy", "tlh").is_err());
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = ParseOptions {
            pattern: "yyyy-MM-dd".to_owned(),
            locale: Locale::EnGb,
            pivot_year: 50,
        };
        let json = serde_json::to_string(&options).unwrap();
        let parsed: ParseOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, parsed);
    }

    #[test]
    fn test_options_pivot_is_clamped_at_construction() {
        let mut options = ParseOptions::new("yy", Locale::EnUs);
        options.pivot_year = -10;
        let parser = DateParser::new(options);
        assert_eq!(parser.pivot_year(), 0);
    }

    #[test]
    fn test_millisecond_parsing() {
        let parser = DateParser::from_pattern("ss.SSS");
        let parsed = parser.parse_from("07.042", reference());
        assert_eq!(parsed.second(), 7);
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 42);
    }
}

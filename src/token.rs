use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::consts::{ABBREV_WIDTH, FULL_NAME_WIDTH, PM_SWITCH_HOUR, TWO_DIGIT_YEAR_WIDTH};
use crate::types::{
    EraSpan, HourConvention, Repetition, WeekNumbering, week_of_month, week_of_year,
    weekday_occurrence, zero_pad,
};

/// The field behind one compiled token.
///
/// A closed tagged union instead of a class-per-symbol hierarchy: each
/// variant carries only the display data it needs, taken from the
/// [`LocaleTokenSet`](crate::LocaleTokenSet) that instantiated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Verbatim pattern text with no date field
    Literal,
    /// `G`: era, resolved by scanning the era table for the span
    /// containing the date's year
    Era { eras: &'static [EraSpan] },
    /// `y`/`Y`: year; a two-symbol run renders the last two digits
    Year,
    /// `M`/`L`: month, numeric or named depending on run length
    Month {
        names: &'static [&'static str; 12],
        abbrevs: &'static [&'static str; 12],
    },
    /// `w`: week of year under the locale's numbering policy
    WeekInYear {
        numbering: WeekNumbering,
        first_weekday: u32,
    },
    /// `W`: week of month
    WeekInMonth { first_weekday: u32 },
    /// `d`: day of month
    DayOfMonth,
    /// `D`: ordinal day within the year
    DayInYear,
    /// `F`: ordinal position of the date among same-weekday dates in
    /// its month
    WeekdayOccurrence,
    /// `E`: day name, letter/abbreviation/full depending on run length
    DayName {
        names: &'static [&'static str; 7],
        abbrevs: &'static [&'static str; 7],
        letters: &'static [&'static str; 7],
    },
    /// `u`: ISO day number, Monday = 1 through Sunday = 7
    IsoDayNumber,
    /// `a`: am/pm marker
    AmPm {
        am: &'static str,
        pm: &'static str,
    },
    /// `H`/`h`/`K`/`k`: hour of day under one of the four conventions
    Hour(HourConvention),
    /// `m`: minute
    Minute,
    /// `s`: second
    Second,
    /// `S`: millisecond
    Millisecond,
}

/// One compiled run of identical pattern symbols, or one literal run.
///
/// Immutable once constructed. The token keeps the exact substring of the
/// pattern it was compiled from, so a compiled pattern can always be
/// reassembled losslessly and every token knows the width it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    pub(crate) fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub(crate) fn literal(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Literal)
    }

    /// The exact pattern substring this token was compiled from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The field this token renders and decodes
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// The representative pattern symbol (first character of the run)
    pub fn symbol(&self) -> char {
        self.text.chars().next().unwrap_or(' ')
    }

    /// Length of the symbol run in characters
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    pub const fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal)
    }

    /// How this token's rendered form reacts to the run length
    pub const fn repetition(&self) -> Repetition {
        match self.kind {
            TokenKind::Literal => Repetition::Repeat,
            TokenKind::AmPm { .. } => Repetition::None,
            TokenKind::Era { .. }
            | TokenKind::Year
            | TokenKind::Month { .. }
            | TokenKind::DayName { .. } => Repetition::VaryFormat,
            _ => Repetition::Pad,
        }
    }

    /// Renders this token against a date.
    ///
    /// Total over any valid datetime: literal tokens emit their stored
    /// text, numeric tokens zero-pad to the run width, name tokens pick
    /// the table sized to the run width.
    pub fn render(&self, datetime: &NaiveDateTime) -> String {
        let width = self.width();
        match &self.kind {
            TokenKind::Literal => self.text.clone(),
            TokenKind::Era { eras } => {
                let year = datetime.year();
                match eras.iter().find(|era| era.contains(year)) {
                    Some(era) if width >= FULL_NAME_WIDTH => era.name.to_owned(),
                    Some(era) => era.abbrev.to_owned(),
                    None => String::new(),
                }
            }
            TokenKind::Year => {
                if width == TWO_DIGIT_YEAR_WIDTH {
                    zero_pad(
                        i64::from(datetime.year().rem_euclid(100)),
                        TWO_DIGIT_YEAR_WIDTH,
                    )
                } else {
                    zero_pad(i64::from(datetime.year()), width)
                }
            }
            TokenKind::Month { names, abbrevs } => {
                let index = datetime.month0() as usize;
                if width >= FULL_NAME_WIDTH {
                    names[index].to_owned()
                } else if width == ABBREV_WIDTH {
                    abbrevs[index].to_owned()
                } else {
                    zero_pad(i64::from(datetime.month()), width)
                }
            }
            TokenKind::WeekInYear { numbering, first_weekday } => zero_pad(
                i64::from(week_of_year(datetime.date(), *numbering, *first_weekday)),
                width,
            ),
            TokenKind::WeekInMonth { first_weekday } => {
                zero_pad(i64::from(week_of_month(datetime.date(), *first_weekday)), width)
            }
            TokenKind::DayOfMonth => zero_pad(i64::from(datetime.day()), width),
            TokenKind::DayInYear => zero_pad(i64::from(datetime.ordinal()), width),
            TokenKind::WeekdayOccurrence => {
                zero_pad(i64::from(weekday_occurrence(datetime.day())), width)
            }
            TokenKind::DayName { names, abbrevs, letters } => {
                let index = datetime.weekday().num_days_from_sunday() as usize;
                if width >= FULL_NAME_WIDTH {
                    names[index].to_owned()
                } else if width == ABBREV_WIDTH {
                    abbrevs[index].to_owned()
                } else {
                    letters[index].to_owned()
                }
            }
            TokenKind::IsoDayNumber => {
                zero_pad(i64::from(datetime.weekday().number_from_monday()), width)
            }
            TokenKind::AmPm { am, pm } => {
                // The PM string applies from hour 11, one hour before noon.
                if datetime.hour() >= PM_SWITCH_HOUR {
                    (*pm).to_owned()
                } else {
                    (*am).to_owned()
                }
            }
            TokenKind::Hour(convention) => {
                zero_pad(i64::from(convention.display_hour(datetime.hour())), width)
            }
            TokenKind::Minute => zero_pad(i64::from(datetime.minute()), width),
            TokenKind::Second => zero_pad(i64::from(datetime.second()), width),
            TokenKind::Millisecond => {
                let millis = (datetime.nanosecond() / 1_000_000).min(999);
                zero_pad(i64::from(millis), width)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, LocaleTokenSet};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 29)
            .unwrap()
            .and_hms_opt(hour, 16, 0)
            .unwrap()
    }

    fn set() -> LocaleTokenSet {
        LocaleTokenSet::new(Locale::EnUs)
    }

    #[test]
    fn test_literal_renders_verbatim() {
        let token = Token::literal(" / ");
        assert_eq!(token.render(&date(2024, 10, 29)), " / ");
        assert_eq!(token.repetition(), Repetition::Repeat);
    }

    #[test]
    fn test_year_widths() {
        let dt = date(2024, 10, 29);
        assert_eq!(set().token("yyyy").render(&dt), "2024");
        assert_eq!(set().token("yy").render(&dt), "24");
        assert_eq!(set().token("y").render(&dt), "2024");
        assert_eq!(set().token("yyyyy").render(&dt), "02024");
        assert_eq!(set().token("YY").render(&dt), "24");
    }

    #[test]
    fn test_two_digit_year_of_round_century() {
        assert_eq!(set().token("yy").render(&date(2000, 1, 1)), "00");
        assert_eq!(set().token("yy").render(&date(2007, 1, 1)), "07");
    }

    #[test]
    fn test_month_widths() {
        let dt = date(2024, 3, 5);
        assert_eq!(set().token("M").render(&dt), "3");
        assert_eq!(set().token("MM").render(&dt), "03");
        assert_eq!(set().token("MMM").render(&dt), "Mar");
        assert_eq!(set().token("MMMM").render(&dt), "March");
        assert_eq!(set().token("LL").render(&dt), "03");
    }

    #[test]
    fn test_day_of_month_padding() {
        let dt = date(2024, 3, 5);
        assert_eq!(set().token("d").render(&dt), "5");
        assert_eq!(set().token("dd").render(&dt), "05");
    }

    #[test]
    fn test_day_name_widths() {
        // October 29 2024 is a Tuesday
        let dt = date(2024, 10, 29);
        assert_eq!(set().token("EEEE").render(&dt), "Tuesday");
        assert_eq!(set().token("EEE").render(&dt), "Tue");
        assert_eq!(set().token("E").render(&dt), "T");
    }

    #[test]
    fn test_iso_day_number_sunday_is_seven() {
        // December 1 2024 is a Sunday
        let sunday = date(2024, 12, 1);
        assert_eq!(set().token("u").render(&sunday), "7");
        let monday = date(2024, 12, 2);
        assert_eq!(set().token("u").render(&monday), "1");
    }

    #[test]
    fn test_am_pm_switches_at_eleven() {
        assert_eq!(set().token("a").render(&at_hour(0)), "AM");
        assert_eq!(set().token("a").render(&at_hour(10)), "AM");
        // pinned: the switch happens at 11, not 12
        assert_eq!(set().token("a").render(&at_hour(11)), "PM");
        assert_eq!(set().token("a").render(&at_hour(12)), "PM");
        assert_eq!(set().token("a").render(&at_hour(23)), "PM");
    }

    #[test]
    fn test_hour_conventions() {
        assert_eq!(set().token("h").render(&at_hour(0)), "12");
        assert_eq!(set().token("h").render(&at_hour(12)), "12");
        assert_eq!(set().token("h").render(&at_hour(13)), "1");
        assert_eq!(set().token("hh").render(&at_hour(13)), "01");
        assert_eq!(set().token("H").render(&at_hour(13)), "13");
        assert_eq!(set().token("HH").render(&at_hour(9)), "09");
        assert_eq!(set().token("K").render(&at_hour(13)), "1");
        assert_eq!(set().token("K").render(&at_hour(0)), "0");
        assert_eq!(set().token("k").render(&at_hour(0)), "24");
        assert_eq!(set().token("k").render(&at_hour(13)), "13");
    }

    #[test]
    fn test_minute_second_padding() {
        let dt = NaiveDate::from_ymd_opt(2024, 10, 29)
            .unwrap()
            .and_hms_opt(10, 5, 9)
            .unwrap();
        assert_eq!(set().token("m").render(&dt), "5");
        assert_eq!(set().token("mm").render(&dt), "05");
        assert_eq!(set().token("s").render(&dt), "9");
        assert_eq!(set().token("ss").render(&dt), "09");
    }

    #[test]
    fn test_millisecond_rendering() {
        let dt = NaiveDate::from_ymd_opt(2024, 10, 29)
            .unwrap()
            .and_hms_milli_opt(10, 16, 0, 42)
            .unwrap();
        assert_eq!(set().token("SSS").render(&dt), "042");
        assert_eq!(set().token("S").render(&dt), "42");
    }

    #[test]
    fn test_era_rendering() {
        let now = date(2024, 10, 29);
        assert_eq!(set().token("G").render(&now), "AD");
        assert_eq!(set().token("GGGG").render(&now), "Anno Domini");

        let far_past = date(-100, 1, 1);
        assert_eq!(set().token("G").render(&far_past), "BC");
        assert_eq!(set().token("GGGG").render(&far_past), "Before Christ");
    }

    #[test]
    fn test_week_tokens() {
        let dt = date(2024, 10, 29);
        assert_eq!(set().token("w").render(&dt), "44");
        assert_eq!(set().token("ww").render(&dt), "44");
        assert_eq!(set().token("W").render(&dt), "5");
        assert_eq!(set().token("D").render(&dt), "303");
        assert_eq!(set().token("DDDD").render(&dt), "0303");
        // fifth Tuesday of its month
        assert_eq!(set().token("F").render(&dt), "5");
    }

    #[test]
    fn test_repetition_classification() {
        assert_eq!(set().token("MM").repetition(), Repetition::VaryFormat);
        assert_eq!(set().token("dd").repetition(), Repetition::Pad);
        assert_eq!(set().token("a").repetition(), Repetition::None);
        assert_eq!(set().token("hh").repetition(), Repetition::Pad);
        assert_eq!(Token::literal("-").repetition(), Repetition::Repeat);
    }
}

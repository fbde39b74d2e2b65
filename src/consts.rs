/// Pattern used by formatters and parsers constructed without an explicit one
pub const DEFAULT_PATTERN: &str = "MM/dd/yyyy hh:mm:ss";

/// Default two-digit-year pivot: values above it land in the 1900s,
/// values at or below it in the 2000s
pub const DEFAULT_PIVOT_YEAR: i32 = 65;

/// Century added to a two-digit year above the pivot
pub const PIVOT_PAST_CENTURY: i64 = 1900;
/// Century added to a two-digit year at or below the pivot
pub const PIVOT_FUTURE_CENTURY: i64 = 2000;

/// Symbol-run width that selects the two-digit year form
pub const TWO_DIGIT_YEAR_WIDTH: usize = 2;
/// Symbol-run width at which name tokens render their full name
pub const FULL_NAME_WIDTH: usize = 4;
/// Symbol-run width at which name tokens render their abbreviation
pub const ABBREV_WIDTH: usize = 3;

/// Hour at which the am/pm token switches to the PM string.
/// 11, not 12: one hour earlier than a conventional 12-hour clock.
pub const PM_SWITCH_HOUR: u32 = 11;

/// Every character the pattern compiler treats as a field symbol;
/// anything else becomes literal text
pub const PATTERN_SYMBOLS: &str = "GyYMLwWdDFEuaHhKkmsS";

/// Latest year a parsed date is clamped to
pub const MAX_YEAR: i32 = 9999;
/// Earliest year a parsed date is clamped to
pub const MIN_YEAR: i32 = -9999;

/// Maximum hour value after clamping
pub const MAX_HOUR: i64 = 23;
/// Maximum minute value after clamping
pub const MAX_MINUTE: i64 = 59;
/// Maximum second value after clamping
pub const MAX_SECOND: i64 = 59;
/// Maximum millisecond value after clamping
pub const MAX_MILLISECOND: i64 = 999;

/// Maximum valid month number
pub const MAX_MONTH: u32 = 12;
/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days per week, used by the week-number and weekday-occurrence math
pub(crate) const DAYS_PER_WEEK: u32 = 7;

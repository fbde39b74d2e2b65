use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::LocaleError;
use crate::consts::DEFAULT_PATTERN;
use crate::locale::{Locale, LocaleTokenSet};
use crate::pattern::CompiledPattern;
use crate::types::timestamp_to_local;

/// Configuration for a [`DateFormatter`], with named fields instead of
/// positional argument juggling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// The format pattern, e.g. `"MM/dd/yyyy hh:mm:ss"`
    pub pattern: String,
    /// Locale supplying name tables and week policy
    pub locale: Locale,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_owned(),
            locale: Locale::default(),
        }
    }
}

impl FormatOptions {
    pub fn new(pattern: impl Into<String>, locale: Locale) -> Self {
        Self { pattern: pattern.into(), locale }
    }
}

/// Renders dates through a compiled pattern.
///
/// Constructed once and reused across any number of [`format`](Self::format)
/// calls; formatting is a pure function of the configuration and the input
/// date, with no error conditions for valid datetimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    options: FormatOptions,
    token_set: LocaleTokenSet,
    compiled: CompiledPattern,
}

impl DateFormatter {
    /// Builds a formatter, deriving a fresh token set for the configured
    /// locale
    pub fn new(options: FormatOptions) -> Self {
        let token_set = LocaleTokenSet::new(options.locale);
        Self::with_token_set(options, token_set)
    }

    /// Builds a formatter around an explicitly supplied token set, which
    /// takes precedence over one derived from `options.locale`
    pub fn with_token_set(options: FormatOptions, token_set: LocaleTokenSet) -> Self {
        let compiled = CompiledPattern::compile(&options.pattern, &token_set);
        Self { options, token_set, compiled }
    }

    /// Formatter for a pattern in the default locale
    pub fn from_pattern(pattern: impl Into<String>) -> Self {
        Self::new(FormatOptions::new(pattern, Locale::default()))
    }

    /// Formatter for a locale with the default pattern
    pub fn from_locale(locale: Locale) -> Self {
        Self::new(FormatOptions::new(DEFAULT_PATTERN, locale))
    }

    /// Formatter for a pattern and a raw locale tag.
    ///
    /// # Errors
    /// Returns [`LocaleError`] if the tag does not resolve to a supported
    /// locale.
    pub fn from_tag(pattern: impl Into<String>, tag: &str) -> Result<Self, LocaleError> {
        let locale = Locale::resolve(tag)?;
        Ok(Self::new(FormatOptions::new(pattern, locale)))
    }

    /// The configured pattern
    pub fn pattern(&self) -> &str {
        &self.options.pattern
    }

    /// The configured locale
    pub const fn locale(&self) -> Locale {
        self.options.locale
    }

    /// The token set rendering is performed against
    pub const fn token_set(&self) -> &LocaleTokenSet {
        &self.token_set
    }

    /// The compiled form of the configured pattern
    pub const fn compiled_pattern(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// Switches locale, re-deriving the token set and recompiling the
    /// pattern against it
    pub fn set_locale(&mut self, locale: Locale) {
        self.options.locale = locale;
        self.token_set = LocaleTokenSet::new(locale);
        self.compiled = CompiledPattern::compile(&self.options.pattern, &self.token_set);
    }

    /// Replaces the pattern, recompiling against the current token set
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.options.pattern = pattern.into();
        self.compiled = CompiledPattern::compile(&self.options.pattern, &self.token_set);
    }

    /// Renders a date: every token is rendered in pattern order and the
    /// results concatenated. Literal tokens emit their text verbatim.
    pub fn format(&self, datetime: &NaiveDateTime) -> String {
        self.compiled
            .tokens()
            .iter()
            .map(|token| token.render(datetime))
            .collect()
    }

    /// Renders a millisecond Unix timestamp, interpreted in local time
    pub fn format_timestamp(&self, millis: i64) -> String {
        self.format(&timestamp_to_local(millis))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

//! Configuration types for parsing and statistics.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`HeaderGrammar`] - how a message header's date and time are written
//! - [`ParserConfig`] - grammar plus parser behavior
//! - [`StatsConfig`] - media placeholder and word-frequency settings
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AmPmSpacing, DateOrder, HeaderGrammar, ParserConfig};
//! use chatstat::parser::LogParser;
//!
//! let grammar = HeaderGrammar::new()
//!     .with_date_order(DateOrder::DayFirst)
//!     .with_am_pm_space(AmPmSpacing::Space);
//!
//! let parser = LogParser::with_config(ParserConfig::new().with_grammar(grammar));
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Order of the day and month fields in a header date such as `1/2/23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `M/D/YY`, the US export locale
    #[default]
    MonthFirst,
    /// `D/M/YY`, most other locales
    DayFirst,
}

impl DateOrder {
    /// Interprets a slash-delimited header date.
    ///
    /// Years written with one or two digits are taken as 20YY, four digits
    /// are taken as written. Returns `None` for any other year width, when
    /// the text is not three numeric fields, or when it names a day that
    /// does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstat::config::DateOrder;
    /// use chrono::NaiveDate;
    ///
    /// assert_eq!(
    ///     DateOrder::MonthFirst.parse_date("1/2/23"),
    ///     NaiveDate::from_ymd_opt(2023, 1, 2)
    /// );
    /// assert_eq!(
    ///     DateOrder::DayFirst.parse_date("1/2/23"),
    ///     NaiveDate::from_ymd_opt(2023, 2, 1)
    /// );
    /// ```
    pub fn parse_date(self, text: &str) -> Option<NaiveDate> {
        let mut parts = text.trim().split('/');
        let first = parts.next()?;
        let second = parts.next()?;
        let year_text = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let first: u32 = first.parse().ok()?;
        let second: u32 = second.parse().ok()?;
        let year: i32 = year_text.parse().ok()?;
        let year = match year_text.len() {
            1 | 2 => year + 2000,
            4 => year,
            _ => return None,
        };

        let (month, day) = match self {
            DateOrder::MonthFirst => (first, second),
            DateOrder::DayFirst => (second, first),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Renders a date the way an export in this order writes it, with a
    /// four-digit year.
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            DateOrder::MonthFirst => format!("{}/{}/{}", date.month(), date.day(), date.year()),
            DateOrder::DayFirst => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "month-first"),
            DateOrder::DayFirst => write!(f, "day-first"),
        }
    }
}

/// What sits between the minutes and the am/pm marker of a 12-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmPmSpacing {
    /// U+202F NARROW NO-BREAK SPACE, written by recent Android exports
    #[default]
    NarrowNbsp,
    /// A plain ASCII space
    Space,
    /// Marker glued to the minutes (`10:00am`)
    None,
}

impl AmPmSpacing {
    /// Returns the literal separator text.
    pub fn separator(self) -> &'static str {
        match self {
            AmPmSpacing::NarrowNbsp => "\u{202F}",
            AmPmSpacing::Space => " ",
            AmPmSpacing::None => "",
        }
    }
}

impl fmt::Display for AmPmSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmPmSpacing::NarrowNbsp => write!(f, "narrow-nbsp"),
            AmPmSpacing::Space => write!(f, "space"),
            AmPmSpacing::None => write!(f, "none"),
        }
    }
}

/// Clock convention of header times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// `10:00 am`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `22:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::TwelveHour => write!(f, "12h"),
            ClockFormat::TwentyFourHour => write!(f, "24h"),
        }
    }
}

/// Grammar of the `date, time -` prefix that opens every message.
///
/// The default matches `1/2/23, 10:00\u{202F}am - Alice: Hello`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HeaderGrammar {
    /// Day/month order of the date (default: month-first)
    pub date_order: DateOrder,

    /// Separator before am/pm for 12-hour clocks (default: narrow no-break space)
    pub am_pm_space: AmPmSpacing,

    /// 12- or 24-hour clock (default: 12-hour)
    pub clock: ClockFormat,
}

impl HeaderGrammar {
    /// Creates the default grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the am/pm separator.
    #[must_use]
    pub fn with_am_pm_space(mut self, spacing: AmPmSpacing) -> Self {
        self.am_pm_space = spacing;
        self
    }

    /// Sets the clock format.
    #[must_use]
    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }

    /// Regex fragment matching a header time in this grammar.
    pub(crate) fn time_pattern(&self) -> String {
        match self.clock {
            ClockFormat::TwelveHour => format!(
                r"\d{{1,2}}:\d{{2}}{}(?i:[ap]m)",
                regex::escape(self.am_pm_space.separator())
            ),
            ClockFormat::TwentyFourHour => r"\d{1,2}:\d{2}".to_string(),
        }
    }
}

/// Configuration for [`LogParser`](crate::parser::LogParser).
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_notifications(true)
///     .with_buffer_size(128 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Header grammar used to recognise new messages
    pub grammar: HeaderGrammar,

    /// Keep group notifications (records without an author) (default: false)
    pub include_notifications: bool,

    /// Read buffer size for streaming (default: 64KB)
    pub buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            grammar: HeaderGrammar::default(),
            include_notifications: false,
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header grammar.
    #[must_use]
    pub fn with_grammar(mut self, grammar: HeaderGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Keeps or drops records without an author.
    #[must_use]
    pub fn with_notifications(mut self, include: bool) -> Self {
        self.include_notifications = include;
        self
    }

    /// Sets the buffer size for streaming.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Placeholder WhatsApp writes in place of attachments when exporting
/// without media.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for [`analyze`](crate::stats::analyze).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Exact message text counted as a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Number of most frequent words to keep (default: 50)
    pub top_words: usize,

    /// Words excluded from frequencies on top of the built-in stoplist
    pub extra_stopwords: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            top_words: 50,
            extra_stopwords: Vec::new(),
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many top words are reported.
    #[must_use]
    pub fn with_top_words(mut self, count: usize) -> Self {
        self.top_words = count;
        self
    }

    /// Adds a word to the stoplist.
    #[must_use]
    pub fn with_stopword(mut self, word: impl Into<String>) -> Self {
        self.extra_stopwords.push(word.into());
        self
    }
}

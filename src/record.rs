//! Typed chat-log record.
//!
//! [`ChatRecord`] is what the parser produces for every message in an export:
//! the date and clock time of its header line, the author (absent for group
//! notifications), and the message text with continuation lines joined.
//!
//! # Example
//!
//! ```
//! use chatstat::ChatRecord;
//! use chrono::NaiveDate;
//!
//! let record = ChatRecord::new(NaiveDate::from_ymd_opt(2023, 1, 2), "10:00 am", "Alice", "Hello");
//! assert!(record.is_authored());
//! assert_eq!(record.hour(), Some(10));
//! assert_eq!(record.period().as_deref(), Some("10-11"));
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::HeaderGrammar;

/// One message of a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `Option<NaiveDate>` | Date of the header line |
/// | `time` | `Option<String>` | Clock time exactly as written in the header |
/// | `author` | `Option<String>` | Sender display name, `None` for group notifications |
/// | `message` | `String` | Message text, continuation lines joined by single spaces |
///
/// `date` and `time` are only both `None` for the single record produced from
/// input that never contains a header line. `date` alone is `None` when the
/// header's date names a day that does not exist.
///
/// # Serialization
///
/// `None` fields are omitted and dates use `YYYY-MM-DD`:
///
/// ```
/// use chatstat::ChatRecord;
///
/// let record = ChatRecord::notification(None, "10:00 am", "Alice joined");
/// let json = serde_json::to_string(&record)?;
/// assert!(!json.contains("author"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Calendar date of the header line (timezone-naive).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Sender-local clock time as written, e.g. `10:00\u{202F}am`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub time: Option<String>,

    /// Sender display name; `None` marks a group notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub author: Option<String>,

    /// Message text, trimmed.
    pub message: String,
}

impl ChatRecord {
    /// Creates an authored record.
    pub fn new(
        date: Option<NaiveDate>,
        time: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time: Some(time.into()),
            author: Some(author.into()),
            message: message.into(),
        }
    }

    /// Creates a group notification (a record without an author).
    pub fn notification(
        date: Option<NaiveDate>,
        time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time: Some(time.into()),
            author: None,
            message: message.into(),
        }
    }

    /// Creates a record with no header information at all.
    pub fn unheaded(message: impl Into<String>) -> Self {
        Self {
            date: None,
            time: None,
            author: None,
            message: message.into(),
        }
    }

    /// Returns the author, if any.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns `true` if the record has a known sender.
    pub fn is_authored(&self) -> bool {
        self.author.is_some()
    }

    /// Returns `true` for group notifications (joins, leaves, ...).
    pub fn is_notification(&self) -> bool {
        self.author.is_none()
    }

    /// Returns `true` if the message is exactly the media placeholder.
    ///
    /// The comparison is case-sensitive and does not ignore surrounding text.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.message == placeholder
    }

    /// Parses the clock time.
    ///
    /// Accepts 12-hour times with any am/pm spacing and 24-hour times.
    pub fn clock_time(&self) -> Option<NaiveTime> {
        parse_clock(self.time.as_deref()?)
    }

    /// Hour of day (0-23) the message was sent.
    pub fn hour(&self) -> Option<u32> {
        self.clock_time().map(|t| t.hour())
    }

    /// Hour bucket label such as `"14-15"`.
    ///
    /// Midnight and the last hour are written `"00-1"` and `"23-00"`.
    pub fn period(&self) -> Option<String> {
        self.hour().map(period_label)
    }

    /// Renders the record back as an export line in the given grammar.
    ///
    /// Returns `None` for records without a date or time. The time text is
    /// written back verbatim, so re-parsing the line with the same grammar
    /// yields an equal record.
    pub fn to_export_line(&self, grammar: &HeaderGrammar) -> Option<String> {
        let date = grammar.date_order.format_date(self.date?);
        let time = self.time.as_deref()?;
        Some(match &self.author {
            Some(author) => format!("{date}, {time} - {author}: {}", self.message),
            None => format!("{date}, {time} - {}", self.message),
        })
    }
}

/// Label for the hour bucket starting at `hour`.
pub fn period_label(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let (clock, meridiem) = if let Some(rest) = compact.strip_suffix("am") {
        (rest, Some(false))
    } else if let Some(rest) = compact.strip_suffix("pm") {
        (rest, Some(true))
    } else {
        (compact.as_str(), None)
    };

    let (hour, minute) = clock.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    let hour = match meridiem {
        Some(pm) => {
            if hour == 0 || hour > 12 {
                return None;
            }
            (hour % 12) + if pm { 12 } else { 0 }
        }
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AmPmSpacing, DateOrder};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_clock_time_twelve_hour() {
        let record = ChatRecord::new(None, "10:05\u{202F}pm", "Alice", "Hi");
        assert_eq!(record.clock_time(), NaiveTime::from_hms_opt(22, 5, 0));

        let midnight = ChatRecord::new(None, "12:30 AM", "Alice", "Hi");
        assert_eq!(midnight.hour(), Some(0));

        let noon = ChatRecord::new(None, "12:30pm", "Alice", "Hi");
        assert_eq!(noon.hour(), Some(12));
    }

    #[test]
    fn test_clock_time_twenty_four_hour() {
        let record = ChatRecord::new(None, "23:59", "Alice", "Hi");
        assert_eq!(record.clock_time(), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn test_clock_time_invalid() {
        assert_eq!(ChatRecord::new(None, "13:00 pm", "A", "x").clock_time(), None);
        assert_eq!(ChatRecord::new(None, "noon", "A", "x").clock_time(), None);
        assert_eq!(ChatRecord::unheaded("x").clock_time(), None);
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(period_label(0), "00-1");
        assert_eq!(period_label(9), "9-10");
        assert_eq!(period_label(23), "23-00");
    }

    #[test]
    fn test_is_media_exact_match() {
        let media = ChatRecord::new(None, "1:00 pm", "Bob", "<Media omitted>");
        assert!(media.is_media("<Media omitted>"));

        let quoted = ChatRecord::new(None, "1:00 pm", "Bob", "see <Media omitted>");
        assert!(!quoted.is_media("<Media omitted>"));

        let lower = ChatRecord::new(None, "1:00 pm", "Bob", "<media omitted>");
        assert!(!lower.is_media("<Media omitted>"));
    }

    #[test]
    fn test_export_line_authored() {
        let record = ChatRecord::new(date(2023, 1, 2), "10:00\u{202F}am", "Alice", "Hello");
        let grammar = HeaderGrammar::default();
        assert_eq!(
            record.to_export_line(&grammar).unwrap(),
            "1/2/2023, 10:00\u{202F}am - Alice: Hello"
        );
    }

    #[test]
    fn test_export_line_notification_day_first() {
        let record = ChatRecord::notification(date(2023, 1, 2), "10:00 am", "Bob left");
        let grammar = HeaderGrammar::new()
            .with_date_order(DateOrder::DayFirst)
            .with_am_pm_space(AmPmSpacing::Space);
        assert_eq!(
            record.to_export_line(&grammar).unwrap(),
            "2/1/2023, 10:00 am - Bob left"
        );
    }

    #[test]
    fn test_export_line_requires_header() {
        assert!(ChatRecord::unheaded("orphan").to_export_line(&HeaderGrammar::default()).is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = ChatRecord::new(date(2024, 6, 15), "9:15 am", "Иван", "Привет 👋");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2024-06-15\""));

        let parsed: ChatRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}

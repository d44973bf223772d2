//! # Chatstat
//!
//! A Rust library for parsing exported group-chat logs (the plain-text
//! "Export chat" format of phone messengers) into typed records and
//! computing chat statistics over them.
//!
//! ## Overview
//!
//! An export is a sequence of lines. A line that starts with a timestamp
//! prefix such as `1/2/23, 10:00 am - ` opens a new message; every other line
//! continues the message above it:
//!
//! ```text
//! 1/2/23, 10:00 am - Alice: Hello
//! world
//! 1/2/23, 10:05 am - Bob joined using this group's invite link
//! ```
//!
//! The parser folds those lines into [`ChatRecord`]s. Lines without an
//! `Author: ` part are group notifications and have no author.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let raw = "1/2/23, 10:00\u{202F}am - Alice: Hello\nworld\n\
//!            1/2/23, 10:05\u{202F}am - Bob: 😂 https://example.com";
//!
//! let records = chatstat::parse(raw);
//! assert_eq!(records[0].message, "Hello world");
//!
//! let report = analyze(&records, &StatsConfig::default());
//! assert_eq!(report.totals.messages, 2);
//! assert_eq!(report.totals.links, 1);
//! ```
//!
//! ## Export Dialects
//!
//! Exports differ by locale. [`HeaderGrammar`](config::HeaderGrammar) selects
//! month-first or day-first dates, the separator before am/pm, and 12- or
//! 24-hour clocks:
//!
//! ```rust
//! use chatstat::config::{AmPmSpacing, ClockFormat, DateOrder, HeaderGrammar};
//! use chatstat::parser::LogParser;
//!
//! let grammar = HeaderGrammar::new()
//!     .with_date_order(DateOrder::DayFirst)
//!     .with_clock(ClockFormat::TwentyFourHour);
//! let parser = LogParser::with_grammar(grammar);
//!
//! let records = parser.parse("31/12/23, 23:59 - Alice: Happy new year");
//! assert_eq!(records[0].date.unwrap().to_string(), "2023-12-31");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`], [`parse`], [`parse_all`]
//! - [`parsing`] - header recognition and the line fold
//! - [`record`] - [`ChatRecord`]
//! - [`config`] - header grammar, parser and statistics settings
//! - [`stats`] - [`analyze`](stats::analyze) and the metric helpers
//! - [`report`] - text and JSON rendering of a [`ChatReport`](stats::ChatReport)
//! - [`streaming`] - record-at-a-time parsing of large files
//! - [`core`] - filters and CSV / JSON / JSONL writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod stats;
#[cfg(feature = "streaming")]
pub mod streaming;

pub use error::{ChatstatError, Result};
pub use parser::{LogParser, parse, parse_all};
pub use record::ChatRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ChatRecord;
    pub use crate::error::{ChatstatError, Result};
    pub use crate::parser::{LogParser, parse, parse_all};

    pub use crate::config::{
        AmPmSpacing, ClockFormat, DateOrder, HeaderGrammar, ParserConfig, StatsConfig,
    };

    pub use crate::stats::{ChatReport, analyze};

    pub use crate::report::render_text;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "streaming")]
    pub use crate::streaming::RecordStream;
}

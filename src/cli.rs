//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`DateOrderArg`], [`AmPmArg`], [`ClockArg`] - export dialect options
//! - [`OutputFormat`] - record output format
//! - [`ReportFormat`] - statistics report format
//!
//! The value enums mirror library types and convert into them with `From`,
//! so the library does not depend on clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AmPmSpacing, ClockFormat, DateOrder, HeaderGrammar, StatsConfig};

/// Parse an exported group-chat log and print chat statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --am-pm space --report json
    chatstat chat.txt --date-order day-first --clock 24h
    chatstat chat.txt --after 2024-01-01 --from Alice
    chatstat chat.txt -o records.jsonl -t")]
pub struct Args {
    /// Path to the exported chat log
    pub input: PathBuf,

    /// Order of day and month in header dates
    #[arg(long, value_enum, default_value = "month-first")]
    pub date_order: DateOrderArg,

    /// Separator between the time and am/pm
    #[arg(long, value_enum, default_value = "narrow-nbsp")]
    pub am_pm: AmPmArg,

    /// Clock format of header times
    #[arg(long, value_enum, default_value = "12h")]
    pub clock: ClockArg,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this author only
    #[arg(long, value_name = "AUTHOR")]
    pub from: Option<String>,

    /// Keep group notifications in written records
    #[arg(long)]
    pub notifications: bool,

    /// Read the file record by record instead of loading it whole
    #[arg(long)]
    pub streaming: bool,

    /// Number of most frequent words to report
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top_words: usize,

    /// Report format printed to stdout
    #[arg(long, value_enum, default_value = "text")]
    pub report: ReportFormat,

    /// Also write parsed records to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Record output format (defaults to the output file's extension)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include dates and times in written records
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Header grammar selected by the dialect flags.
    pub fn grammar(&self) -> HeaderGrammar {
        HeaderGrammar::new()
            .with_date_order(self.date_order.into())
            .with_am_pm_space(self.am_pm.into())
            .with_clock(self.clock.into())
    }

    /// Statistics settings selected by the flags.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig::new().with_top_words(self.top_words)
    }
}

/// Order of day and month in header dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// `M/D/YY`
    #[default]
    MonthFirst,

    /// `D/M/YY`
    DayFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> DateOrder {
        match arg {
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
        }
    }
}

/// Separator between the time and am/pm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum AmPmArg {
    /// Narrow no-break space (U+202F)
    #[default]
    NarrowNbsp,

    /// Regular space
    Space,

    /// No separator
    None,
}

impl From<AmPmArg> for AmPmSpacing {
    fn from(arg: AmPmArg) -> AmPmSpacing {
        match arg {
            AmPmArg::NarrowNbsp => AmPmSpacing::NarrowNbsp,
            AmPmArg::Space => AmPmSpacing::Space,
            AmPmArg::None => AmPmSpacing::None,
        }
    }
}

/// Clock format of header times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ClockArg {
    /// `10:00 am`
    #[default]
    #[value(name = "12h")]
    TwelveHour,

    /// `22:00`
    #[value(name = "24h")]
    TwentyFourHour,
}

impl From<ClockArg> for ClockFormat {
    fn from(arg: ClockArg) -> ClockFormat {
        match arg {
            ClockArg::TwelveHour => ClockFormat::TwelveHour,
            ClockArg::TwentyFourHour => ClockFormat::TwentyFourHour,
        }
    }
}

/// Record output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Statistics report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Human-readable summary and tables
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["chatstat", "chat.txt"]);
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.grammar(), HeaderGrammar::default());
        assert_eq!(args.report, ReportFormat::Text);
        assert_eq!(args.top_words, 50);
        assert!(args.output.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_dialect_flags() {
        let args = Args::parse_from([
            "chatstat",
            "chat.txt",
            "--date-order",
            "day-first",
            "--am-pm",
            "space",
            "--clock",
            "24h",
        ]);
        let grammar = args.grammar();
        assert_eq!(grammar.date_order, DateOrder::DayFirst);
        assert_eq!(grammar.am_pm_space, AmPmSpacing::Space);
        assert_eq!(grammar.clock, ClockFormat::TwentyFourHour);
    }

    #[test]
    fn test_output_flags() {
        let args = Args::parse_from([
            "chatstat", "chat.txt", "-o", "out.txt", "-f", "ndjson", "-t", "--report", "json",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Jsonl));
        assert!(args.timestamps);
        assert_eq!(args.report, ReportFormat::Json);
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Jsonl),
            crate::format::OutputFormat::Jsonl
        );
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Args::try_parse_from(["chatstat", "chat.txt", "--clock", "13h"]).is_err());
        assert!(Args::try_parse_from(["chatstat"]).is_err());
    }
}

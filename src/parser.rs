//! Chat log parser.
//!
//! [`LogParser`] turns the decoded text of an export into [`ChatRecord`]s in
//! one pass. Parsing is total: every line lands in some record, and malformed
//! headers are folded into message text instead of raising errors.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::LogParser;
//!
//! let raw = "1/2/23, 10:00\u{202F}am - Alice: Hello\nworld\n\
//!            1/2/23, 10:05\u{202F}am - Bob joined using this group's invite link";
//!
//! let parser = LogParser::new();
//!
//! // Authored records only
//! let records = parser.parse(raw);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "Hello world");
//!
//! // Everything, including group notifications
//! assert_eq!(parser.parse_all(raw).len(), 2);
//! ```
//!
//! # Lazy parsing
//!
//! [`LogParser::records`] yields records one at a time without collecting
//! them; the streaming module runs the same fold over a file reader.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::ChatRecord;
use crate::config::{HeaderGrammar, ParserConfig};
use crate::error::{ChatstatError, Result};
use crate::parsing::{Assembler, HeaderMatcher};

#[cfg(feature = "streaming")]
use crate::streaming::RecordStream;

static DEFAULT_PARSER: LazyLock<LogParser> = LazyLock::new(LogParser::new);

/// Parses a chat export with the default grammar, keeping authored records.
///
/// Equivalent to `LogParser::new().parse(raw)`.
pub fn parse(raw: &str) -> Vec<ChatRecord> {
    DEFAULT_PARSER.parse(raw)
}

/// Parses a chat export with the default grammar, keeping every record.
pub fn parse_all(raw: &str) -> Vec<ChatRecord> {
    DEFAULT_PARSER.parse_all(raw)
}

/// Parser for exported chat logs.
///
/// Holds a compiled header pattern and no per-call state, so one parser can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct LogParser {
    config: ParserConfig,
    matcher: HeaderMatcher,
}

impl LogParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let matcher = HeaderMatcher::new(config.grammar);
        Self { config, matcher }
    }

    /// Creates a parser for a grammar with otherwise default settings.
    pub fn with_grammar(grammar: HeaderGrammar) -> Self {
        Self::with_config(ParserConfig::new().with_grammar(grammar))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the header grammar.
    pub fn grammar(&self) -> &HeaderGrammar {
        self.matcher.grammar()
    }

    /// Returns `true` if `line` (after trimming) begins with a timestamp
    /// prefix in this parser's grammar.
    pub fn starts_with_header(&self, line: &str) -> bool {
        self.matcher.starts_with_header(line.trim())
    }

    /// Parses raw text and returns records that have an author.
    pub fn parse(&self, raw: &str) -> Vec<ChatRecord> {
        let records: Vec<ChatRecord> = self.records(raw).authored().collect();
        tracing::debug!(records = records.len(), "parsed authored records");
        records
    }

    /// Parses raw text and returns every record, including group
    /// notifications and the record produced from headerless input.
    pub fn parse_all(&self, raw: &str) -> Vec<ChatRecord> {
        let records: Vec<ChatRecord> = self.records(raw).collect();
        tracing::debug!(records = records.len(), "parsed records");
        records
    }

    /// Returns a lazy iterator over all records of `raw`.
    pub fn records<'a>(&'a self, raw: &'a str) -> Records<'a, std::str::Split<'a, char>> {
        Records::new(&self.matcher, raw.split('\n'))
    }

    /// Returns a lazy iterator over all records of already-split lines.
    pub fn records_from_lines<I, S>(&self, lines: I) -> Records<'_, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Records::new(&self.matcher, lines.into_iter())
    }

    /// Reads, decodes and parses a file.
    ///
    /// Group notifications are kept when
    /// [`include_notifications`](ParserConfig::include_notifications) is set.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read and
    /// [`ChatstatError::Utf8`] if it is not valid UTF-8.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<ChatRecord>> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|e| ChatstatError::utf8(e, path))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read chat export");

        Ok(if self.config.include_notifications {
            self.parse_all(&content)
        } else {
            self.parse(&content)
        })
    }

    /// Opens a file and streams its records without loading it into memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be opened.
    #[cfg(feature = "streaming")]
    pub fn stream(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<RecordStream<std::io::BufReader<fs::File>>> {
        let stream = RecordStream::open(path, self.matcher.clone(), self.config.buffer_size)?;
        Ok(if self.config.include_notifications {
            stream
        } else {
            stream.authored_only()
        })
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the records of a sequence of lines.
///
/// Yields every record, group notifications included; use
/// [`authored`](Records::authored) for the filtered view.
pub struct Records<'a, I> {
    matcher: &'a HeaderMatcher,
    lines: I,
    assembler: Assembler,
    finished: bool,
}

impl<'a, I, S> Records<'a, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Creates an iterator folding `lines` with `matcher`.
    pub fn new(matcher: &'a HeaderMatcher, lines: I) -> Self {
        Self {
            matcher,
            lines,
            assembler: Assembler::new(),
            finished: false,
        }
    }

    /// Keeps only records with an author.
    pub fn authored(self) -> impl Iterator<Item = ChatRecord> + 'a
    where
        I: 'a,
    {
        self.filter(ChatRecord::is_authored)
    }
}

impl<I, S> Iterator for Records<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ChatRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(record) = self.assembler.push(self.matcher, line.as_ref()) {
                return Some(record);
            }
        }

        self.finished = true;
        self.assembler.finish()
    }
}

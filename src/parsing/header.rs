//! Header-line recognition and decomposition.
//!
//! A header opens a new message:
//!
//! ```text
//! 1/2/23, 10:00 am - Alice: Hello
//! └─date─┘ └─time─┘   └author┘ └message┘
//! ```
//!
//! The date/time prefix is matched against a [`HeaderGrammar`]; the rest of
//! the line is split on plain delimiters (`" - "`, `", "`, `": "`), so
//! anything after the prefix is accepted as-is.

use chrono::NaiveDate;
use regex::Regex;

use crate::config::HeaderGrammar;

/// Date, time and author decomposed from a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Date interpreted per the grammar's order, if it names a real day
    pub date: Option<NaiveDate>,
    /// Time text as written
    pub time: String,
    /// Author, `None` for group notifications
    pub author: Option<String>,
}

/// How a single trimmed line participates in the fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A header line: starts a new message with this text
    Header {
        /// Decomposed header fields
        header: Header,
        /// Message text following the author delimiter
        message: String,
    },
    /// Anything else, including header-like lines that do not decompose
    Text,
}

/// Compiled header pattern for one grammar.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    grammar: HeaderGrammar,
    prefix: Regex,
}

impl HeaderMatcher {
    /// Compiles the header prefix pattern for `grammar`.
    pub fn new(grammar: HeaderGrammar) -> Self {
        let pattern = format!(r"^\d{{1,2}}/\d{{1,2}}/\d{{2,4}}, {} -", grammar.time_pattern());
        // Assembled from fixed fragments; the separator is escaped.
        let prefix = Regex::new(&pattern).expect("header pattern is always valid");
        Self { grammar, prefix }
    }

    /// Returns the grammar this matcher was built from.
    pub fn grammar(&self) -> &HeaderGrammar {
        &self.grammar
    }

    /// Returns `true` if the trimmed line begins with a timestamp prefix.
    ///
    /// This only looks at the prefix; [`classify`](Self::classify) also
    /// requires the line to decompose.
    pub fn starts_with_header(&self, line: &str) -> bool {
        self.prefix.is_match(line)
    }

    /// Classifies a trimmed line.
    pub fn classify(&self, line: &str) -> LineKind {
        if !self.starts_with_header(line) {
            return LineKind::Text;
        }
        match self.decompose(line) {
            Some((header, message)) => LineKind::Header { header, message },
            None => LineKind::Text,
        }
    }

    /// Splits a header line into its fields.
    ///
    /// Returns `None` when there is no `" - "` separator or the part before
    /// it is not exactly `date, time`.
    pub fn decompose(&self, line: &str) -> Option<(Header, String)> {
        let (date_time, remainder) = line.split_once(" - ")?;

        let mut fields = date_time.split(", ");
        let date_text = fields.next()?.trim();
        let time = fields.next()?.trim();
        if fields.next().is_some() {
            return None;
        }

        let date = self.grammar.date_order.parse_date(date_text);
        if date.is_none() {
            tracing::warn!(date = date_text, "header date is not a calendar day");
        }

        let (author, message) = split_author(remainder);
        Some((
            Header {
                date,
                time: time.to_string(),
                author,
            },
            message,
        ))
    }
}

/// Splits the text after `" - "` into author and message at the first `": "`.
///
/// Without a delimiter the whole text is a group notification. An author
/// that is empty after trimming also counts as no author.
pub fn split_author(remainder: &str) -> (Option<String>, String) {
    match remainder.split_once(": ") {
        Some((author, message)) => {
            let author = author.trim();
            let author = (!author.is_empty()).then(|| author.to_string());
            (author, message.trim().to_string())
        }
        None => (None, remainder.trim().to_string()),
    }
}

//! Aggregate statistics over parsed records.
//!
//! [`analyze`] computes what a chat summary page shows:
//!
//! | Metric | Rule |
//! |--------|------|
//! | messages | one per authored record |
//! | media | message equals the media placeholder exactly |
//! | emojis | grapheme clusters containing an emoji |
//! | links | matches of `https?://\S+` |
//!
//! Totals are broken down per author in first-seen order, alongside word
//! frequencies for a word cloud, hourly activity and a per-day timeline.
//! Group notifications are ignored.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::StatsConfig;
//! use chatstat::stats::analyze;
//!
//! let records = chatstat::parse(
//!     "1/2/23, 10:00\u{202F}am - Alice: <Media omitted>\n\
//!      1/2/23, 10:01\u{202F}am - Bob: 😂 https://example.com",
//! );
//! let report = analyze(&records, &StatsConfig::default());
//!
//! assert_eq!(report.totals.messages, 2);
//! assert_eq!(report.totals.media, 1);
//! assert_eq!(report.author("Bob").unwrap().stats.links, 1);
//! ```

mod emoji;
mod links;
mod words;

pub use emoji::{count_emojis, extract_emojis};
pub use links::{count_links, extract_links};
pub use words::{CHAT_STOPWORDS, ENGLISH_STOPWORDS, Stoplist, WordCount, tokenize, word_frequencies};

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::ChatRecord;
use crate::config::StatsConfig;
use crate::record::period_label;

/// Message, media, emoji and link counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    /// Number of messages
    pub messages: usize,
    /// Messages that are exactly the media placeholder
    pub media: usize,
    /// Emoji grapheme clusters across all messages
    pub emojis: usize,
    /// Links across all messages
    pub links: usize,
}

impl MessageStats {
    /// Adds one message.
    pub fn add(&mut self, record: &ChatRecord, media_placeholder: &str) {
        self.messages += 1;
        if record.is_media(media_placeholder) {
            self.media += 1;
        }
        self.emojis += count_emojis(&record.message);
        self.links += count_links(&record.message);
    }
}

/// Counts for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    /// Display name as written in the export
    pub author: String,
    /// This author's counts
    #[serde(flatten)]
    pub stats: MessageStats,
}

/// Messages sent within one hour bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCount {
    /// Bucket label, e.g. `"14-15"`
    pub period: String,
    /// Number of messages
    pub messages: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    /// Calendar day
    pub date: NaiveDate,
    /// Number of messages
    pub messages: usize,
}

/// Everything [`analyze`] computes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatReport {
    /// Counts across all authors
    pub totals: MessageStats,
    /// Per-author counts, first-seen order
    pub authors: Vec<AuthorStats>,
    /// Most frequent words, stopwords removed
    pub top_words: Vec<WordCount>,
    /// Messages per hour bucket, in hour order, empty buckets omitted
    pub activity: Vec<PeriodCount>,
    /// Messages per day, ascending, days without a parsed date omitted
    pub timeline: Vec<DayCount>,
}

impl ChatReport {
    /// Looks up one author's counts.
    pub fn author(&self, name: &str) -> Option<&AuthorStats> {
        self.authors.iter().find(|a| a.author == name)
    }

    /// Returns `true` if no authored message was analyzed.
    pub fn is_empty(&self) -> bool {
        self.totals.messages == 0
    }
}

/// Computes statistics over the authored records in `records`.
///
/// Records without an author are skipped, so both the filtered and the
/// unfiltered parser output can be passed in.
pub fn analyze(records: &[ChatRecord], config: &StatsConfig) -> ChatReport {
    let mut totals = MessageStats::default();
    let mut authors: Vec<AuthorStats> = Vec::new();
    let mut author_index: HashMap<&str, usize> = HashMap::new();
    let mut hours = [0usize; 24];
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in records {
        let Some(author) = record.author() else {
            continue;
        };

        totals.add(record, &config.media_placeholder);

        let idx = *author_index.entry(author).or_insert_with(|| {
            authors.push(AuthorStats {
                author: author.to_string(),
                stats: MessageStats::default(),
            });
            authors.len() - 1
        });
        authors[idx].stats.add(record, &config.media_placeholder);

        if let Some(hour) = record.hour() {
            hours[hour as usize] += 1;
        }
        if let Some(date) = record.date {
            *days.entry(date).or_insert(0) += 1;
        }
    }

    let stoplist = Stoplist::chat()
        .with_words(&config.extra_stopwords)
        .with_words(tokenize(&config.media_placeholder));
    let top_words = word_frequencies(
        records
            .iter()
            .filter(|r| r.is_authored())
            .map(|r| r.message.as_str()),
        &stoplist,
        config.top_words,
    );

    let activity = (0u32..)
        .zip(hours)
        .filter(|(_, count)| *count > 0)
        .map(|(hour, messages)| PeriodCount {
            period: period_label(hour),
            messages,
        })
        .collect();

    let timeline = days
        .into_iter()
        .map(|(date, messages)| DayCount { date, messages })
        .collect();

    tracing::debug!(
        messages = totals.messages,
        authors = authors.len(),
        "computed chat statistics"
    );

    ChatReport {
        totals,
        authors,
        top_words,
        activity,
        timeline,
    }
}

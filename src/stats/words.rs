//! Word frequencies for word clouds.
//!
//! Tokens are runs of word characters of length two or more (apostrophes
//! allowed inside), lowercased, with a trailing `'s` removed. Numbers and
//! stopwords are dropped.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("word pattern is valid"));

/// Common English words that carry no topic.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "https", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "since", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "therefore", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Export boilerplate and chat filler excluded on top of English stopwords.
pub const CHAT_STOPWORDS: &[&str] = &[
    "joined", "using", "bro", "will", "hai", "group", "bhai", "pm", "invite", "link", "media",
    "omitted", "message", "kya", "deleted",
];

/// Set of lowercase words excluded from frequencies.
#[derive(Debug, Clone)]
pub struct Stoplist {
    words: HashSet<String>,
}

impl Stoplist {
    /// Creates an empty stoplist.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// English stopwords plus chat boilerplate.
    pub fn chat() -> Self {
        Self::empty()
            .with_words(ENGLISH_STOPWORDS.iter().copied())
            .with_words(CHAT_STOPWORDS.iter().copied())
    }

    /// Adds words (case-insensitive).
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Returns `true` if `word` is excluded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stoplist {
    fn default() -> Self {
        Self::chat()
    }
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// Lowercased word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Splits `text` into normalized tokens, stopwords included.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN.find_iter(text).filter_map(|m| {
        let lower = m.as_str().to_lowercase();
        let word = lower.strip_suffix("'s").unwrap_or(&lower).trim_end_matches('\'');
        if word.chars().count() < 2 || word.chars().all(char::is_numeric) {
            return None;
        }
        Some(word.to_string())
    })
}

/// Counts words across `texts`, most frequent first.
///
/// Ties are ordered alphabetically. At most `limit` entries are returned.
///
/// # Example
///
/// ```rust
/// use chatstat::stats::{Stoplist, word_frequencies};
///
/// let top = word_frequencies(["Pizza tonight?", "pizza!! the best"], &Stoplist::chat(), 10);
/// assert_eq!(top[0].word, "pizza");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn word_frequencies<'a, I>(texts: I, stoplist: &Stoplist, limit: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for word in tokenize(text) {
            if !stoplist.contains(&word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);
    words
}

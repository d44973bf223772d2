//! Line fold that reassembles multi-line messages.
//!
//! [`Assembler`] is the explicit state of a single pass over an export: the
//! header currently in effect and the text collected since it. Feeding it
//! lines one at a time yields each record as soon as the next header closes
//! it; [`finish`](Assembler::finish) flushes whatever is still open.

use crate::ChatRecord;

use super::header::{Header, HeaderMatcher, LineKind};

/// Fold state for one pass over a chat export.
#[derive(Debug, Default)]
pub struct Assembler {
    active: Option<Header>,
    buffer: Vec<String>,
}

impl Assembler {
    /// Creates an empty fold state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a header line has been seen.
    pub fn has_header(&self) -> bool {
        self.active.is_some()
    }

    /// Feeds one physical line, returning the record it closes, if any.
    ///
    /// Headers close the pending message and open a new one. Every other
    /// non-blank line, including header-like lines that don't decompose, is
    /// appended to the pending message.
    pub fn push(&mut self, matcher: &HeaderMatcher, line: &str) -> Option<ChatRecord> {
        let line = line.trim();
        match matcher.classify(line) {
            LineKind::Header { header, message } => {
                let closed = self.close_pending();
                self.active = Some(header);
                self.buffer.push(message);
                closed
            }
            LineKind::Text => {
                if !line.is_empty() {
                    self.buffer.push(line.to_string());
                }
                None
            }
        }
    }

    /// Flushes the pending message at end of input.
    ///
    /// When no header was ever seen, the whole input becomes one record
    /// without date, time or author.
    pub fn finish(&mut self) -> Option<ChatRecord> {
        if self.buffer.is_empty() {
            return None;
        }
        let message = self.take_message();
        Some(match &self.active {
            Some(header) => record_from(header, message),
            None => ChatRecord::unheaded(message),
        })
    }

    fn close_pending(&mut self) -> Option<ChatRecord> {
        if self.buffer.is_empty() {
            return None;
        }
        if self.active.is_none() {
            tracing::debug!(
                lines = self.buffer.len(),
                "dropping lines before the first header"
            );
            self.buffer.clear();
            return None;
        }
        let message = self.take_message();
        self.active.as_ref().map(|header| record_from(header, message))
    }

    fn take_message(&mut self) -> String {
        let parts: Vec<String> = self.buffer.drain(..).filter(|s| !s.is_empty()).collect();
        parts.join(" ")
    }
}

fn record_from(header: &Header, message: String) -> ChatRecord {
    ChatRecord {
        date: header.date,
        time: Some(header.time.clone()),
        author: header.author.clone(),
        message,
    }
}

//! Streaming parser for chat exports too large to hold in memory.
//!
//! [`RecordStream`] reads an export line by line and runs the same fold as
//! [`LogParser::parse_all`](crate::parser::LogParser::parse_all), yielding
//! each record as soon as the next header closes it. Memory use is bounded
//! by the longest single message, not the file size.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstat::parser::LogParser;
//!
//! let parser = LogParser::new();
//! let mut stream = parser.stream("huge_chat.txt")?;
//!
//! while let Some(record) = stream.next() {
//!     let record = record?;
//!     println!("{:?}: {}", record.author, record.message);
//!
//!     if let Some(pct) = stream.progress() {
//!         eprintln!("{pct:.1}%");
//!     }
//! }
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::ChatRecord;
use crate::error::{ChatstatError, Result};
use crate::parsing::{Assembler, HeaderMatcher};

/// Iterator over the records of a buffered reader.
///
/// If a read fails (including invalid UTF-8), the record still open at that
/// point is yielded first, then the `Err` once, and then the stream stops.
/// Lines after the failure are never read.
pub struct RecordStream<R> {
    reader: R,
    matcher: HeaderMatcher,
    assembler: Assembler,
    line_buffer: String,
    bytes_read: u64,
    total_bytes: Option<u64>,
    authored_only: bool,
    finished: bool,
    pending_error: Option<ChatstatError>,
}

impl RecordStream<BufReader<File>> {
    /// Opens `path` with a read buffer of `buffer_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`](crate::ChatstatError::Io) if the file
    /// cannot be opened or its size read.
    pub fn open(path: impl AsRef<Path>, matcher: HeaderMatcher, buffer_size: usize) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let file_size = file.metadata()?.len();
        tracing::debug!(path = %path.as_ref().display(), bytes = file_size, "streaming chat export");

        let reader = BufReader::with_capacity(buffer_size, file);
        Ok(Self::new(reader, matcher).with_total_bytes(file_size))
    }
}

impl<R: BufRead> RecordStream<R> {
    /// Wraps a reader. Every record is yielded, group notifications included.
    pub fn new(reader: R, matcher: HeaderMatcher) -> Self {
        Self {
            reader,
            matcher,
            assembler: Assembler::new(),
            line_buffer: String::with_capacity(4096),
            bytes_read: 0,
            total_bytes: None,
            authored_only: false,
            finished: false,
            pending_error: None,
        }
    }

    /// Sets the total input size used by [`progress`](Self::progress).
    #[must_use]
    pub fn with_total_bytes(mut self, total: u64) -> Self {
        self.total_bytes = Some(total);
        self
    }

    /// Skips records without an author.
    #[must_use]
    pub fn authored_only(mut self) -> Self {
        self.authored_only = true;
        self
    }

    /// Returns the number of bytes read so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the total input size, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_read as f64 / total as f64) * 100.0),
        }
    }

    fn next_record(&mut self) -> Option<Result<ChatRecord>> {
        if let Some(err) = self.pending_error.take() {
            return Some(Err(err));
        }
        if self.finished {
            return None;
        }

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => {
                    self.finished = true;
                    return self.assembler.finish().map(Ok);
                }
                Ok(bytes) => {
                    self.bytes_read += bytes as u64;
                    if let Some(record) = self.assembler.push(&self.matcher, &self.line_buffer) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => {
                    self.finished = true;
                    let err = ChatstatError::from(e);
                    if let Some(record) = self.assembler.finish() {
                        self.pending_error = Some(err);
                        return Some(Ok(record));
                    }
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<ChatRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_record()? {
                Ok(record) if self.authored_only && !record.is_authored() => {}
                item => return Some(item),
            }
        }
    }
}

//! Unified error types for chatstat.
//!
//! Parsing itself never fails: malformed lines are folded into message text.
//! Errors only arise at the edges of the library, when reading input files,
//! decoding bytes, parsing filter dates, or writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::ChatRecord;
///
/// fn load() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - A streamed line is not valid UTF-8
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid UTF-8.
    ///
    /// Chat logs must be decoded before parsing, so this is raised before
    /// any line is looked at.
    #[error("File is not valid UTF-8{}: {source}", path_suffix(.path))]
    Utf8 {
        /// The file that failed to decode, if known
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value doesn't match the expected structure.
    ///
    /// Raised for unknown output extensions and output formats whose
    /// feature is disabled.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            path: None,
            source: err,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a decode error for a specific file.
    pub fn utf8(source: std::string::FromUtf8Error, path: impl Into<PathBuf>) -> Self {
        ChatstatError::Utf8 {
            path: Some(path.into()),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatstatError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_utf8() -> std::string::FromUtf8Error {
        String::from_utf8(vec![0xff, 0xfe, 0x41]).unwrap_err()
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatstatError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_utf8_error_with_path() {
        let err = ChatstatError::utf8(bad_utf8(), "/tmp/chat.txt");
        let display = err.to_string();
        assert!(display.contains("not valid UTF-8"));
        assert!(display.contains("/tmp/chat.txt"));
        assert!(err.is_utf8());
    }

    #[test]
    fn test_utf8_error_without_path() {
        let err = ChatstatError::from(bad_utf8());
        assert!(!err.to_string().contains("("));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatstatError::invalid_date("2024/01/01");
        let display = err.to_string();
        assert!(display.contains("2024/01/01"));
        assert!(display.contains("YYYY-MM-DD"));
        assert!(err.is_invalid_date());
        assert!(!err.is_io());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatstatError::invalid_format("output", "unknown extension '.txt'");
        assert_eq!(
            err.to_string(),
            "Invalid output format: unknown extension '.txt'"
        );
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = ChatstatError::utf8(bad_utf8(), "chat.txt");
        assert!(err.source().is_some());
    }
}

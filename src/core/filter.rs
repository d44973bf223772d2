//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Records from one participant |
//!
//! # Examples
//!
//! ```
//! use chatstat::ChatRecord;
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatstat::Result<()> {
//! let jan = NaiveDate::from_ymd_opt(2024, 1, 1);
//! let jun = NaiveDate::from_ymd_opt(2024, 6, 15);
//! let records = vec![
//!     ChatRecord::new(jan, "9:00 am", "Alice", "Old"),
//!     ChatRecord::new(jun, "9:00 am", "Alice", "New"),
//!     ChatRecord::new(jun, "9:05 am", "Bob", "Hi"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_author("alice");
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records without a parsed date are **excluded** when date filters are active
//! - Author matching is case-insensitive for ASCII characters
//! - An author filter never matches group notifications
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::ChatRecord;
use crate::error::{ChatstatError, Result};

/// Configuration for filtering records by date and author.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only records from this author (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// ```
    /// use chatstat::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_author("Alice");
    /// assert!(config.has_author_filter());
    /// ```
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.from = Some(author.into());
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_author_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the author filter is active.
    pub fn has_author_filter(&self) -> bool {
        self.from.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        if let Some(ref from) = self.from {
            match record.author() {
                Some(author) if author.eq_ignore_ascii_case(from) => {}
                _ => return false,
            }
        }

        if self.has_date_filter() {
            let Some(date) = record.date else {
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Filters records based on the provided configuration.
///
/// Returns only records that match all active filters. If no filters are
/// active, returns the input unchanged.
pub fn apply_filters(records: Vec<ChatRecord>, config: &FilterConfig) -> Vec<ChatRecord> {
    if !config.is_active() {
        return records;
    }

    let before = records.len();
    let filtered: Vec<ChatRecord> = records.into_iter().filter(|r| config.matches(r)).collect();
    tracing::debug!(before, after = filtered.len(), "applied filters");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(author: &str, message: &str, date: Option<&str>) -> ChatRecord {
        let date = date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
        ChatRecord::new(date, "12:00 pm", author, message)
    }

    #[test]
    fn test_filter_by_author() {
        let records = vec![
            rec("Alice", "Hello", None),
            rec("Bob", "Hi", None),
            rec("alice", "Bye", None),
        ];

        let config = FilterConfig::new().with_author("Alice");
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 2);
        assert!(
            filtered
                .iter()
                .all(|r| r.author().unwrap().eq_ignore_ascii_case("Alice"))
        );
    }

    #[test]
    fn test_author_filter_skips_notifications() {
        let records = vec![ChatRecord::notification(None, "9:00 am", "Alice joined")];
        let config = FilterConfig::new().with_author("Alice");
        assert!(apply_filters(records, &config).is_empty());
    }

    #[test]
    fn test_filter_by_date_after() {
        let records = vec![
            rec("Alice", "Old", Some("2024-01-01")),
            rec("Alice", "New", Some("2024-06-15")),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "New");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let records = vec![
            rec("Alice", "First", Some("2024-06-01")),
            rec("Alice", "Last", Some("2024-06-30")),
            rec("Alice", "Outside", Some("2024-07-01")),
        ];

        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_date_to("2024-06-30")
            .unwrap();
        let filtered = apply_filters(records, &config);

        let messages: Vec<&str> = filtered.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["First", "Last"]);
    }

    #[test]
    fn test_undated_excluded_when_date_filter() {
        let records = vec![
            rec("Alice", "With date", Some("2024-06-15")),
            rec("Alice", "No date", None),
        ];

        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "With date");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatstatError::InvalidDate { .. })));
    }

    #[test]
    fn test_with_date_directly() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let config = FilterConfig::new().with_after(date).with_before(date);
        assert_eq!(config.after, Some(date));
        assert_eq!(config.before, Some(date));
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_author("Alice").is_active());
        assert!(
            FilterConfig::new()
                .with_date_to("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}

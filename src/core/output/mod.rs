//! Record writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Date and time columns are written only when
//! [`OutputConfig::include_timestamps`](crate::core::models::OutputConfig) is set.
//! Dates use `YYYY-MM-DD`; times are copied as they appear in the export.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_json, write_jsonl};
//! use chatstat::core::models::OutputConfig;
//!
//! let records = chatstat::parse("1/2/23, 10:00\u{202F}am - Alice: Hello!");
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_json(&records, "output.json", &config)?;
//! write_jsonl(&records, "output.jsonl", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

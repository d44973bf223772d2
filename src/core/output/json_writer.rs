//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::ChatRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Flat record shape shared by the JSON and JSONL writers.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    author: Option<&'a str>,
    message: &'a str,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_record(record: &'a ChatRecord, config: &OutputConfig) -> Self {
        let (date, time) = if config.include_timestamps {
            (
                record.date.map(|d| d.format("%Y-%m-%d").to_string()),
                record.time.as_deref(),
            )
        } else {
            (None, None)
        };

        Self {
            date,
            time,
            author: record.author(),
            message: &record.message,
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "message": "Hello"},
///   {"author": null, "message": "Bob joined"}
/// ]
/// ```
pub fn write_json(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord::from_record(r, config))
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
